use super::PathSegment;
use crate::{Result, SearchError};

/// Joins `legs`, given in travel order, into one segment.
///
/// Each leg must begin where the previous one ends. That shared junction appears
/// exactly once in the result. Like every [`PathSegment`], the result is ordered from
/// its goal (the goal of the last leg) back to its start (the start of the first leg).
///
/// ## Errors
///
/// [`SearchError::InternalInconsistency`] if `legs` is empty or two legs do not meet.
pub fn stitch(legs: &[PathSegment]) -> Result<PathSegment> {
    let (first, rest) = legs.split_first().ok_or_else(|| {
        SearchError::InternalInconsistency("no segments to stitch".to_string())
    })?;

    let mut walk = Vec::with_capacity(legs.iter().map(PathSegment::len).sum());
    walk.extend(first.walk());

    let mut previous = first;
    for leg in rest {
        if previous.goal() != leg.start() {
            return Err(SearchError::InternalInconsistency(format!(
                "segment ending at {:?} cannot continue with a segment starting at {:?}",
                previous.goal(),
                leg.start()
            )));
        }
        walk.extend(leg.walk().skip(1));
        previous = leg;
    }

    walk.reverse();
    Ok(PathSegment::from_goal_to_start(walk))
}
