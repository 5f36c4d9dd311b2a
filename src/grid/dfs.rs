use crate::{neighbors::Neighborhood, Graph, Point, PointMap, PointSet, Result, SearchError};

/// A Waypoint found by [`find_nearest`], with the length of the depth-first route that
/// reached it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NearbyWaypoint {
    /// Number of Points on the depth-first route, both ends included.
    pub cost: usize,
    /// The Waypoint that was reached.
    pub waypoint: Point,
}

/// Finds up to `k` Waypoints near `start` with repeated depth-first traversals.
///
/// Each traversal stops at the first Point in `candidates` that is neither `start`
/// nor in `exclude` (nor found by an earlier round). The length of that traversal's
/// route is recorded as its cost. This is a cheap approximation: which Waypoint is
/// found first depends on the depth-first order of the [`Neighborhood`], not on the
/// true distance.
///
/// A new entry goes to the front of the result if its cost is strictly lower than the
/// current first entry's, otherwise to the back. The result is **not** sorted.
///
/// Returns fewer than `k` entries when no further candidate is reachable.
///
/// ## Errors
///
/// [`SearchError::Aborted`] if one traversal visits more than `max_expansions` Points.
pub fn find_nearest<N: Neighborhood>(
    graph: &Graph<N>,
    start: Point,
    candidates: &PointSet,
    exclude: &PointSet,
    k: usize,
    max_expansions: Option<usize>,
) -> Result<Vec<NearbyWaypoint>> {
    let mut nearby: Vec<NearbyWaypoint> = Vec::with_capacity(k);
    if !graph.is_passable(start) {
        return Ok(nearby);
    }

    let mut excluded = exclude.clone();
    excluded.insert(start);

    for _ in 0..k {
        let is_target = |p: &Point| candidates.contains(p) && !excluded.contains(p);
        let found = match depth_first(graph, start, is_target, max_expansions)? {
            Some(found) => found,
            None => break,
        };

        match nearby.first() {
            Some(first) if found.cost < first.cost => nearby.insert(0, found),
            _ => nearby.push(found),
        }
        excluded.insert(found.waypoint);
    }

    log::trace!("nearby waypoints of {:?}: {:?}", start, nearby);
    Ok(nearby)
}

/// An iterative depth-first traversal that stops at the first Point matching
/// `is_target`. Neighbors are visited in the order the [`Neighborhood`] lists them.
fn depth_first<N: Neighborhood>(
    graph: &Graph<N>,
    start: Point,
    is_target: impl Fn(&Point) -> bool,
    max_expansions: Option<usize>,
) -> Result<Option<NearbyWaypoint>> {
    let mut visited = PointSet::new();
    let mut parents: PointMap<Point> = PointMap::new();
    let mut stack: Vec<(Point, Option<Point>)> = vec![(start, None)];
    let mut all_neighbors = vec![];

    while let Some((current, parent)) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        if let Some(parent) = parent {
            parents.insert(current, parent);
        }

        if is_target(&current) {
            let mut cost = 1;
            let mut node = current;
            while let Some(&prev) = parents.get(&node) {
                cost += 1;
                node = prev;
            }
            return Ok(Some(NearbyWaypoint {
                cost,
                waypoint: current,
            }));
        }

        if let Some(max) = max_expansions {
            if visited.len() > max {
                log::debug!(
                    "depth-first search from {:?}: aborted after {} nodes",
                    start,
                    max
                );
                return Err(SearchError::Aborted { expanded: max });
            }
        }

        all_neighbors.clear();
        graph.neighbors(current, &mut all_neighbors);
        // reversed, so that the first neighbor is popped first
        for &other in all_neighbors.iter().rev() {
            if !visited.contains(&other) {
                stack.push((other, Some(current)));
            }
        }
    }

    Ok(None)
}
