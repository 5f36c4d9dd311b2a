use super::{Element, HeuristicField};
use crate::{
    neighbors::Neighborhood, Graph, PathSegment, Point, PointMap, PointSet, Result,
    SearchConfig, SearchError,
};

use std::collections::BinaryHeap;

/// Finds the shortest path from `start` to `goal` with A*.
///
/// The returned [`PathSegment`] is ordered from `goal` back to `start`. If
/// `start == goal` it contains just that one Point.
///
/// ## Preconditions
///
/// Expanded nodes are put into a closed set and never reopened, even if a cheaper
/// route to them shows up later. That is only correct if the heuristic is admissible
/// **and** consistent. Under [`StepCost::Uniform`](crate::StepCost::Uniform) the
/// heuristic includes terrain penalties while the steps themselves all cost 1, so
/// on grids with penalties the result is a valid path but not necessarily the
/// shortest one. Obstacle-free and penalty-free grids always get shortest paths.
///
/// ## Errors
///
/// - [`SearchError::OutOfBounds`] if either endpoint is off the Grid
/// - [`SearchError::Unreachable`] if the frontier runs dry, or an endpoint is an
///   obstacle
/// - [`SearchError::Aborted`] if `config.max_expansions` is exceeded
pub fn find_path<N: Neighborhood>(
    graph: &Graph<N>,
    start: Point,
    goal: Point,
    config: &SearchConfig,
) -> Result<PathSegment> {
    let timer = std::time::Instant::now();

    for point in [start, goal] {
        if !graph.contains(point) {
            return Err(SearchError::OutOfBounds(point));
        }
    }
    if !graph.is_passable(start) || !graph.is_passable(goal) {
        log::debug!("a_star {:?} -> {:?}: endpoint is an obstacle", start, goal);
        return Err(SearchError::Unreachable { start, goal });
    }

    let heuristics = HeuristicField::new(graph, goal, config.step_cost);
    re_trace!("compute heuristics", timer);

    let size_hint = graph.grid().width() * graph.grid().height();
    // absent = not reached yet
    let mut cost_so_far: PointMap<usize> = PointMap::with_capacity(size_hint / 4);
    let mut came_from: PointMap<Point> = PointMap::with_capacity(size_hint / 4);
    let mut closed = PointSet::with_capacity(size_hint / 4);
    let mut frontier = BinaryHeap::with_capacity(size_hint / 8);

    let mut all_neighbors = vec![];
    let mut expanded = 0;

    cost_so_far.insert(start, 0);
    frontier.push(Element(start, heuristics.get(start).unwrap_or(0)));

    while let Some(Element(current, _)) = frontier.pop() {
        if current == goal {
            let steps = {
                let mut steps = vec![goal];
                let mut current = goal;
                while let Some(&prev) = came_from.get(&current) {
                    steps.push(prev);
                    current = prev;
                }
                steps
            };
            re_trace!("a_star search", timer);
            log::trace!(
                "a_star {:?} -> {:?}: {} steps, {} nodes expanded",
                start,
                goal,
                steps.len(),
                expanded
            );
            return Ok(PathSegment::from_goal_to_start(steps));
        }

        if !closed.insert(current) {
            // stale duplicate of an expanded node
            continue;
        }

        if let Some(max) = config.max_expansions {
            if expanded >= max {
                log::debug!(
                    "a_star {:?} -> {:?}: aborted after {} expansions",
                    start,
                    goal,
                    expanded
                );
                return Err(SearchError::Aborted { expanded });
            }
        }
        expanded += 1;

        let current_cost = cost_so_far[&current];

        all_neighbors.clear();
        graph.neighbors(current, &mut all_neighbors);

        for &other in all_neighbors.iter() {
            if closed.contains(&other) {
                continue;
            }
            // costs saturate, so huge penalties rank last instead of wrapping
            let step = graph.step_cost(other, config.step_cost);
            let other_cost = current_cost.saturating_add(step);
            if cost_so_far.get(&other).map_or(false, |&prev| other_cost >= prev) {
                continue;
            }
            let estimate = match heuristics.get(other) {
                Some(estimate) => estimate,
                None => continue,
            };
            cost_so_far.insert(other, other_cost);
            came_from.insert(other, current);
            frontier.push(Element(other, other_cost.saturating_add(estimate)));
        }
    }

    log::debug!(
        "a_star {:?} -> {:?}: unreachable after {} expansions",
        start,
        goal,
        expanded
    );
    Err(SearchError::Unreachable { start, goal })
}
