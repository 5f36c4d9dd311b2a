//! A crate with the most common Neighborhoods

use crate::Point;

/// Defines how a Point is connected to other Points
///
/// The same Neighborhood drives both the A* search and the depth-first Waypoint
/// lookup, so both agree on what "adjacent" means.
pub trait Neighborhood: Clone + std::fmt::Debug + Send + Sync {
    /// Provides all the Neighbors of a Point, in a fixed order.
    ///
    /// The Neighbors should be written into `target`.
    ///
    /// Note that it is not necessary to check if the Neighbors are solid,
    /// the [`Graph`](crate::Graph) takes care of that.
    fn get_all_neighbors(&self, point: Point, target: &mut Vec<Point>);

    /// Gives a Heuristic for how long it takes to reach `goal` from `point`.
    ///
    /// This is the base distance of the
    /// [`HeuristicField`](crate::HeuristicField). It must never overestimate the
    /// number of steps, or paths may no longer be the shortest possible.
    fn heuristic(&self, point: Point, goal: Point) -> usize;
}

mod manhattan;
pub use manhattan::ManhattanNeighborhood;

mod moore;
pub use moore::MooreNeighborhood;

// Each delta is only applied if the result stays inside `width` x `height`.
fn push_in_bounds(
    (x, y): Point,
    deltas: &[(isize, isize)],
    (width, height): (usize, usize),
    target: &mut Vec<Point>,
) {
    for &(dx, dy) in deltas {
        let nx = x as isize + dx;
        let ny = y as isize + dy;
        if nx >= 0 && ny >= 0 && (nx as usize) < width && (ny as usize) < height {
            target.push((nx as usize, ny as usize));
        }
    }
}
