//! Shortest paths on a weighted Grid, accelerated by a cache of paths between Waypoints.
//!
//! A [`CachedSearch`] is built from a [`Graph`] (a [`GridMap`] plus a
//! [`Neighborhood`]) and a fixed set of Waypoints. Construction runs one A* search
//! for every unordered pair of Waypoints and stores the results. This is the central
//! tradeoff of the crate: `O(|W|² × search_cost)` is paid once, up front, so that
//! queries whose endpoints sit near the Waypoint network only need short local
//! searches that get stitched onto cached segments.
//!
//! ```
//! use waypoint_pathfinding::prelude::*;
//!
//! // 0 = normal, positive = terrain penalty, negative = obstacle
//! let grid = GridMap::from_rows(&[
//!     [0, 0, 0, 0, 0],
//!     [0, -1, -1, -1, 0],
//!     [0, 0, 0, 0, 0],
//! ])
//! .unwrap();
//! let graph = Graph::new(grid, ManhattanNeighborhood::new(5, 3));
//!
//! let waypoints = [(0, 0), (4, 0), (0, 2), (4, 2)];
//! let search = CachedSearch::new(graph, waypoints, SearchConfig::default()).unwrap();
//!
//! match search.get_path((1, 0), (3, 2)).unwrap() {
//!     Route::Path(path) => {
//!         assert_eq!(path.start(), (1, 0));
//!         assert_eq!(path.goal(), (3, 2));
//!         let steps: Vec<_> = path.walk().collect();
//!         assert_eq!(steps.first(), Some(&(1, 0)));
//!     }
//!     Route::AlreadyAtGoal => unreachable!(),
//! }
//! ```
//!
//! ## Conventions
//!
//! Callers use `(x, y)` [`Point`]s. The Grid is stored row-major and every grid or
//! heuristic lookup goes through the single `(x, y) -> (row, col)` conversion in
//! [`RowCol`](grid::RowCol).
//!
//! Every [`PathSegment`] is ordered from its goal to its start, which is the order in
//! which A* reconstructs it. Use [`PathSegment::walk`] to travel from start to goal.
//!
//! ## Features
//!
//! `parallel` (default): builds the Waypoint cache on rayon's thread pool.

#![deny(missing_debug_implementations)]
#![warn(missing_docs, rust_2018_idioms)]

// a Macro to log::trace the time since $timer, and restart $timer
macro_rules! re_trace {
    ($msg: literal, $timer: ident) => {
        let now = std::time::Instant::now();
        log::trace!(concat!("time to ", $msg, ": {:?}"), now - $timer);
        #[allow(unused)]
        let $timer = now;
    };
}

pub mod cache;
mod cached_search;
mod config;
mod error;
pub mod graph;
pub mod grid;
pub mod neighbors;
pub mod path;

pub use cache::WaypointPathCache;
pub use cached_search::{CachedSearch, Route};
pub use config::{SearchConfig, StepCost};
pub use error::{Result, SearchError};
pub use graph::Graph;
pub use grid::{find_nearest, find_path, CellCost, GridMap, HeuristicField, NearbyWaypoint};
pub use neighbors::Neighborhood;
pub use path::{stitch, PathSegment};

/// A shorthand for `(x, y)` positions on a Grid.
pub type Point = (usize, usize);

/// A [`HashMap`](hashbrown::HashMap) keyed by [`Point`].
pub type PointMap<V> = hashbrown::HashMap<Point, V>;
/// A [`HashSet`](hashbrown::HashSet) of [`Point`]s.
pub type PointSet = hashbrown::HashSet<Point>;

/// The prelude for this crate.
pub mod prelude {
    pub use crate::{
        neighbors::{ManhattanNeighborhood, MooreNeighborhood, Neighborhood},
        CachedSearch, CellCost, Graph, GridMap, PathSegment, Point, Route, SearchConfig,
        SearchError, StepCost, WaypointPathCache,
    };
}

#[cfg(test)]
pub(crate) mod test_util {
    use crate::prelude::*;

    pub fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    /// Builds a 4-connected Graph from rows of raw costs.
    pub fn graph<const W: usize>(rows: &[[isize; W]]) -> Graph<ManhattanNeighborhood> {
        let grid = GridMap::from_rows(rows).unwrap();
        let neighborhood = ManhattanNeighborhood::new(grid.width(), grid.height());
        Graph::new(grid, neighborhood)
    }

    /// Asserts that every consecutive pair of `path` are neighbors in `graph`.
    pub fn assert_contiguous<N: Neighborhood>(graph: &Graph<N>, path: &PathSegment) {
        let points = path.to_vec();
        let mut buf = vec![];
        for pair in points.windows(2) {
            buf.clear();
            graph.neighbors(pair[0], &mut buf);
            assert!(
                buf.contains(&pair[1]),
                "{:?} and {:?} are not neighbors in {:?}",
                pair[0],
                pair[1],
                points
            );
        }
    }
}
