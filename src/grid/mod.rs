//! The weighted Grid and the searches that run on it.

mod grid_map;
pub use grid_map::{CellCost, GridMap, RowCol};

mod heuristic;
pub use heuristic::HeuristicField;

mod element;
pub(crate) use element::Element;

mod a_star;
pub use a_star::find_path;

mod dfs;
pub use dfs::{find_nearest, NearbyWaypoint};
