//! The all-pairs path table over the Waypoints.

mod pair_key;
pub use pair_key::WaypointPair;

mod waypoint_cache;
pub use waypoint_cache::WaypointPathCache;
