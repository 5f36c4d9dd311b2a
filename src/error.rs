//! Error types for Waypoint pathfinding

use thiserror::Error;

use crate::Point;

/// Everything that can go wrong while building a [`CachedSearch`](crate::CachedSearch)
/// or answering a query.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// No path exists between the two endpoints.
    #[error("no path from {start:?} to {goal:?}")]
    Unreachable {
        /// Where the search started.
        start: Point,
        /// Where the search tried to go.
        goal: Point,
    },

    /// The search hit its expansion budget before finishing.
    #[error("search aborted after expanding {expanded} nodes")]
    Aborted {
        /// Number of nodes expanded when the budget ran out.
        expanded: usize,
    },

    /// A query endpoint lies outside the Grid.
    #[error("{0:?} is outside the grid")]
    OutOfBounds(Point),

    /// A Waypoint lies outside the Grid.
    #[error("waypoint {0:?} is outside the grid")]
    WaypointOutOfBounds(Point),

    /// A Waypoint sits on an obstacle cell.
    #[error("waypoint {0:?} is on an obstacle")]
    WaypointBlocked(Point),

    /// A query needs stitching but there are no Waypoints to stitch through.
    #[error("the waypoint set is empty")]
    NoWaypoints,

    /// A cache lookup named a position that is not a Waypoint.
    #[error("{0:?} is not a waypoint")]
    NotAWaypoint(Point),

    /// A [`SearchConfig`](crate::SearchConfig) value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The cost array does not match the declared Grid size.
    #[error("expected {expected} cell costs for the grid, got {actual}")]
    GridShape {
        /// `width * height`
        expected: usize,
        /// Number of costs supplied.
        actual: usize,
    },

    /// Segments that should meet did not, or the query dispatch reached a state it
    /// never should.
    #[error("internal inconsistency: {0}")]
    InternalInconsistency(String),
}

impl SearchError {
    /// Whether this error was caused by bad input data rather than by the search.
    ///
    /// Configuration errors are raised before any search begins.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            SearchError::OutOfBounds(_)
                | SearchError::WaypointOutOfBounds(_)
                | SearchError::WaypointBlocked(_)
                | SearchError::NoWaypoints
                | SearchError::InvalidConfig(_)
                | SearchError::GridShape { .. }
        )
    }
}

/// Result type used throughout this crate.
pub type Result<T> = std::result::Result<T, SearchError>;
