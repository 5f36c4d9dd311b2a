#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::WaypointPair;
use crate::{
    grid::find_path, neighbors::Neighborhood, Graph, PathSegment, Point, PointSet, Result,
    SearchConfig, SearchError,
};

type PairMap = hashbrown::HashMap<WaypointPair, PathSegment>;

/// Paths between every pair of Waypoints, computed once.
///
/// Construction runs one A* search per unordered pair, so it costs
/// `O(|W|² × search_cost)`. That price is paid once and then shared by every
/// query. With the `parallel` feature the searches are spread over rayon's thread
/// pool; the table is complete before [`new`](WaypointPathCache::new) returns and
/// never changes afterwards, so it can be read from any number of threads.
///
/// Each pair is stored once, under its [`WaypointPair`] key, as the path from the
/// smaller to the larger Waypoint. [`lookup`](WaypointPathCache::lookup) flips it as
/// needed.
#[derive(Clone, Debug)]
pub struct WaypointPathCache {
    waypoints: PointSet,
    paths: PairMap,
}

impl WaypointPathCache {
    /// Validates `waypoints` and searches paths between all pairs of them.
    ///
    /// Pairs without a path between them are simply not stored.
    ///
    /// ## Errors
    ///
    /// - [`SearchError::WaypointOutOfBounds`] / [`SearchError::WaypointBlocked`] for
    ///   a Waypoint that is off the Grid or on an obstacle
    /// - [`SearchError::Aborted`] if a pair search exceeds `config.max_expansions`
    pub fn new<N: Neighborhood>(
        graph: &Graph<N>,
        waypoints: impl IntoIterator<Item = Point>,
        config: &SearchConfig,
    ) -> Result<WaypointPathCache> {
        let timer = std::time::Instant::now();

        let waypoints: PointSet = waypoints.into_iter().collect();
        for &waypoint in waypoints.iter() {
            if !graph.contains(waypoint) {
                return Err(SearchError::WaypointOutOfBounds(waypoint));
            }
            if !graph.is_passable(waypoint) {
                return Err(SearchError::WaypointBlocked(waypoint));
            }
        }

        let mut sorted: Vec<Point> = waypoints.iter().copied().collect();
        sorted.sort_unstable();

        let mut pairs = Vec::with_capacity(sorted.len() * sorted.len().saturating_sub(1) / 2);
        for (i, &low) in sorted.iter().enumerate() {
            for &high in &sorted[i + 1..] {
                pairs.push(WaypointPair::new(low, high).0);
            }
        }
        let total = pairs.len();

        re_trace!("collect waypoint pairs", timer);

        let search_pair = |pair: WaypointPair| -> Result<Option<(WaypointPair, PathSegment)>> {
            match find_path(graph, pair.low(), pair.high(), config) {
                Ok(path) => Ok(Some((pair, path))),
                Err(SearchError::Unreachable { .. }) => {
                    log::debug!(
                        "no path between waypoints {:?} and {:?}",
                        pair.low(),
                        pair.high()
                    );
                    Ok(None)
                }
                Err(err) => Err(err),
            }
        };

        #[cfg(feature = "parallel")]
        let paths: PairMap = pairs
            .into_par_iter()
            .map(search_pair)
            .collect::<Result<Vec<_>>>()?
            .into_par_iter()
            .flatten()
            .collect();

        #[cfg(not(feature = "parallel"))]
        let paths: PairMap = pairs
            .into_iter()
            .map(search_pair)
            .collect::<Result<Vec<_>>>()?
            .into_iter()
            .flatten()
            .collect();

        re_trace!("search all waypoint pairs", timer);

        log::debug!(
            "waypoint cache: {} waypoints, {} of {} pairs connected",
            waypoints.len(),
            paths.len(),
            total
        );

        Ok(WaypointPathCache { waypoints, paths })
    }

    /// The cached path from `from` to `to`.
    ///
    /// `lookup(a, b)` and `lookup(b, a)` return the same route in opposite
    /// directions. `lookup(a, a)` is the single-Point segment `[a]`.
    ///
    /// ## Errors
    ///
    /// - [`SearchError::NotAWaypoint`] if either end is not a Waypoint
    /// - [`SearchError::Unreachable`] if the two Waypoints are not connected
    pub fn lookup(&self, from: Point, to: Point) -> Result<PathSegment> {
        for point in [from, to] {
            if !self.contains(point) {
                return Err(SearchError::NotAWaypoint(point));
            }
        }
        if from == to {
            return Ok(PathSegment::single(from));
        }

        let (pair, swapped) = WaypointPair::new(from, to);
        match self.paths.get(&pair) {
            Some(path) if swapped => Ok(path.reversed()),
            Some(path) => Ok(path.clone()),
            None => Err(SearchError::Unreachable {
                start: from,
                goal: to,
            }),
        }
    }

    /// Whether `point` is one of the Waypoints.
    pub fn contains(&self, point: Point) -> bool {
        self.waypoints.contains(&point)
    }

    /// All Waypoints.
    pub fn waypoints(&self) -> &PointSet {
        &self.waypoints
    }

    /// The number of stored (connected) pairs.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether no pair is stored.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Every stored pair with its path, in canonical direction.
    pub fn iter(&self) -> impl Iterator<Item = (WaypointPair, &PathSegment)> + '_ {
        self.paths.iter().map(|(&pair, path)| (pair, path))
    }
}
