use crate::{
    grid::{find_nearest, find_path, NearbyWaypoint},
    neighbors::Neighborhood,
    path::stitch,
    Graph, PathSegment, Point, PointSet, Result, SearchConfig, SearchError, WaypointPathCache,
};

/// The answer to a [`CachedSearch::get_path`] query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    /// `start == goal`; no movement is needed.
    AlreadyAtGoal,
    /// A route from start to goal, ordered from goal back to start.
    Path(PathSegment),
}

impl Route {
    /// The path, unless already at the goal.
    pub fn path(&self) -> Option<&PathSegment> {
        match self {
            Route::AlreadyAtGoal => None,
            Route::Path(path) => Some(path),
        }
    }

    /// Turns this into the path, unless already at the goal.
    pub fn into_path(self) -> Option<PathSegment> {
        match self {
            Route::AlreadyAtGoal => None,
            Route::Path(path) => Some(path),
        }
    }
}

/// Answers shortest-path queries by stitching local A* searches onto cached paths
/// between Waypoints.
///
/// Building a `CachedSearch` builds its [`WaypointPathCache`] right away. The Graph
/// and the Waypoints are fixed for its whole lifetime: if either changes, build a
/// new one.
///
/// How a query is answered depends on which endpoints are Waypoints:
///
/// | start | goal | route |
/// |---|---|---|
/// | Waypoint | Waypoint | cached path |
/// | Waypoint | other | cached path to the Waypoint nearest to goal, then A* |
/// | other | Waypoint | A* to the Waypoint nearest to start, then cached path |
/// | other | other | A* to a Waypoint, cached path, A* to goal; or plain A* |
///
/// "Nearest" is decided by [`find_nearest`], and the first entry it returns is always
/// the one used.
#[derive(Clone, Debug)]
pub struct CachedSearch<N: Neighborhood> {
    graph: Graph<N>,
    cache: WaypointPathCache,
    config: SearchConfig,
}

impl<N: Neighborhood> CachedSearch<N> {
    /// Validates the input and precomputes the paths between all pairs of
    /// `waypoints`.
    ///
    /// ## Errors
    ///
    /// - [`SearchError::InvalidConfig`] for an invalid `config`
    /// - any error of [`WaypointPathCache::new`]
    pub fn new(
        graph: Graph<N>,
        waypoints: impl IntoIterator<Item = Point>,
        config: SearchConfig,
    ) -> Result<CachedSearch<N>> {
        config.validate()?;
        let cache = WaypointPathCache::new(&graph, waypoints, &config)?;
        Ok(CachedSearch {
            graph,
            cache,
            config,
        })
    }

    /// Finds a route from `start` to `goal`.
    ///
    /// ## Errors
    ///
    /// - [`SearchError::OutOfBounds`] if an endpoint is off the Grid
    /// - [`SearchError::NoWaypoints`] if neither endpoint is a Waypoint and there are
    ///   no Waypoints to route through
    /// - [`SearchError::Unreachable`] if there is no route
    /// - [`SearchError::Aborted`] if a search exceeds `max_expansions`
    /// - [`SearchError::InternalInconsistency`] if the pieces of the route do not fit
    ///   together
    pub fn get_path(&self, start: Point, goal: Point) -> Result<Route> {
        if start == goal {
            return Ok(Route::AlreadyAtGoal);
        }
        for point in [start, goal] {
            if !self.graph.contains(point) {
                return Err(SearchError::OutOfBounds(point));
            }
        }

        let start_is_waypoint = self.cache.contains(start);
        let goal_is_waypoint = self.cache.contains(goal);

        let path = match (start_is_waypoint, goal_is_waypoint) {
            (true, true) => {
                log::trace!("{:?} -> {:?}: both are waypoints", start, goal);
                self.cache.lookup(start, goal)
            }
            (true, false) => self.from_waypoint(start, goal),
            (false, true) => self.to_waypoint(start, goal),
            (false, false) => self.between_non_waypoints(start, goal),
        };

        let path = match path {
            Ok(path) => path,
            // a leg failed; report it for the whole query
            Err(SearchError::Unreachable { .. }) => {
                return Err(SearchError::Unreachable { start, goal })
            }
            Err(err) => return Err(err),
        };

        if path.start() != start || path.goal() != goal {
            return Err(SearchError::InternalInconsistency(format!(
                "route for {:?} -> {:?} runs from {:?} to {:?}",
                start,
                goal,
                path.start(),
                path.goal()
            )));
        }
        Ok(Route::Path(path))
    }

    /// The Waypoints near `point`, as the query dispatch sees them.
    pub fn nearest_waypoints(&self, point: Point) -> Result<Vec<NearbyWaypoint>> {
        find_nearest(
            &self.graph,
            point,
            self.cache.waypoints(),
            &PointSet::new(),
            self.config.nearby_waypoints,
            self.config.max_expansions,
        )
    }

    /// The Graph every search runs on.
    pub fn graph(&self) -> &Graph<N> {
        &self.graph
    }

    /// The precomputed Waypoint paths.
    pub fn cache(&self) -> &WaypointPathCache {
        &self.cache
    }

    /// The options used for every query.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    fn search(&self, start: Point, goal: Point) -> Result<PathSegment> {
        find_path(&self.graph, start, goal, &self.config)
    }

    /// Always the first Waypoint [`find_nearest`] returns. The choice is deterministic.
    fn first_nearby(&self, point: Point) -> Result<Option<Point>> {
        Ok(self
            .nearest_waypoints(point)?
            .first()
            .map(|nearby| nearby.waypoint))
    }

    fn from_waypoint(&self, start: Point, goal: Point) -> Result<PathSegment> {
        let chosen = self
            .first_nearby(goal)?
            .ok_or(SearchError::Unreachable { start, goal })?;
        log::trace!("{:?} -> {:?}: leaving the network at {:?}", start, goal, chosen);
        stitch(&[self.cache.lookup(start, chosen)?, self.search(chosen, goal)?])
    }

    fn to_waypoint(&self, start: Point, goal: Point) -> Result<PathSegment> {
        let chosen = self
            .first_nearby(start)?
            .ok_or(SearchError::Unreachable { start, goal })?;
        log::trace!("{:?} -> {:?}: entering the network at {:?}", start, goal, chosen);
        stitch(&[self.search(start, chosen)?, self.cache.lookup(chosen, goal)?])
    }

    fn between_non_waypoints(&self, start: Point, goal: Point) -> Result<PathSegment> {
        if self.cache.waypoints().is_empty() {
            return Err(SearchError::NoWaypoints);
        }

        let start_nearby = self.nearest_waypoints(start)?;
        let goal_nearby = self.nearest_waypoints(goal)?;

        let shared = start_nearby
            .iter()
            .any(|s| goal_nearby.iter().any(|g| g.waypoint == s.waypoint));
        if shared {
            log::trace!("{:?} -> {:?}: shared nearby waypoint, direct search", start, goal);
            return self.search(start, goal);
        }

        match self.closest_cached_pair(&start_nearby, &goal_nearby)? {
            Some((start_waypoint, goal_waypoint, cached)) => {
                log::trace!(
                    "{:?} -> {:?}: through {:?} and {:?}",
                    start,
                    goal,
                    start_waypoint,
                    goal_waypoint
                );
                stitch(&[
                    self.search(start, start_waypoint)?,
                    cached,
                    self.search(goal_waypoint, goal)?,
                ])
            }
            None => {
                log::debug!(
                    "{:?} -> {:?}: no cached route between nearby waypoints, direct search",
                    start,
                    goal
                );
                self.search(start, goal)
            }
        }
    }

    /// The pair with the shortest cached path, one Waypoint from each side.
    ///
    /// Only the cached middle leg is compared, not the full route. On a tie the pair
    /// scanned last wins.
    fn closest_cached_pair(
        &self,
        start_nearby: &[NearbyWaypoint],
        goal_nearby: &[NearbyWaypoint],
    ) -> Result<Option<(Point, Point, PathSegment)>> {
        let mut closest: Option<(Point, Point, PathSegment)> = None;
        for s in start_nearby {
            for g in goal_nearby {
                let cached = match self.cache.lookup(s.waypoint, g.waypoint) {
                    Ok(cached) => cached,
                    Err(SearchError::Unreachable { .. }) => continue,
                    Err(err) => return Err(err),
                };
                let is_closer = closest
                    .as_ref()
                    .map_or(true, |(_, _, best)| cached.len() <= best.len());
                if is_closer {
                    closest = Some((s.waypoint, g.waypoint, cached));
                }
            }
        }
        Ok(closest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;
    use crate::test_util::{assert_contiguous, graph, init_logger};

    fn open_search(
        width: usize,
        height: usize,
        waypoints: &[Point],
    ) -> CachedSearch<ManhattanNeighborhood> {
        let graph = Graph::new(
            GridMap::open(width, height),
            ManhattanNeighborhood::new(width, height),
        );
        CachedSearch::new(graph, waypoints.iter().copied(), SearchConfig::default()).unwrap()
    }

    #[test]
    fn already_at_goal() {
        let search = open_search(3, 3, &[(0, 0)]);
        assert_eq!(search.get_path((1, 1), (1, 1)).unwrap(), Route::AlreadyAtGoal);
        assert_eq!(search.get_path((0, 0), (0, 0)).unwrap(), Route::AlreadyAtGoal);
        assert_eq!(Route::AlreadyAtGoal.path(), None);
    }

    #[test]
    fn both_waypoints_is_a_lookup() {
        init_logger();
        let search = open_search(5, 5, &[(0, 0), (4, 4), (2, 0)]);
        let route = search.get_path((4, 4), (0, 0)).unwrap();
        assert_eq!(route.path(), Some(&search.cache().lookup((4, 4), (0, 0)).unwrap()));
        assert_eq!(route.into_path().unwrap().len(), 9);
    }

    #[test]
    fn start_is_waypoint() {
        let search = open_search(6, 1, &[(0, 0), (3, 0)]);
        // nearest to goal (5, 0) is (3, 0)
        let path = search.get_path((0, 0), (5, 0)).unwrap().into_path().unwrap();
        assert_eq!(
            path.walk().collect::<Vec<_>>(),
            vec![(0, 0), (1, 0), (2, 0), (3, 0), (4, 0), (5, 0)]
        );
    }

    #[test]
    fn goal_is_waypoint() {
        let search = open_search(6, 1, &[(2, 0), (5, 0)]);
        let path = search.get_path((0, 0), (5, 0)).unwrap().into_path().unwrap();
        assert_eq!(path.len(), 6);
        assert_eq!(path.start(), (0, 0));
        assert_eq!(path.goal(), (5, 0));
        assert_contiguous(search.graph(), &path);
    }

    #[test]
    fn chosen_waypoint_is_the_start_itself() {
        // the only waypoint near the goal is the start
        let search = open_search(4, 1, &[(0, 0)]);
        let path = search.get_path((0, 0), (3, 0)).unwrap().into_path().unwrap();
        assert_eq!(path.len(), 4);
    }

    #[test]
    fn stitched_through_two_waypoints() {
        // A corridor: start sees (1, 0) and (3, 0), goal sees (10, 0) and (8, 0).
        // The shortest cached leg is (3, 0) -> (8, 0).
        let search = open_search(12, 1, &[(1, 0), (3, 0), (8, 0), (10, 0)]);
        let path = search.get_path((0, 0), (11, 0)).unwrap().into_path().unwrap();

        assert_eq!(path.start(), (0, 0));
        assert_eq!(path.goal(), (11, 0));
        assert_eq!(path.len(), 12);
        assert!(path.contains((3, 0)));
        assert!(path.contains((8, 0)));
        assert_contiguous(search.graph(), &path);
    }

    #[test]
    fn shared_nearby_waypoint_falls_back() {
        let search = open_search(5, 1, &[(2, 0)]);
        let path = search.get_path((0, 0), (4, 0)).unwrap().into_path().unwrap();
        assert_eq!(path.len(), 5);
    }

    #[test]
    fn no_waypoints() {
        let search = open_search(3, 3, &[]);
        assert_eq!(
            search.get_path((0, 0), (2, 2)).unwrap_err(),
            SearchError::NoWaypoints
        );
    }

    #[test]
    fn out_of_bounds_query() {
        let search = open_search(3, 3, &[(0, 0)]);
        assert_eq!(
            search.get_path((0, 0), (3, 0)).unwrap_err(),
            SearchError::OutOfBounds((3, 0))
        );
    }

    #[test]
    fn unreachable_goal() {
        let graph = graph(&[[0, 0, -1, 0]]);
        let search = CachedSearch::new(graph, [(0, 0)], SearchConfig::default()).unwrap();
        assert_eq!(
            search.get_path((0, 0), (3, 0)).unwrap_err(),
            SearchError::Unreachable {
                start: (0, 0),
                goal: (3, 0)
            }
        );
        assert_eq!(
            search.get_path((1, 0), (3, 0)).unwrap_err(),
            SearchError::Unreachable {
                start: (1, 0),
                goal: (3, 0)
            }
        );
    }

    #[test]
    fn isolated_pocket_without_waypoints() {
        // Neither endpoint can reach a waypoint, but they can reach each other.
        let graph = graph(&[[0, 0, -1, 0]]);
        let search = CachedSearch::new(graph, [(3, 0)], SearchConfig::default()).unwrap();
        let path = search.get_path((0, 0), (1, 0)).unwrap().into_path().unwrap();
        assert_eq!(path.len(), 2);
    }

    #[test]
    fn closest_pair_ties_go_to_the_last_pair() {
        let search = open_search(9, 3, &[(1, 0), (1, 2), (7, 0), (7, 2)]);
        let nearby = |waypoint| NearbyWaypoint { cost: 1, waypoint };

        // (1, 0)-(7, 0) and (1, 2)-(7, 2) both have 7 Points, the diagonals 9.
        let (s, g, cached) = search
            .closest_cached_pair(
                &[nearby((1, 0)), nearby((1, 2))],
                &[nearby((7, 0)), nearby((7, 2))],
            )
            .unwrap()
            .unwrap();
        assert_eq!((s, g), ((1, 2), (7, 2)));
        assert_eq!(cached.len(), 7);
        assert_eq!(cached.start(), (1, 2));
        assert_eq!(cached.goal(), (7, 2));
    }

    #[test]
    fn invalid_config() {
        let graph = graph(&[[0, 0]]);
        let config = SearchConfig::default().with_nearby_waypoints(0);
        assert!(matches!(
            CachedSearch::new(graph, [(0, 0)], config),
            Err(SearchError::InvalidConfig(_))
        ));
    }
}
