use crate::{Result, SearchError};

/// How much a single step across the Grid costs.
///
/// The source behaviour is [`StepCost::Uniform`]: every step costs 1 and terrain
/// penalties only bias the order in which A* expands nodes. Returned paths are then
/// shortest by step count, not by terrain cost. [`StepCost::Terrain`] is available for
/// callers who want terrain to be part of the path cost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum StepCost {
    /// Each step costs 1. The heuristic is the base distance plus the terrain penalty
    /// of the cell.
    #[default]
    Uniform,
    /// Entering a cell costs `1 + penalty`. The heuristic is the plain base distance,
    /// which keeps it admissible and consistent.
    Terrain,
}

/// Options for how a [`CachedSearch`](crate::CachedSearch) answers queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SearchConfig {
    /// Number of nearby Waypoints looked up around a non-Waypoint endpoint.
    ///
    /// Higher values give the closest-pair scan more choice at the cost of extra
    /// depth-first traversals per query.
    ///
    /// Default: `2`
    pub nearby_waypoints: usize,
    /// Upper bound on the number of nodes a single search may expand. Exceeding it
    /// turns the search into [`SearchError::Aborted`].
    ///
    /// Default: `None` (unbounded)
    pub max_expansions: Option<usize>,
    /// Step cost policy used by every A* search.
    ///
    /// Default: [`StepCost::Uniform`]
    pub step_cost: StepCost,
}

impl SearchConfig {
    /// Returns a copy with `nearby_waypoints` set to `k`.
    pub fn with_nearby_waypoints(mut self, k: usize) -> Self {
        self.nearby_waypoints = k;
        self
    }

    /// Returns a copy with an expansion budget.
    pub fn with_max_expansions(mut self, max_expansions: usize) -> Self {
        self.max_expansions = Some(max_expansions);
        self
    }

    /// Returns a copy with another [`StepCost`].
    pub fn with_step_cost(mut self, step_cost: StepCost) -> Self {
        self.step_cost = step_cost;
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.nearby_waypoints == 0 {
            return Err(SearchError::InvalidConfig(
                "nearby_waypoints must be at least 1".into(),
            ));
        }
        if self.max_expansions == Some(0) {
            return Err(SearchError::InvalidConfig(
                "max_expansions must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> SearchConfig {
        SearchConfig {
            nearby_waypoints: 2,
            max_expansions: None,
            step_cost: StepCost::Uniform,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SearchConfig::default();
        assert_eq!(config.nearby_waypoints, 2);
        assert_eq!(config.max_expansions, None);
        assert_eq!(config.step_cost, StepCost::Uniform);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_zero() {
        let config = SearchConfig::default().with_nearby_waypoints(0);
        assert!(matches!(config.validate(), Err(SearchError::InvalidConfig(_))));

        let config = SearchConfig::default().with_max_expansions(0);
        assert!(matches!(config.validate(), Err(SearchError::InvalidConfig(_))));
    }
}
