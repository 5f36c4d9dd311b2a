//! The one source of adjacency shared by every search.

use crate::{grid::GridMap, neighbors::Neighborhood, Point, PointMap, StepCost};

/// A [`GridMap`] together with the [`Neighborhood`] that connects its cells.
///
/// Obstacle cells are never reported as neighbors. Both A* and the depth-first
/// Waypoint lookup read their neighbors from here, so they always agree on
/// connectivity.
#[derive(Clone, Debug)]
pub struct Graph<N: Neighborhood> {
    grid: GridMap,
    neighborhood: N,
}

impl<N: Neighborhood> Graph<N> {
    /// Connects the cells of `grid` according to `neighborhood`.
    pub fn new(grid: GridMap, neighborhood: N) -> Graph<N> {
        Graph { grid, neighborhood }
    }

    /// The underlying Grid.
    pub fn grid(&self) -> &GridMap {
        &self.grid
    }

    /// The connectivity policy.
    pub fn neighborhood(&self) -> &N {
        &self.neighborhood
    }

    /// Whether `point` lies on the Grid.
    pub fn contains(&self, point: Point) -> bool {
        self.grid.contains(point)
    }

    /// Whether `point` lies on the Grid and is not an obstacle.
    pub fn is_passable(&self, point: Point) -> bool {
        self.grid.is_passable(point)
    }

    /// Appends the passable neighbors of `point` to `target`, in [`Neighborhood`] order.
    pub fn neighbors(&self, point: Point, target: &mut Vec<Point>) {
        let from = target.len();
        self.neighborhood.get_all_neighbors(point, target);
        let added = target.split_off(from);
        target.extend(added.into_iter().filter(|&p| self.grid.is_passable(p)));
    }

    /// The cost of stepping onto `to`, which must be passable.
    pub fn step_cost(&self, to: Point, step_cost: StepCost) -> usize {
        match step_cost {
            StepCost::Uniform => 1,
            StepCost::Terrain => {
                let penalty = self.grid.cost(to).and_then(|cost| cost.penalty());
                penalty.unwrap_or(0).saturating_add(1)
            }
        }
    }

    /// The full adjacency mapping of every passable cell.
    pub fn adjacency(&self) -> PointMap<Vec<Point>> {
        let mut adjacency = PointMap::new();
        for y in 0..self.grid.height() {
            for x in 0..self.grid.width() {
                if !self.is_passable((x, y)) {
                    continue;
                }
                let mut neighbors = vec![];
                self.neighbors((x, y), &mut neighbors);
                adjacency.insert((x, y), neighbors);
            }
        }
        adjacency
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::graph;

    #[test]
    fn skips_obstacles() {
        let graph = graph(&[
            [0, -1, 0], //
            [0, 3, 0],
        ]);
        let mut target = vec![];
        graph.neighbors((1, 1), &mut target);
        assert_eq!(target, vec![(2, 1), (0, 1)]);

        target.clear();
        graph.neighbors((0, 0), &mut target);
        assert_eq!(target, vec![(0, 1)]);
    }

    #[test]
    fn keeps_existing_entries() {
        let graph = graph(&[[0, -1, 0]]);
        let mut target = vec![(9, 9)];
        graph.neighbors((2, 0), &mut target);
        assert_eq!(target, vec![(9, 9)]);
    }

    #[test]
    fn filters_only_the_new_entries() {
        let graph = graph(&[
            [0, -1, 0], //
            [0, 0, 0],
        ]);
        let mut target = vec![(1, 0)];
        graph.neighbors((1, 1), &mut target);
        assert_eq!(target, vec![(1, 0), (2, 1), (0, 1)]);
    }

    #[test]
    fn step_costs() {
        let graph = graph(&[[0, 3]]);
        assert_eq!(graph.step_cost((1, 0), StepCost::Uniform), 1);
        assert_eq!(graph.step_cost((1, 0), StepCost::Terrain), 4);
        assert_eq!(graph.step_cost((0, 0), StepCost::Terrain), 1);
    }

    #[test]
    fn adjacency() {
        let graph = graph(&[
            [0, 0], //
            [-1, 0],
        ]);
        let adjacency = graph.adjacency();
        assert_eq!(adjacency.len(), 3);
        assert_eq!(adjacency[&(0, 0)], vec![(1, 0)]);
        assert_eq!(adjacency[&(1, 0)], vec![(1, 1), (0, 0)]);
        assert!(!adjacency.contains_key(&(0, 1)));
    }
}
