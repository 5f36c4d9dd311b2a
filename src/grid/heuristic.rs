use crate::{neighbors::Neighborhood, Graph, Point, StepCost};

use super::RowCol;

/// A per-goal lower-bound estimate of the remaining cost, one value per cell.
///
/// Each value is the [`Neighborhood::heuristic`] distance to the goal plus, under
/// [`StepCost::Uniform`], the terrain penalty of the cell. Obstacles have no value.
///
/// A field belongs to exactly one goal and is rebuilt for every search.
#[derive(Clone, Debug)]
pub struct HeuristicField {
    goal: Point,
    width: usize,
    values: Vec<Option<usize>>,
}

impl HeuristicField {
    /// Computes the field for `goal` over every cell of `graph`.
    pub fn new<N: Neighborhood>(graph: &Graph<N>, goal: Point, step_cost: StepCost) -> Self {
        let grid = graph.grid();
        let (width, height) = (grid.width(), grid.height());
        let mut values = Vec::with_capacity(width * height);

        for row in 0..height {
            for col in 0..width {
                let point = Point::from(RowCol { row, col });
                let value = grid.cost(point).and_then(|cost| cost.penalty()).map(|penalty| {
                    let distance = graph.neighborhood().heuristic(point, goal);
                    match step_cost {
                        StepCost::Uniform => distance.saturating_add(penalty),
                        StepCost::Terrain => distance,
                    }
                });
                values.push(value);
            }
        }

        HeuristicField {
            goal,
            width,
            values,
        }
    }

    /// The goal this field estimates distances to.
    pub fn goal(&self) -> Point {
        self.goal
    }

    /// The estimate at `point`, `None` if it is an obstacle or off the Grid.
    pub fn get(&self, point: Point) -> Option<usize> {
        let cell = RowCol::from(point);
        if cell.col >= self.width {
            return None;
        }
        self.values
            .get(cell.row * self.width + cell.col)
            .copied()
            .flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::graph;

    #[test]
    fn manhattan_plus_penalty() {
        let graph = graph(&[
            [0, 0, 0], //
            [0, 4, -1],
        ]);
        let field = HeuristicField::new(&graph, (0, 0), StepCost::Uniform);
        assert_eq!(field.goal(), (0, 0));
        assert_eq!(field.get((0, 0)), Some(0));
        assert_eq!(field.get((2, 0)), Some(2));
        assert_eq!(field.get((1, 1)), Some(2 + 4));
        assert_eq!(field.get((2, 1)), None);
        assert_eq!(field.get((3, 0)), None);
        assert_eq!(field.get((0, 2)), None);
    }

    #[test]
    fn terrain_step_cost_drops_penalty() {
        let graph = graph(&[[0, 7]]);
        let field = HeuristicField::new(&graph, (0, 0), StepCost::Terrain);
        assert_eq!(field.get((1, 0)), Some(1));
    }

    #[test]
    fn transposed_lookup() {
        // 3 wide, 1 tall: only x varies.
        let graph = graph(&[[0, 0, 0]]);
        let field = HeuristicField::new(&graph, (2, 0), StepCost::Uniform);
        assert_eq!(field.get((0, 0)), Some(2));
        assert_eq!(field.get((0, 2)), None);
    }
}
