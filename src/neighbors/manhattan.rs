use super::Neighborhood;
use crate::Point;

/// A Neighborhood for Agents moving along the 4 cardinal directions.
///
/// Also known as [Von Neumann Neighborhood](https://en.wikipedia.org/wiki/Von_Neumann_neighborhood),
/// Manhattan Metric or [Taxicab Geometry](https://en.wikipedia.org/wiki/Taxicab_geometry).
///
/// ```no_code
/// A: Agent, o: reachable in one step
///   o
///   |
/// o-A-o
///   |
///   o
/// ```
///
/// Neighbors are produced in the order up, right, down, left.
#[derive(Clone, Copy, Debug)]
pub struct ManhattanNeighborhood {
    width: usize,
    height: usize,
}

impl ManhattanNeighborhood {
    /// Creates a new ManhattanNeighborhood.
    ///
    /// `width` and `height` are the size of the Grid to move on.
    pub fn new(width: usize, height: usize) -> ManhattanNeighborhood {
        ManhattanNeighborhood { width, height }
    }
}

impl Neighborhood for ManhattanNeighborhood {
    fn get_all_neighbors(&self, point: Point, target: &mut Vec<Point>) {
        #[rustfmt::skip]
        const ALL_DELTAS: [(isize, isize); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];
        super::push_in_bounds(point, &ALL_DELTAS, (self.width, self.height), target);
    }

    fn heuristic(&self, point: Point, goal: Point) -> usize {
        let diff_0 = if goal.0 > point.0 {
            goal.0 - point.0
        } else {
            point.0 - goal.0
        };
        let diff_1 = if goal.1 > point.1 {
            goal.1 - point.1
        } else {
            point.1 - goal.1
        };
        diff_0 + diff_1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_all_neighbors() {
        let neighborhood = ManhattanNeighborhood::new(5, 5);
        let mut target = vec![];

        neighborhood.get_all_neighbors((0, 2), &mut target);
        assert_eq!(target, vec![(0, 1), (1, 2), (0, 3)]);

        target.clear();
        neighborhood.get_all_neighbors((2, 2), &mut target);
        assert_eq!(target, vec![(2, 1), (3, 2), (2, 3), (1, 2)]);

        target.clear();
        neighborhood.get_all_neighbors((4, 4), &mut target);
        assert_eq!(target, vec![(4, 3), (3, 4)]);
    }

    #[test]
    fn heuristic() {
        let neighborhood = ManhattanNeighborhood::new(5, 5);
        assert_eq!(neighborhood.heuristic((3, 1), (0, 0)), 3 + 1);
        assert_eq!(neighborhood.heuristic((0, 0), (4, 4)), 8);
    }
}
