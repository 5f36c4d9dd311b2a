use crate::Point;

use std::sync::Arc;

/// A contiguous route across the Grid, ordered from its goal back to its start.
///
/// That is the order in which A* reconstructs a path, and every segment in this crate
/// keeps it: `segment[0]` is the goal, the last element is the start. Use
/// [`walk`](PathSegment::walk) to travel the other way.
///
/// The Points live in a shared buffer, so cloning and [`reversed`](PathSegment::reversed)
/// are cheap.
#[derive(Debug, Clone)]
pub struct PathSegment {
    path: Arc<[Point]>,
    is_reversed: bool,
}

impl PathSegment {
    pub(crate) fn from_goal_to_start(path: Vec<Point>) -> PathSegment {
        debug_assert!(!path.is_empty(), "a PathSegment is never empty");
        PathSegment {
            path: path.into(),
            is_reversed: false,
        }
    }

    /// Creates a segment from Points listed from start to goal.
    ///
    /// Returns `None` if there are no Points. Contiguity is not checked.
    pub fn from_walk(points: impl IntoIterator<Item = Point>) -> Option<PathSegment> {
        let mut path: Vec<Point> = points.into_iter().collect();
        if path.is_empty() {
            return None;
        }
        path.reverse();
        Some(PathSegment::from_goal_to_start(path))
    }

    /// A segment that starts and ends on `point`.
    pub fn single(point: Point) -> PathSegment {
        PathSegment::from_goal_to_start(vec![point])
    }

    /// The number of Points, both ends included.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Always `false`: a segment holds at least one Point.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// The number of steps, which is one less than [`len`](PathSegment::len).
    pub fn steps(&self) -> usize {
        self.len() - 1
    }

    /// The Point at `index`, counted from the goal.
    #[track_caller]
    pub fn get(&self, index: usize) -> Point {
        self[index]
    }

    /// Where the segment ends.
    pub fn goal(&self) -> Point {
        self[0]
    }

    /// Where the segment begins.
    pub fn start(&self) -> Point {
        self[self.len() - 1]
    }

    /// Whether `point` is on the segment.
    pub fn contains(&self, point: Point) -> bool {
        self.path.contains(&point)
    }

    /// The same route, travelled the other way.
    pub fn reversed(&self) -> PathSegment {
        PathSegment {
            path: self.path.clone(),
            is_reversed: !self.is_reversed,
        }
    }

    /// The Points from goal to start.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Point> + ExactSizeIterator + '_ {
        (0..self.len()).map(move |index| self[index])
    }

    /// The Points from start to goal.
    pub fn walk(&self) -> impl DoubleEndedIterator<Item = Point> + ExactSizeIterator + '_ {
        self.iter().rev()
    }

    /// Copies the Points, from goal to start.
    pub fn to_vec(&self) -> Vec<Point> {
        self.iter().collect()
    }
}

impl std::ops::Index<usize> for PathSegment {
    type Output = Point;
    #[track_caller]
    fn index(&self, index: usize) -> &Point {
        let idx = if self.is_reversed {
            self.len() - index - 1
        } else {
            index
        };
        &self.path[idx]
    }
}

impl PartialEq for PathSegment {
    fn eq(&self, other: &PathSegment) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Eq for PathSegment {}
