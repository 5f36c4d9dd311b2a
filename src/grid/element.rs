use super::RowCol;
use crate::Point;

use std::cmp::Ordering;

/// A Frontier entry: a Point and its priority (`cost_so_far + heuristic`).
///
/// Ordered so that a [`BinaryHeap`](std::collections::BinaryHeap) pops the lowest
/// priority first, and among equal priorities the lowest [`RowCol`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Element(pub Point, pub usize);

impl Ord for Element {
    fn cmp(&self, rhs: &Self) -> Ordering {
        (rhs.1, RowCol::from(rhs.0)).cmp(&(self.1, RowCol::from(self.0)))
    }
}
impl PartialOrd for Element {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    #[test]
    fn pops_lowest_priority_then_row_major() {
        let mut heap = BinaryHeap::new();
        heap.push(Element((0, 0), 5));
        heap.push(Element((3, 0), 2));
        heap.push(Element((0, 1), 2));
        heap.push(Element((1, 0), 2));

        assert_eq!(heap.pop(), Some(Element((1, 0), 2)));
        assert_eq!(heap.pop(), Some(Element((3, 0), 2)));
        assert_eq!(heap.pop(), Some(Element((0, 1), 2)));
        assert_eq!(heap.pop(), Some(Element((0, 0), 5)));
    }
}
