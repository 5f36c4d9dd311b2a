use crate::Point;

/// An unordered pair of Waypoints, stored in canonical (sorted) order.
///
/// Points compare lexicographically as `(x, y)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WaypointPair {
    low: Point,
    high: Point,
}

impl WaypointPair {
    /// Canonicalizes `(a, b)`. The flag tells whether the order was swapped.
    pub fn new(a: Point, b: Point) -> (WaypointPair, bool) {
        if a <= b {
            (WaypointPair { low: a, high: b }, false)
        } else {
            (WaypointPair { low: b, high: a }, true)
        }
    }

    /// The smaller Waypoint, which is where the stored path starts.
    pub fn low(&self) -> Point {
        self.low
    }

    /// The larger Waypoint, which is where the stored path ends.
    pub fn high(&self) -> Point {
        self.high
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_order() {
        let (pair, swapped) = WaypointPair::new((3, 0), (1, 5));
        assert!(swapped);
        assert_eq!((pair.low(), pair.high()), ((1, 5), (3, 0)));

        let (same, swapped) = WaypointPair::new((1, 5), (3, 0));
        assert!(!swapped);
        assert_eq!(pair, same);

        let (pair, _) = WaypointPair::new((2, 7), (2, 1));
        assert_eq!(pair.low(), (2, 1));
    }
}
