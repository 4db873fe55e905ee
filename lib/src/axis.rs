//! Coordinates along a single axis of the grid.

use std::fmt::{self, Display, Formatter};

/// A coordinate along one axis of the infinite grid.
///
/// It is the signed offset from a shared origin. Every offset exists as soon
/// as it is named, so stepping never has to build anything, and two
/// coordinates reached along different paths are equal whenever they have
/// the same offset.
///
/// Stepping wraps around at the bounds of `i64`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Axis(i64);

impl Axis {
    /// The origin of the axis.
    pub const ORIGIN: Self = Axis(0);

    /// The coordinate at the given offset from the origin.
    #[inline]
    pub const fn new(offset: i64) -> Self {
        Axis(offset)
    }

    /// The offset from the origin.
    #[inline]
    pub const fn offset(self) -> i64 {
        self.0
    }

    /// One step in the positive direction.
    #[inline]
    pub const fn next(self) -> Self {
        Axis(self.0.wrapping_add(1))
    }

    /// One step in the negative direction.
    #[inline]
    pub const fn previous(self) -> Self {
        Axis(self.0.wrapping_sub(1))
    }

    /// Moves `delta` steps; negative values move backwards.
    #[inline]
    pub(crate) const fn shift(self, delta: i64) -> Self {
        Axis(self.0.wrapping_add(delta))
    }
}

impl From<i64> for Axis {
    fn from(offset: i64) -> Self {
        Axis(offset)
    }
}

impl Display for Axis {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::Axis;

    #[test]
    fn steps_round_trip() {
        let a = Axis::new(-7);
        assert_eq!(a.next().previous(), a);
        assert_eq!(a.previous().next(), a);
        assert_ne!(a.next(), a);
    }

    #[test]
    fn paths_to_the_same_offset_are_equal() {
        let a = Axis::ORIGIN.next().next().previous();
        let b = Axis::ORIGIN.previous().next().next();
        assert_eq!(a, b);
        assert_eq!(a.offset(), 1);
    }

    #[test]
    fn wraps_at_the_bounds() {
        assert_eq!(Axis::new(i64::MAX).next(), Axis::new(i64::MIN));
        assert_eq!(Axis::new(i64::MIN).previous(), Axis::new(i64::MAX));
    }
}
