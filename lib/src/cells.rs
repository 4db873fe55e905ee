//! Cells of the infinite grid.

use crate::{axis::Axis, cell_set::PositionSet};
use std::{
    fmt::{self, Display, Formatter},
    ops::Not,
};

/// Possible states of a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct State(pub(crate) bool);

/// The Dead state.
pub const DEAD: State = State(false);
/// The Alive state.
pub const ALIVE: State = State(true);

/// Flips the state.
impl Not for State {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        State(!self.0)
    }
}

impl Default for State {
    fn default() -> Self {
        DEAD
    }
}

/// Offsets `(dx, dy)` of the eight cells in the Moore neighborhood.
const NBHD: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The position of a cell on the infinite grid.
///
/// `x` grows to the right and `y` grows downwards. Positions are plain
/// values: every move returns a new position and leaves `self` untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    x: Axis,
    y: Axis,
}

impl Position {
    /// The origin, from which every other position is reached.
    #[inline]
    pub const fn origin() -> Self {
        Position {
            x: Axis::ORIGIN,
            y: Axis::ORIGIN,
        }
    }

    /// A position from its two coordinates.
    #[inline]
    pub const fn new(x: Axis, y: Axis) -> Self {
        Position { x, y }
    }

    /// The horizontal coordinate.
    #[inline]
    pub const fn x(self) -> Axis {
        self.x
    }

    /// The vertical coordinate.
    #[inline]
    pub const fn y(self) -> Axis {
        self.y
    }

    #[inline]
    pub fn left(self) -> Self {
        Position::new(self.x.previous(), self.y)
    }

    #[inline]
    pub fn right(self) -> Self {
        Position::new(self.x.next(), self.y)
    }

    #[inline]
    pub fn up(self) -> Self {
        Position::new(self.x, self.y.previous())
    }

    #[inline]
    pub fn down(self) -> Self {
        Position::new(self.x, self.y.next())
    }

    #[inline]
    pub fn upleft(self) -> Self {
        Position::new(self.x.previous(), self.y.previous())
    }

    #[inline]
    pub fn upright(self) -> Self {
        Position::new(self.x.next(), self.y.previous())
    }

    #[inline]
    pub fn downleft(self) -> Self {
        Position::new(self.x.previous(), self.y.next())
    }

    #[inline]
    pub fn downright(self) -> Self {
        Position::new(self.x.next(), self.y.next())
    }

    /// The position `(dx, dy)` steps away.
    #[inline]
    pub fn offset(self, dx: i64, dy: i64) -> Self {
        Position::new(self.x.shift(dx), self.y.shift(dy))
    }

    /// The eight cells surrounding this one.
    pub fn neighbours(self) -> PositionSet {
        NBHD.iter()
            .map(|&(dx, dy)| self.offset(dx, dy))
            .collect()
    }

    /// Whether both positions denote the same cell.
    #[inline]
    pub fn same_as(&self, other: &Position) -> bool {
        self == other
    }
}

impl From<(i64, i64)> for Position {
    fn from((x, y): (i64, i64)) -> Self {
        Position::new(Axis::new(x), Axis::new(y))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagonals_compose_orthogonal_moves() {
        let p = Position::from((3, -2));
        assert_eq!(p.upleft(), p.up().left());
        assert_eq!(p.upright(), p.right().up());
        assert_eq!(p.downleft(), p.left().down());
        assert_eq!(p.downright(), p.down().right());
    }

    #[test]
    fn neighbours_surround_the_cell() {
        let p = Position::origin();
        let nbhd = p.neighbours();
        assert_eq!(nbhd.len(), 8);
        assert!(!nbhd.include(&p));
        for q in [p.left(), p.right(), p.up(), p.down()] {
            assert!(nbhd.include(&q));
        }
    }

    #[test]
    fn flip_state() {
        assert_eq!(!DEAD, ALIVE);
        assert_eq!(!ALIVE, DEAD);
        assert_eq!(State::default(), DEAD);
    }
}
