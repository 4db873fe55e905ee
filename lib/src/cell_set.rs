//! Sets of cell positions.

use crate::cells::Position;
use std::collections::{hash_set, HashSet};

/// A set of cell positions.
///
/// Adding a position that is already present does nothing, and the order of
/// the positions carries no meaning. Iteration order is stable for one
/// traversal of one set, and nothing more.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PositionSet {
    positions: HashSet<Position>,
}

impl PositionSet {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a position.
    ///
    /// Returns `false` if an equal position was already present.
    #[inline]
    pub fn add(&mut self, position: Position) -> bool {
        self.positions.insert(position)
    }

    /// Whether the set contains the position.
    #[inline]
    pub fn include(&self, position: &Position) -> bool {
        self.positions.contains(position)
    }

    /// The positions present in both sets.
    pub fn intersect(&self, other: &PositionSet) -> PositionSet {
        // Probe the larger set with the smaller one.
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small.filter(|p| large.include(p))
    }

    /// Whether the set has exactly two positions.
    #[inline]
    pub fn exactly_two(&self) -> bool {
        self.len() == 2
    }

    /// Whether the set has exactly three positions.
    #[inline]
    pub fn exactly_three(&self) -> bool {
        self.len() == 3
    }

    /// The positions satisfying `predicate`.
    pub fn filter<F>(&self, mut predicate: F) -> PositionSet
    where
        F: FnMut(&Position) -> bool,
    {
        self.iter().filter(|&&p| predicate(&p)).copied().collect()
    }

    /// Adds every position of `other` to this set.
    pub fn append(&mut self, other: &PositionSet) {
        self.positions.extend(other.iter().copied());
    }

    /// The union of both sets.
    pub fn concat(&self, other: &PositionSet) -> PositionSet {
        let mut union = self.clone();
        union.append(other);
        union
    }

    /// Number of positions.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// An iterator over the positions, in no particular order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.positions.iter(),
        }
    }
}

/// An iterator over the positions of a [`PositionSet`].
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    inner: hash_set::Iter<'a, Position>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Position;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a PositionSet {
    type Item = &'a Position;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for PositionSet {
    type Item = Position;
    type IntoIter = hash_set::IntoIter<Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.positions.into_iter()
    }
}

impl FromIterator<Position> for PositionSet {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        PositionSet {
            positions: iter.into_iter().collect(),
        }
    }
}

impl Extend<Position> for PositionSet {
    fn extend<I: IntoIterator<Item = Position>>(&mut self, iter: I) {
        self.positions.extend(iter)
    }
}
