//! Cellular automata rules.
//!
//! For the notations of rule strings, please see
//! [this article on LifeWiki](https://conwaylife.com/wiki/Rulestring).

mod life;

use crate::cell_set::PositionSet;
pub use life::Life;

/// A cellular automaton rule on the infinite grid.
///
/// A rule only looks at the live neighbours of a cell, that is, the
/// intersection of its [`neighbours`](crate::Position::neighbours) with the
/// live cells of the current generation.
pub trait Rule {
    /// Whether a living cell with these live neighbours stays alive.
    fn survives(&self, live_nbhd: &PositionSet) -> bool;

    /// Whether a dead cell with these live neighbours becomes alive.
    fn is_born(&self, live_nbhd: &PositionSet) -> bool;
}

/// Conway's Game of Life, `B3/S23`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Conway;

impl Rule for Conway {
    #[inline]
    fn survives(&self, live_nbhd: &PositionSet) -> bool {
        live_nbhd.exactly_two() || live_nbhd.exactly_three()
    }

    #[inline]
    fn is_born(&self, live_nbhd: &PositionSet) -> bool {
        live_nbhd.exactly_three()
    }
}
