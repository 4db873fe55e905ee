//! The world.

use crate::{
    cell_set::PositionSet,
    cells::{Position, State, ALIVE, DEAD},
    rules::{Conway, Rule},
};
use log::{debug, trace};

/// The world.
///
/// A world holds the living cells of one generation on an infinite grid.
/// [`alive`](Self::alive) sets up the world in place, while
/// [`next_generation`](Self::next_generation) leaves it untouched and
/// returns the following generation as a new world.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct World<R: Rule = Conway> {
    /// The living cells.
    cells: PositionSet,

    /// The rule of the cellular automaton.
    rule: R,

    /// Number of generations since the world was set up.
    generation: u64,
}

impl World<Conway> {
    /// Creates an empty world under Conway's rule.
    pub fn new() -> Self {
        World::default()
    }

    /// Creates a world under Conway's rule whose living cells are `cells`.
    pub fn with_cells(cells: PositionSet) -> Self {
        World::with_cells_and_rule(cells, Conway)
    }
}

impl<R: Rule> World<R> {
    /// Creates an empty world under the given rule.
    pub fn with_rule(rule: R) -> Self {
        World::with_cells_and_rule(PositionSet::new(), rule)
    }

    /// Creates a world under the given rule whose living cells are `cells`.
    pub fn with_cells_and_rule(cells: PositionSet, rule: R) -> Self {
        World {
            cells,
            rule,
            generation: 0,
        }
    }

    /// The position every other position is reached from.
    #[inline]
    pub fn start_position(&self) -> Position {
        Position::origin()
    }

    /// Makes a cell alive.
    #[inline]
    pub fn alive(&mut self, position: Position) {
        self.cells.add(position);
    }

    #[inline]
    pub fn is_alive(&self, position: &Position) -> bool {
        self.cells.include(position)
    }

    #[inline]
    pub fn is_dead(&self, position: &Position) -> bool {
        !self.is_alive(position)
    }

    /// Gets the state of a cell.
    #[inline]
    pub fn state(&self, position: &Position) -> State {
        if self.is_alive(position) {
            ALIVE
        } else {
            DEAD
        }
    }

    /// The living cells.
    #[inline]
    pub fn cells(&self) -> &PositionSet {
        &self.cells
    }

    /// Number of living cells.
    #[inline]
    pub fn population(&self) -> usize {
        self.cells.len()
    }

    /// Number of generations since the world was set up.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    pub fn rule(&self) -> &R {
        &self.rule
    }

    /// The living neighbours of a cell.
    #[inline]
    pub fn live_neighbours(&self, position: Position) -> PositionSet {
        position.neighbours().intersect(&self.cells)
    }

    /// Living cells that stay alive in the next generation.
    pub fn survivors(&self) -> PositionSet {
        self.cells
            .filter(|&p| self.rule.survives(&self.live_neighbours(p)))
    }

    /// Cells that are a neighbour of at least one living cell.
    ///
    /// These are the only dead cells that can come alive.
    pub fn candidates(&self) -> PositionSet {
        let mut candidates = PositionSet::new();
        for &p in &self.cells {
            candidates.append(&p.neighbours());
        }
        candidates
    }

    /// Dead cells that become alive in the next generation.
    pub fn reproductions(&self) -> PositionSet {
        let candidates = self.candidates();
        trace!(
            "Generation {}: {} birth candidates",
            self.generation,
            candidates.len()
        );
        candidates.filter(|&p| self.is_dead(&p) && self.rule.is_born(&self.live_neighbours(p)))
    }

    /// The bounding box of the living cells.
    ///
    /// Returns the top-left and bottom-right corners,
    /// or `None` if there are no living cells.
    pub fn bounding_box(&self) -> Option<(Position, Position)> {
        let mut iter = self.cells.iter();
        let first = *iter.next()?;
        let (min_x, min_y, max_x, max_y) = iter.fold(
            (first.x(), first.y(), first.x(), first.y()),
            |(min_x, min_y, max_x, max_y), p| {
                (
                    min_x.min(p.x()),
                    min_y.min(p.y()),
                    max_x.max(p.x()),
                    max_y.max(p.y()),
                )
            },
        );
        Some((Position::new(min_x, min_y), Position::new(max_x, max_y)))
    }
}

impl<R: Rule + Clone> World<R> {
    /// Computes the next generation.
    ///
    /// The living cells of the new world are the survivors together with
    /// the reproductions. `self` is left unchanged.
    pub fn next_generation(&self) -> World<R> {
        let mut cells = self.survivors();
        cells.append(&self.reproductions());
        debug!(
            "Generation {} -> {}: population {} -> {}",
            self.generation,
            self.generation + 1,
            self.population(),
            cells.len()
        );
        World {
            cells,
            rule: self.rule.clone(),
            generation: self.generation + 1,
        }
    }

    /// The world `n` generations later.
    ///
    /// Only the last generation is kept.
    pub fn step(&self, n: u64) -> World<R> {
        let mut world = self.clone();
        for _ in 0..n {
            world = world.next_generation();
        }
        world
    }
}

impl<R: Rule + Default> FromIterator<Position> for World<R> {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        World::with_cells_and_rule(iter.into_iter().collect(), R::default())
    }
}

impl<R: Rule> Extend<Position> for World<R> {
    fn extend<I: IntoIterator<Item = Position>>(&mut self, iter: I) {
        self.cells.extend(iter)
    }
}
