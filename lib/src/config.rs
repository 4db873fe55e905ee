//! World configuration.

use crate::{
    cells::Position,
    error::Error,
    rules::{Life, Rule},
    world::World,
};
use educe::Educe;
use log::debug;
use rand::{rngs::StdRng, thread_rng, Rng, SeedableRng};

/// A random rectangular pattern.
///
/// Its top-left corner is at the origin. Each cell in the rectangle is alive
/// with probability `density`, independently of the others.
#[derive(Clone, Copy, Debug, Educe, PartialEq)]
#[educe(Default)]
pub struct Soup {
    /// Width.
    #[educe(Default = 16)]
    pub width: i64,

    /// Height.
    #[educe(Default = 16)]
    pub height: i64,

    /// The probability that a cell is alive.
    #[educe(Default = 0.5)]
    pub density: f64,
}

impl Soup {
    /// A soup of the given size and density.
    pub fn new(width: i64, height: i64, density: f64) -> Self {
        Soup {
            width,
            height,
            density,
        }
    }

    /// Checks the size and the density.
    pub fn validate(&self) -> Result<(), Error> {
        if self.width <= 0 || self.height <= 0 {
            return Err(Error::NonPositiveError);
        }
        if !(0.0..=1.0).contains(&self.density) {
            return Err(Error::DensityError(self.density));
        }
        Ok(())
    }

    /// Makes the cells of the soup alive in the world, drawing from `rng`.
    ///
    /// The soup must have been validated.
    fn fill<R: Rule, G: Rng>(&self, world: &mut World<R>, rng: &mut G) {
        let origin = Position::origin();
        for y in 0..self.height {
            for x in 0..self.width {
                if rng.gen_bool(self.density) {
                    world.alive(origin.offset(x, y));
                }
            }
        }
    }
}

/// World configuration.
///
/// The world will be generated from this configuration.
#[derive(Clone, Debug, Educe, PartialEq)]
#[educe(Default)]
pub struct Config {
    /// The rule string of the cellular automaton.
    #[educe(Default = "B3/S23")]
    pub rule_string: String,

    /// A random pattern to start with.
    ///
    /// `None` means that the world starts empty.
    pub soup: Option<Soup>,

    /// The seed of the random number generator used to fill the soup.
    ///
    /// `None` means that the soup is different on every run.
    pub seed: Option<u64>,
}

impl Config {
    /// Sets up a new configuration with the given rule string.
    pub fn new<S: ToString>(rule_string: S) -> Self {
        Config::default().set_rule_string(rule_string)
    }

    /// Sets the rule string.
    pub fn set_rule_string<S: ToString>(mut self, rule_string: S) -> Self {
        self.rule_string = rule_string.to_string();
        self
    }

    /// Sets the random soup.
    pub fn set_soup<T: Into<Option<Soup>>>(mut self, soup: T) -> Self {
        self.soup = soup.into();
        self
    }

    /// Sets the seed of the random number generator.
    pub fn set_seed<T: Into<Option<u64>>>(mut self, seed: T) -> Self {
        self.seed = seed.into();
        self
    }

    /// Creates a new world from the configuration.
    ///
    /// Returns an error if the rule string is invalid,
    /// or if the soup has a non-positive size or an invalid density.
    pub fn world(&self) -> Result<World<Life>, Error> {
        let rule = self.rule_string.parse::<Life>()?;
        let mut world = World::with_rule(rule);
        if let Some(soup) = &self.soup {
            soup.validate()?;
            match self.seed {
                Some(seed) => soup.fill(&mut world, &mut StdRng::seed_from_u64(seed)),
                None => soup.fill(&mut world, &mut thread_rng()),
            }
        }
        debug!(
            "New world: rule {}, population {}",
            world.rule(),
            world.population()
        );
        Ok(world)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.rule_string, "B3/S23");
        assert_eq!(config.soup, None);
        assert_eq!(config.seed, None);
        assert_eq!(Soup::default(), Soup::new(16, 16, 0.5));
    }

    #[test]
    fn soup_stays_in_its_rectangle() -> Result<(), Error> {
        let world = Config::default()
            .set_soup(Soup::new(5, 3, 0.7))
            .set_seed(7)
            .world()?;
        for p in world.cells() {
            assert!((0..5).contains(&p.x().offset()));
            assert!((0..3).contains(&p.y().offset()));
        }
        Ok(())
    }

    #[test]
    fn full_and_empty_soups() -> Result<(), Error> {
        let full = Config::default().set_soup(Soup::new(4, 4, 1.0)).world()?;
        assert_eq!(full.population(), 16);
        let empty = Config::default().set_soup(Soup::new(4, 4, 0.0)).world()?;
        assert_eq!(empty.population(), 0);
        Ok(())
    }
}
