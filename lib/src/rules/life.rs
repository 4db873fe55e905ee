//! Totalistic Life-like rules.

use crate::{cell_set::PositionSet, error::Error, rules::Rule};
use bitflags::bitflags;
use ca_rules::ParseLife;
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

bitflags! {
    /// A set of neighbour counts, from 0 to 8.
    #[derive(Default)]
    struct Counts: u16 {
        const N0 = 1 << 0;
        const N1 = 1 << 1;
        const N2 = 1 << 2;
        const N3 = 1 << 3;
        const N4 = 1 << 4;
        const N5 = 1 << 5;
        const N6 = 1 << 6;
        const N7 = 1 << 7;
        const N8 = 1 << 8;
    }
}

impl Counts {
    /// The set containing only `n`.
    ///
    /// Empty if `n` is greater than 8.
    #[inline]
    fn of(n: usize) -> Self {
        if n > 8 {
            Counts::empty()
        } else {
            Counts::from_bits_truncate(1 << n)
        }
    }

    /// Whether `n` is in the set.
    #[inline]
    fn includes(self, n: usize) -> bool {
        n <= 8 && self.contains(Counts::of(n))
    }

    fn from_list(list: &[u8]) -> Self {
        list.iter()
            .fold(Counts::empty(), |acc, &n| acc | Counts::of(n as usize))
    }

    fn write_digits(self, f: &mut Formatter<'_>) -> fmt::Result {
        for n in 0..=8 {
            if self.includes(n) {
                write!(f, "{}", n)?;
            }
        }
        Ok(())
    }
}

/// Totalistic Life-like rules, such as `B3/S23` or `B36/S23`.
///
/// Rules containing `B0` are rejected: on an infinite grid they would bring
/// infinitely many cells to life at once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Life {
    /// Numbers of live neighbours for a dead cell to become alive.
    birth: Counts,
    /// Numbers of live neighbours for a living cell to stay alive.
    survival: Counts,
}

impl Life {
    /// Constructs a new rule from the `b` and `s` data.
    pub fn new(b: Vec<u8>, s: Vec<u8>) -> Self {
        Life {
            birth: Counts::from_list(&b),
            survival: Counts::from_list(&s),
        }
    }

    /// Conway's Game of Life.
    pub fn conway() -> Self {
        Life::new(vec![3], vec![2, 3])
    }

    /// Whether the rule contains `B0`.
    pub fn has_b0(&self) -> bool {
        self.birth.contains(Counts::N0)
    }
}

impl Default for Life {
    fn default() -> Self {
        Life::conway()
    }
}

impl ParseLife for Life {
    fn from_bs(b: Vec<u8>, s: Vec<u8>) -> Self {
        Self::new(b, s)
    }
}

impl FromStr for Life {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let rule: Life = ParseLife::parse_rule(input).map_err(Error::ParseRuleError)?;
        if rule.has_b0() {
            Err(Error::B0Error)
        } else {
            Ok(rule)
        }
    }
}

/// Writes the rule in `B/S` notation.
impl Display for Life {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "B")?;
        self.birth.write_digits(f)?;
        write!(f, "/S")?;
        self.survival.write_digits(f)
    }
}

impl Rule for Life {
    #[inline]
    fn survives(&self, live_nbhd: &PositionSet) -> bool {
        self.survival.includes(live_nbhd.len())
    }

    #[inline]
    fn is_born(&self, live_nbhd: &PositionSet) -> bool {
        self.birth.includes(live_nbhd.len())
    }
}
