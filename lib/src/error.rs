//! All kinds of errors in this crate.

use ca_rules::ParseRuleError;
use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Debug, PartialEq, Display, Error)]
pub enum Error {
    /// Invalid rule: {0:?}.
    ParseRuleError(#[from] ParseRuleError),
    /// B0 rules are not supported on an infinite grid.
    B0Error,
    /// Soup width / height should be positive.
    NonPositiveError,
    /// Soup density should be between 0 and 1, got {0}.
    DensityError(f64),
}
