//! Option kind (Call/Put).

use std::fmt;
use std::str::FromStr;

use num_traits::Float;
use thiserror::Error;

/// Direction of an option payoff.
///
/// # Examples
/// ```
/// use pricer_models::instruments::OptionKind;
///
/// let kind: OptionKind = "put".parse().unwrap();
/// assert_eq!(kind, OptionKind::Put);
/// assert_eq!(kind.intrinsic(90.0_f64, 100.0), 10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionKind {
    /// Right to buy at the strike: max(S - K, 0)
    Call,
    /// Right to sell at the strike: max(K - S, 0)
    Put,
}

impl OptionKind {
    /// Returns whether this is a call.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionKind::Call)
    }

    /// Returns whether this is a put.
    #[inline]
    pub fn is_put(&self) -> bool {
        matches!(self, OptionKind::Put)
    }

    /// Exercise value at the given spot and strike.
    #[inline]
    pub fn intrinsic<T: Float>(&self, spot: T, strike: T) -> T {
        let zero = T::zero();
        match self {
            OptionKind::Call => (spot - strike).max(zero),
            OptionKind::Put => (strike - spot).max(zero),
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionKind::Call => write!(f, "Call"),
            OptionKind::Put => write!(f, "Put"),
        }
    }
}

/// Error returned when parsing an unknown option kind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid option type: {0} (must be 'call' or 'put')")]
pub struct ParseOptionKindError(
    /// The rejected input
    pub String,
);

impl FromStr for OptionKind {
    type Err = ParseOptionKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" | "c" => Ok(OptionKind::Call),
            "put" | "p" => Ok(OptionKind::Put),
            _ => Err(ParseOptionKindError(s.to_string())),
        }
    }
}
