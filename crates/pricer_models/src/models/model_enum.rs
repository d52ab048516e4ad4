//! Static dispatch enum for pricing models.
//!
//! `PricingModelEnum` wraps every concrete model behind one type so callers
//! can select a model by name at runtime without trait objects.
//!
//! ## Example
//!
//! ```
//! use pricer_models::models::{PricingModel, PricingModelEnum};
//!
//! let model: PricingModelEnum = "bs".parse().unwrap();
//! assert_eq!(PricingModel::<f64>::name(&model), "Black-Scholes");
//! assert_eq!(model.id(), "black_scholes");
//! ```

use std::fmt;
use std::str::FromStr;

use num_traits::Float;
use pricer_core::market_data::MarketSnapshot;
use thiserror::Error;

use super::pricing::PricingModel;
use crate::analytical::{BlackScholesModel, PricingResult};
use crate::instruments::Contract;

/// Error returned when a model name is not recognised.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown pricing model: {name} (supported: {})", PricingModelEnum::supported_models().join(", "))]
pub struct UnknownModelError {
    /// The rejected name
    pub name: String,
}

/// Static dispatch enum for pricing models.
///
/// # Supported Models
///
/// - `BlackScholes`: lognormal closed form (`black_scholes`, `black-scholes`, `bs`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricingModelEnum {
    /// Black-Scholes-Merton closed form
    BlackScholes(BlackScholesModel),
}

impl Default for PricingModelEnum {
    fn default() -> Self {
        Self::black_scholes()
    }
}

impl PricingModelEnum {
    /// Black-Scholes-Merton model.
    #[inline]
    pub fn black_scholes() -> Self {
        PricingModelEnum::BlackScholes(BlackScholesModel::new())
    }

    /// Canonical identifiers accepted by [`FromStr`].
    pub fn supported_models() -> &'static [&'static str] {
        &["black_scholes"]
    }

    /// Canonical identifier of this model.
    pub fn id(&self) -> &'static str {
        match self {
            PricingModelEnum::BlackScholes(_) => "black_scholes",
        }
    }
}

impl<T: Float> PricingModel<T> for PricingModelEnum {
    fn name(&self) -> &'static str {
        match self {
            PricingModelEnum::BlackScholes(m) => PricingModel::<T>::name(m),
        }
    }

    fn price(&self, contract: &Contract<T>, market: &MarketSnapshot<T>) -> PricingResult<T> {
        match self {
            PricingModelEnum::BlackScholes(m) => m.price(contract, market),
        }
    }

    fn price_with_greeks(&self, contract: &Contract<T>, market: &MarketSnapshot<T>) -> PricingResult<T> {
        match self {
            PricingModelEnum::BlackScholes(m) => m.price_with_greeks(contract, market),
        }
    }
}

impl FromStr for PricingModelEnum {
    type Err = UnknownModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "black_scholes" | "black-scholes" | "blackscholes" | "bs" => Ok(Self::black_scholes()),
            _ => Err(UnknownModelError { name: s.to_string() }),
        }
    }
}

impl fmt::Display for PricingModelEnum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}
