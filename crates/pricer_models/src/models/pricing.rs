//! PricingModel trait for a uniform option pricing interface.
//!
//! Any model that turns a [`Contract`] and a [`MarketSnapshot`] into a
//! [`PricingResult`] implements this trait. Dispatch over concrete models
//! goes through [`PricingModelEnum`](super::PricingModelEnum), not
//! `Box<dyn PricingModel>`.

use num_traits::Float;
use pricer_core::market_data::MarketSnapshot;

use crate::analytical::{BlackScholesModel, PricingResult};
use crate::instruments::Contract;

/// Uniform interface over option pricing models.
///
/// Implementations must be pure: the same inputs give the same result, and
/// a model instance can be shared across threads without synchronisation.
pub trait PricingModel<T: Float>: Send + Sync {
    /// Human-readable model name
    fn name(&self) -> &'static str;

    /// Price only; `greeks` in the result is `None`.
    fn price(&self, contract: &Contract<T>, market: &MarketSnapshot<T>) -> PricingResult<T>;

    /// Price and all five Greeks; `greeks` in the result is `Some`.
    fn price_with_greeks(&self, contract: &Contract<T>, market: &MarketSnapshot<T>) -> PricingResult<T>;
}

impl<T: Float> PricingModel<T> for BlackScholesModel {
    fn name(&self) -> &'static str {
        "Black-Scholes"
    }

    fn price(&self, contract: &Contract<T>, market: &MarketSnapshot<T>) -> PricingResult<T> {
        BlackScholesModel::price(self, contract, market)
    }

    fn price_with_greeks(&self, contract: &Contract<T>, market: &MarketSnapshot<T>) -> PricingResult<T> {
        BlackScholesModel::price_with_greeks(self, contract, market)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruments::OptionKind;

    fn price_via_trait<M: PricingModel<f64>>(model: &M) -> PricingResult<f64> {
        let market = MarketSnapshot::new(100.0, 0.05, 0.2).unwrap();
        let contract = Contract::new(OptionKind::Call, 100.0, 1.0).unwrap();
        model.price_with_greeks(&contract, &market)
    }

    #[test]
    fn test_black_scholes_name() {
        assert_eq!(PricingModel::<f64>::name(&BlackScholesModel::new()), "Black-Scholes");
    }

    #[test]
    fn test_generic_caller() {
        let result = price_via_trait(&BlackScholesModel::new());
        assert!(result.has_greeks());
        assert!((result.price - 13.4175).abs() < 1e-3);
    }

    #[test]
    fn test_trait_price_has_no_greeks() {
        let market = MarketSnapshot::new(100.0_f64, 0.05, 0.2).unwrap();
        let contract = Contract::new(OptionKind::Put, 100.0_f64, 1.0).unwrap();
        let result = PricingModel::price(&BlackScholesModel::new(), &contract, &market);
        assert!(!result.has_greeks());
    }
}
