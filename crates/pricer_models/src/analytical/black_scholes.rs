//! Black-Scholes-Merton pricing model for European options.
//!
//! This module provides closed-form prices and analytical Greeks for
//! European calls and puts on a non-dividend-paying underlying.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! ## Boundaries
//!
//! d₁ has σ√T in its denominator, so every entry point first classifies the
//! inputs into a [`PricingRegime`]. d₁/d₂ only exist inside
//! [`PricingRegime::Diffusive`], which requires the product σ√T itself to be
//! positive: tiny σ and T whose product underflows are treated as zero
//! volatility. The expiry and zero-volatility cases are priced from
//! intrinsic value and never reach the formula.
//!
//! d₁ is evaluated as (ln(S/K) + rT)/(σ√T) + σ√T/2 so that σ² is never
//! formed; a very large σ therefore drives d₁ to +∞ and d₂ to -∞ instead of
//! overflowing into NaN.

use num_traits::Float;
use pricer_core::market_data::MarketSnapshot;
use tracing::{debug, trace};

use super::distributions::{norm_cdf, norm_pdf};
use super::result::{Greeks, PricingResult};
use crate::instruments::{Contract, OptionKind};

/// Computes d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T).
///
/// Evaluated as (ln(S/K) + rT)/(σ√T) + σ√T/2. Raw formula: the caller
/// guarantees `spot > 0`, `strike > 0` and `σ√T > 0`. Use
/// [`DiffusionTerms::new`] to get the guard.
///
/// # Examples
/// ```
/// use pricer_models::analytical::black_scholes::d1;
///
/// // ATM, r = 0: d1 = σ√T / 2
/// let value = d1(100.0_f64, 100.0, 0.0, 0.2, 1.0);
/// assert!((value - 0.1).abs() < 1e-12);
/// ```
#[inline]
pub fn d1<T: Float>(spot: T, strike: T, rate: T, volatility: T, time: T) -> T {
    let half = T::from(0.5).unwrap_or_else(T::zero);
    let vol_sqrt_t = volatility * time.sqrt();
    scaled_forward_moneyness(spot, strike, rate, time, vol_sqrt_t) + half * vol_sqrt_t
}

/// Computes d₂ = d₁ - σ√T.
#[inline]
pub fn d2<T: Float>(d1: T, volatility: T, time: T) -> T {
    d1 - volatility * time.sqrt()
}

/// (ln(S/K) + rT) / (σ√T)
#[inline]
fn scaled_forward_moneyness<T: Float>(spot: T, strike: T, rate: T, time: T, vol_sqrt_t: T) -> T {
    ((spot / strike).ln() + rate * time) / vol_sqrt_t
}

/// Intermediate quantities shared by the price and every Greek.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiffusionTerms<T: Float> {
    /// d₁
    pub d1: T,
    /// d₂
    pub d2: T,
    /// √T
    pub sqrt_t: T,
    /// σ√T
    pub vol_sqrt_t: T,
    /// e^(-rT)
    pub discount: T,
}

impl<T: Float> DiffusionTerms<T> {
    /// Computes d₁, d₂, √T and the discount factor.
    ///
    /// Returns `None` unless σ√T is strictly positive. This covers `time <= 0`,
    /// `volatility <= 0`, NaN inputs and products that underflow to zero.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::black_scholes::DiffusionTerms;
    ///
    /// assert!(DiffusionTerms::new(100.0_f64, 100.0, 0.05, 0.2, 1.0).is_some());
    /// assert!(DiffusionTerms::new(100.0_f64, 100.0, 0.05, 0.0, 1.0).is_none());
    /// assert!(DiffusionTerms::new(100.0_f64, 100.0, 0.05, 0.2, 0.0).is_none());
    /// assert!(DiffusionTerms::new(100.0_f64, 100.0, 0.05, 1e-300, 1e-300).is_none());
    /// ```
    pub fn new(spot: T, strike: T, rate: T, volatility: T, time: T) -> Option<Self> {
        let sqrt_t = time.sqrt();
        let vol_sqrt_t = volatility * sqrt_t;
        // Negative time yields a NaN root
        if vol_sqrt_t.is_nan() || vol_sqrt_t <= T::zero() {
            return None;
        }

        let half = T::from(0.5).unwrap_or_else(T::zero);
        let scaled = scaled_forward_moneyness(spot, strike, rate, time, vol_sqrt_t);
        let half_spread = half * vol_sqrt_t;
        Some(Self {
            d1: scaled + half_spread,
            d2: scaled - half_spread,
            sqrt_t,
            vol_sqrt_t,
            discount: (-rate * time).exp(),
        })
    }
}

/// Which branch of the model applies to a contract/market pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PricingRegime<T: Float> {
    /// T = 0: the option is worth its intrinsic value.
    Expired,
    /// σ√T = 0 with T > 0: the forward payoff is deterministic.
    ZeroVolatility {
        /// e^(-rT)
        discount: T,
    },
    /// σ√T > 0: the closed-form formula applies.
    Diffusive(DiffusionTerms<T>),
}

impl<T: Float> PricingRegime<T> {
    /// Classifies the inputs. This is the only place the boundary is checked.
    pub fn classify(contract: &Contract<T>, market: &MarketSnapshot<T>) -> Self {
        let time = contract.time_to_expiration();

        let regime = if contract.is_expired() {
            PricingRegime::Expired
        } else {
            match DiffusionTerms::new(
                market.spot(),
                contract.strike(),
                market.rate(),
                market.volatility(),
                time,
            ) {
                Some(terms) => PricingRegime::Diffusive(terms),
                None => PricingRegime::ZeroVolatility {
                    discount: market.discount_factor(time),
                },
            }
        };

        trace!(regime = regime.name(), kind = %contract.kind(), "classified pricing regime");
        regime
    }

    /// Short identifier used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            PricingRegime::Expired => "expired",
            PricingRegime::ZeroVolatility { .. } => "zero_volatility",
            PricingRegime::Diffusive(_) => "diffusive",
        }
    }
}

/// Black-Scholes-Merton model.
///
/// Stateless: all inputs arrive with each call as a validated [`Contract`]
/// and [`MarketSnapshot`].
///
/// # Examples
/// ```
/// use pricer_core::market_data::MarketSnapshot;
/// use pricer_models::analytical::BlackScholesModel;
/// use pricer_models::instruments::{Contract, OptionKind};
///
/// let model = BlackScholesModel::new();
/// let market = MarketSnapshot::new(100.0_f64, 0.05, 0.2).unwrap();
/// let call = Contract::new(OptionKind::Call, 100.0_f64, 1.0).unwrap();
/// let put = Contract::new(OptionKind::Put, 100.0_f64, 1.0).unwrap();
///
/// let c = model.price(&call, &market).price;
/// let p = model.price(&put, &market).price;
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = c - p - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlackScholesModel;

impl BlackScholesModel {
    /// Creates the model.
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Prices the contract; the result carries no Greeks.
    pub fn price<T: Float>(&self, contract: &Contract<T>, market: &MarketSnapshot<T>) -> PricingResult<T> {
        let regime = PricingRegime::classify(contract, market);
        let price = value(contract, market, &regime);
        debug!(regime = regime.name(), price = price.to_f64(), "priced option");
        PricingResult::new(price)
    }

    /// Prices the contract and computes delta, gamma, vega, theta and rho
    /// from the same d₁/d₂.
    pub fn price_with_greeks<T: Float>(
        &self,
        contract: &Contract<T>,
        market: &MarketSnapshot<T>,
    ) -> PricingResult<T> {
        let regime = PricingRegime::classify(contract, market);
        let price = value(contract, market, &regime);
        let greeks = greeks(contract, market, &regime);
        debug!(
            regime = regime.name(),
            price = price.to_f64(),
            delta = greeks.delta.to_f64(),
            "priced option with greeks"
        );
        PricingResult::with_greeks(price, greeks)
    }

    /// Delta (∂V/∂S).
    ///
    /// - Call Delta = N(d₁)
    /// - Put Delta = N(d₁) - 1
    ///
    /// At expiry: 1/0 for a call (S > K), -1/0 for a put (S < K).
    /// At zero volatility the same test is made against K·e^(-rT).
    pub fn delta<T: Float>(&self, contract: &Contract<T>, market: &MarketSnapshot<T>) -> T {
        let regime = PricingRegime::classify(contract, market);
        delta(contract, market, &regime)
    }

    /// Gamma (∂²V/∂S²) = φ(d₁) / (S·σ·√T). Zero at both boundaries.
    pub fn gamma<T: Float>(&self, contract: &Contract<T>, market: &MarketSnapshot<T>) -> T {
        match PricingRegime::classify(contract, market) {
            PricingRegime::Diffusive(terms) => gamma(market, &terms),
            _ => T::zero(),
        }
    }

    /// Vega (∂V/∂σ) = S·φ(d₁)·√T. Zero at both boundaries.
    pub fn vega<T: Float>(&self, contract: &Contract<T>, market: &MarketSnapshot<T>) -> T {
        match PricingRegime::classify(contract, market) {
            PricingRegime::Diffusive(terms) => vega(market, &terms),
            _ => T::zero(),
        }
    }

    /// Theta (∂V/∂t), per year.
    ///
    /// - Call Theta = -(S·σ·φ(d₁))/(2√T) - r·K·e^(-rT)·N(d₂)
    /// - Put Theta = -(S·σ·φ(d₁))/(2√T) + r·K·e^(-rT)·N(-d₂)
    pub fn theta<T: Float>(&self, contract: &Contract<T>, market: &MarketSnapshot<T>) -> T {
        match PricingRegime::classify(contract, market) {
            PricingRegime::Diffusive(terms) => theta(contract, market, &terms),
            _ => T::zero(),
        }
    }

    /// Rho (∂V/∂r).
    ///
    /// - Call Rho = K·T·e^(-rT)·N(d₂)
    /// - Put Rho = -K·T·e^(-rT)·N(-d₂)
    pub fn rho<T: Float>(&self, contract: &Contract<T>, market: &MarketSnapshot<T>) -> T {
        match PricingRegime::classify(contract, market) {
            PricingRegime::Diffusive(terms) => rho(contract, &terms),
            _ => T::zero(),
        }
    }
}

fn value<T: Float>(contract: &Contract<T>, market: &MarketSnapshot<T>, regime: &PricingRegime<T>) -> T {
    let spot = market.spot();
    let strike = contract.strike();

    match *regime {
        PricingRegime::Expired => contract.intrinsic_value(spot),
        PricingRegime::ZeroVolatility { discount } => contract.kind().intrinsic(spot, strike * discount),
        PricingRegime::Diffusive(terms) => {
            let discounted_strike = strike * terms.discount;
            let raw = match contract.kind() {
                OptionKind::Call => spot * norm_cdf(terms.d1) - discounted_strike * norm_cdf(terms.d2),
                OptionKind::Put => discounted_strike * norm_cdf(-terms.d2) - spot * norm_cdf(-terms.d1),
            };
            // Far out of the money both terms round to equal values; NaN passes through
            if raw < T::zero() {
                T::zero()
            } else {
                raw
            }
        }
    }
}

fn greeks<T: Float>(contract: &Contract<T>, market: &MarketSnapshot<T>, regime: &PricingRegime<T>) -> Greeks<T> {
    match regime {
        PricingRegime::Diffusive(terms) => Greeks {
            delta: delta(contract, market, regime),
            gamma: gamma(market, terms),
            vega: vega(market, terms),
            theta: theta(contract, market, terms),
            rho: rho(contract, terms),
        },
        _ => Greeks::delta_only(delta(contract, market, regime)),
    }
}

fn delta<T: Float>(contract: &Contract<T>, market: &MarketSnapshot<T>, regime: &PricingRegime<T>) -> T {
    let one = T::one();
    let zero = T::zero();
    let spot = market.spot();

    let step = |threshold: T| match contract.kind() {
        OptionKind::Call if spot > threshold => one,
        OptionKind::Put if spot < threshold => -one,
        _ => zero,
    };

    match *regime {
        PricingRegime::Expired => step(contract.strike()),
        PricingRegime::ZeroVolatility { discount } => step(contract.strike() * discount),
        PricingRegime::Diffusive(terms) => {
            let n_d1 = norm_cdf(terms.d1);
            match contract.kind() {
                OptionKind::Call => n_d1,
                OptionKind::Put => n_d1 - one,
            }
        }
    }
}

fn gamma<T: Float>(market: &MarketSnapshot<T>, terms: &DiffusionTerms<T>) -> T {
    norm_pdf(terms.d1) / (market.spot() * terms.vol_sqrt_t)
}

fn vega<T: Float>(market: &MarketSnapshot<T>, terms: &DiffusionTerms<T>) -> T {
    market.spot() * norm_pdf(terms.d1) * terms.sqrt_t
}

fn theta<T: Float>(contract: &Contract<T>, market: &MarketSnapshot<T>, terms: &DiffusionTerms<T>) -> T {
    let two = T::one() + T::one();
    let decay = -(market.spot() * norm_pdf(terms.d1) * market.volatility()) / (two * terms.sqrt_t);
    let carry = market.rate() * contract.strike() * terms.discount;

    match contract.kind() {
        OptionKind::Call => decay - carry * norm_cdf(terms.d2),
        OptionKind::Put => decay + carry * norm_cdf(-terms.d2),
    }
}

fn rho<T: Float>(contract: &Contract<T>, terms: &DiffusionTerms<T>) -> T {
    let exposure = contract.strike() * contract.time_to_expiration() * terms.discount;

    match contract.kind() {
        OptionKind::Call => exposure * norm_cdf(terms.d2),
        OptionKind::Put => -exposure * norm_cdf(-terms.d2),
    }
}
