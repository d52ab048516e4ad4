//! Pricing result types.
//!
//! Provides [`PricingResult<T>`] and [`Greeks<T>`]. Whether sensitivities
//! were requested is recorded explicitly: a contract priced at expiry has
//! every Greek equal to zero, which must not read as "not computed".

use num_traits::Float;

/// First- and second-order sensitivities of an option price.
///
/// # Fields
///
/// - `delta`: ∂V/∂S
/// - `gamma`: ∂²V/∂S²
/// - `vega`: ∂V/∂σ, per unit of volatility (not per 1%)
/// - `theta`: ∂V/∂t, per year
/// - `rho`: ∂V/∂r, per unit of rate
///
/// `Default` is all zeros.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks<T: Float> {
    /// Delta: ∂V/∂S (sensitivity to spot price).
    pub delta: T,
    /// Gamma: ∂²V/∂S² (convexity with respect to spot).
    pub gamma: T,
    /// Vega: ∂V/∂σ (sensitivity to volatility).
    pub vega: T,
    /// Theta: ∂V/∂t (time decay, per year).
    pub theta: T,
    /// Rho: ∂V/∂r (sensitivity to interest rate).
    pub rho: T,
}

impl<T: Float> Default for Greeks<T> {
    fn default() -> Self {
        Self {
            delta: T::zero(),
            gamma: T::zero(),
            vega: T::zero(),
            theta: T::zero(),
            rho: T::zero(),
        }
    }
}

impl<T: Float> Greeks<T> {
    /// Greeks with only delta set; the rest are zero.
    ///
    /// This is the shape of the sensitivities at both pricing boundaries
    /// (expiry and zero volatility).
    #[inline]
    pub fn delta_only(delta: T) -> Self {
        Self {
            delta,
            ..Default::default()
        }
    }

    /// Returns true when every sensitivity is finite.
    pub fn is_finite(&self) -> bool {
        self.delta.is_finite()
            && self.gamma.is_finite()
            && self.vega.is_finite()
            && self.theta.is_finite()
            && self.rho.is_finite()
    }
}

/// Outcome of a single pricing call.
///
/// # Examples
///
/// ```rust
/// use pricer_models::analytical::{Greeks, PricingResult};
///
/// let price_only = PricingResult::new(10.45_f64);
/// assert!(!price_only.has_greeks());
/// assert_eq!(price_only.sensitivities(), Greeks::default());
///
/// // Greeks computed, all legitimately zero (e.g. an expired OTM option)
/// let at_expiry = PricingResult::with_greeks(0.0_f64, Greeks::default());
/// assert!(at_expiry.has_greeks());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingResult<T: Float> {
    /// Present value of the option.
    pub price: T,
    /// Sensitivities, present iff they were requested.
    pub greeks: Option<Greeks<T>>,
}

impl<T: Float> PricingResult<T> {
    /// Creates a price-only result.
    #[inline]
    pub fn new(price: T) -> Self {
        Self {
            price,
            greeks: None,
        }
    }

    /// Creates a result carrying Greeks.
    #[inline]
    pub fn with_greeks(price: T, greeks: Greeks<T>) -> Self {
        Self {
            price,
            greeks: Some(greeks),
        }
    }

    /// Returns whether sensitivities were computed.
    #[inline]
    pub fn has_greeks(&self) -> bool {
        self.greeks.is_some()
    }

    /// Returns the Greeks, or all zeros for a price-only result.
    #[inline]
    pub fn sensitivities(&self) -> Greeks<T> {
        self.greeks.unwrap_or_default()
    }
}
