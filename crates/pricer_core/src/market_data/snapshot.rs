//! Market snapshot: the observable inputs of a pricing call.

use num_traits::Float;

use crate::types::ValidationError;

/// Spot, risk-free rate and volatility observed at a single instant.
///
/// Fields are private; a `MarketSnapshot` can only be obtained through
/// [`MarketSnapshot::new`], so every instance satisfies `spot > 0` and
/// `volatility >= 0`.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use pricer_core::market_data::MarketSnapshot;
///
/// let market = MarketSnapshot::new(100.0_f64, -0.01, 0.25).unwrap();
/// assert_eq!(market.spot(), 100.0);
/// assert_eq!(market.rate(), -0.01);
/// assert_eq!(market.volatility(), 0.25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MarketSnapshot<T: Float> {
    spot: T,
    rate: T,
    volatility: T,
}

impl<T: Float> MarketSnapshot<T> {
    /// Creates a validated market snapshot.
    ///
    /// # Arguments
    /// * `spot` - Spot price of the underlying (must be positive)
    /// * `rate` - Continuously compounded risk-free rate (any finite value)
    /// * `volatility` - Annualised volatility (must be non-negative)
    ///
    /// # Errors
    /// - `ValidationError::InvalidSpot` if spot <= 0 or non-finite
    /// - `ValidationError::InvalidRate` if rate is non-finite
    /// - `ValidationError::InvalidVolatility` if volatility < 0 or non-finite
    ///
    /// # Examples
    /// ```
    /// use pricer_core::market_data::MarketSnapshot;
    ///
    /// // Zero volatility is a valid (deterministic) market
    /// assert!(MarketSnapshot::new(100.0_f64, 0.05, 0.0).is_ok());
    ///
    /// // Negative volatility is not
    /// assert!(MarketSnapshot::new(100.0_f64, 0.05, -0.2).is_err());
    /// ```
    pub fn new(spot: T, rate: T, volatility: T) -> Result<Self, ValidationError> {
        let zero = T::zero();

        if !spot.is_finite() || spot <= zero {
            return Err(ValidationError::InvalidSpot {
                spot: spot.to_f64().unwrap_or(f64::NAN),
            });
        }

        if !rate.is_finite() {
            return Err(ValidationError::InvalidRate {
                rate: rate.to_f64().unwrap_or(f64::NAN),
            });
        }

        if !volatility.is_finite() || volatility < zero {
            return Err(ValidationError::InvalidVolatility {
                volatility: volatility.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(Self {
            spot,
            rate,
            volatility,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Discount factor `e^(-r·t)` for a horizon of `t` years.
    #[inline]
    pub fn discount_factor(&self, t: T) -> T {
        (-self.rate * t).exp()
    }

    /// Returns true when the market carries no variance.
    #[inline]
    pub fn is_deterministic(&self) -> bool {
        self.volatility == T::zero()
    }
}
