//! European option contract.

use num_traits::Float;
use pricer_core::types::ValidationError;

use super::OptionKind;

/// European option contract terms.
///
/// Fields are private; a `Contract` can only be obtained through
/// [`Contract::new`], so every instance satisfies `strike > 0` and
/// `time_to_expiration >= 0`.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use pricer_models::instruments::{Contract, OptionKind};
///
/// let contract = Contract::new(OptionKind::Put, 105.0_f64, 0.5).unwrap();
/// assert_eq!(contract.kind(), OptionKind::Put);
/// assert_eq!(contract.strike(), 105.0);
/// assert_eq!(contract.time_to_expiration(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Contract<T: Float> {
    kind: OptionKind,
    strike: T,
    time_to_expiration: T,
}

impl<T: Float> Contract<T> {
    /// Creates a validated contract.
    ///
    /// # Arguments
    /// * `kind` - Call or Put
    /// * `strike` - Strike price (must be positive)
    /// * `time_to_expiration` - Year fraction until expiry (must be non-negative)
    ///
    /// # Errors
    /// - `ValidationError::InvalidStrike` if strike <= 0 or non-finite
    /// - `ValidationError::InvalidExpiration` if time_to_expiration < 0 or non-finite
    ///
    /// # Examples
    /// ```
    /// use pricer_models::instruments::{Contract, OptionKind};
    /// use pricer_core::types::ValidationError;
    ///
    /// // An expiring contract is valid
    /// assert!(Contract::new(OptionKind::Call, 100.0_f64, 0.0).is_ok());
    ///
    /// let err = Contract::new(OptionKind::Call, -100.0_f64, 1.0).unwrap_err();
    /// assert_eq!(err, ValidationError::InvalidStrike { strike: -100.0 });
    /// ```
    pub fn new(kind: OptionKind, strike: T, time_to_expiration: T) -> Result<Self, ValidationError> {
        let zero = T::zero();

        if !strike.is_finite() || strike <= zero {
            return Err(ValidationError::InvalidStrike {
                strike: strike.to_f64().unwrap_or(f64::NAN),
            });
        }

        if !time_to_expiration.is_finite() || time_to_expiration < zero {
            return Err(ValidationError::InvalidExpiration {
                time_to_expiration: time_to_expiration.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(Self {
            kind,
            strike,
            time_to_expiration,
        })
    }

    /// Returns the option kind.
    #[inline]
    pub fn kind(&self) -> OptionKind {
        self.kind
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }

    /// Returns the time to expiration in years.
    #[inline]
    pub fn time_to_expiration(&self) -> T {
        self.time_to_expiration
    }

    /// Returns whether the contract is at its expiry (T = 0).
    #[inline]
    pub fn is_expired(&self) -> bool {
        self.time_to_expiration == T::zero()
    }

    /// Exercise value at the given spot.
    #[inline]
    pub fn intrinsic_value(&self, spot: T) -> T {
        self.kind.intrinsic(spot, self.strike)
    }

    /// Is the option in the money at this spot?
    pub fn is_itm(&self, spot: T) -> bool {
        match self.kind {
            OptionKind::Call => spot > self.strike,
            OptionKind::Put => spot < self.strike,
        }
    }

    /// Is the option exactly at the money?
    pub fn is_atm(&self, spot: T) -> bool {
        spot == self.strike
    }

    /// Is the option out of the money at this spot?
    pub fn is_otm(&self, spot: T) -> bool {
        !self.is_itm(spot) && !self.is_atm(spot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid_contract() {
        let contract = Contract::new(OptionKind::Call, 100.0_f64, 1.0).unwrap();
        assert_eq!(contract.kind(), OptionKind::Call);
        assert_eq!(contract.strike(), 100.0);
        assert_eq!(contract.time_to_expiration(), 1.0);
        assert!(!contract.is_expired());
    }

    #[test]
    fn test_new_invalid_strike_negative() {
        let result = Contract::new(OptionKind::Call, -100.0_f64, 1.0);
        match result {
            Err(ValidationError::InvalidStrike { strike }) => assert_eq!(strike, -100.0),
            _ => panic!("Expected InvalidStrike error"),
        }
    }

    #[test]
    fn test_new_invalid_strike_zero() {
        let result = Contract::new(OptionKind::Put, 0.0_f64, 1.0);
        assert!(matches!(result, Err(ValidationError::InvalidStrike { .. })));
    }

    #[test]
    fn test_new_invalid_strike_nan() {
        let result = Contract::new(OptionKind::Put, f64::NAN, 1.0);
        assert!(matches!(result, Err(ValidationError::InvalidStrike { .. })));
    }

    #[test]
    fn test_new_invalid_expiration_negative() {
        let result = Contract::new(OptionKind::Call, 100.0_f64, -1.0);
        match result {
            Err(ValidationError::InvalidExpiration { time_to_expiration }) => {
                assert_eq!(time_to_expiration, -1.0)
            }
            _ => panic!("Expected InvalidExpiration error"),
        }
    }

    #[test]
    fn test_new_invalid_expiration_infinite() {
        let result = Contract::new(OptionKind::Call, 100.0_f64, f64::INFINITY);
        assert!(matches!(
            result,
            Err(ValidationError::InvalidExpiration { .. })
        ));
    }

    #[test]
    fn test_zero_expiration_is_expired() {
        let contract = Contract::new(OptionKind::Call, 100.0_f64, 0.0).unwrap();
        assert!(contract.is_expired());
    }

    #[test]
    fn test_intrinsic_value() {
        let call = Contract::new(OptionKind::Call, 100.0_f64, 0.5).unwrap();
        let put = Contract::new(OptionKind::Put, 100.0_f64, 0.5).unwrap();
        assert_eq!(call.intrinsic_value(110.0), 10.0);
        assert_eq!(put.intrinsic_value(110.0), 0.0);
        assert_eq!(put.intrinsic_value(90.0), 10.0);
    }

    #[test]
    fn test_moneyness() {
        let call = Contract::new(OptionKind::Call, 100.0_f64, 0.5).unwrap();
        assert!(call.is_itm(110.0));
        assert!(call.is_atm(100.0));
        assert!(call.is_otm(90.0));

        let put = Contract::new(OptionKind::Put, 100.0_f64, 0.5).unwrap();
        assert!(put.is_itm(90.0));
        assert!(put.is_otm(110.0));
        assert!(!put.is_otm(100.0));
    }

    #[test]
    fn test_debug() {
        let contract = Contract::new(OptionKind::Call, 100.0_f64, 1.0).unwrap();
        let debug_str = format!("{:?}", contract);
        assert!(debug_str.contains("Contract"));
        assert!(debug_str.contains("strike"));
        assert!(debug_str.contains("time_to_expiration"));
    }
}
