//! Financial instrument definitions.
//!
//! # Instrument Types
//!
//! - [`OptionKind`]: Call or Put
//! - [`Contract`]: A European option on a single underlying
//!
//! # Examples
//!
//! ```
//! use pricer_models::instruments::{Contract, OptionKind};
//!
//! let call = Contract::new(OptionKind::Call, 100.0_f64, 0.5).unwrap();
//! assert_eq!(call.intrinsic_value(110.0), 10.0);
//! assert!(call.is_itm(110.0));
//! ```

mod contract;
mod option_kind;

pub use contract::Contract;
pub use option_kind::{OptionKind, ParseOptionKindError};
