//! Pricing model abstraction.
//!
//! - `PricingModel` trait: price and Greeks for a contract under a market snapshot
//! - `PricingModelEnum`: static dispatch over the available models, parseable by name
//!
//! ## Example
//!
//! ```
//! use pricer_core::market_data::MarketSnapshot;
//! use pricer_models::instruments::{Contract, OptionKind};
//! use pricer_models::models::{PricingModel, PricingModelEnum};
//!
//! let model = PricingModelEnum::black_scholes();
//! let market = MarketSnapshot::new(100.0_f64, 0.05, 0.2).unwrap();
//! let contract = Contract::new(OptionKind::Call, 105.0_f64, 0.5).unwrap();
//!
//! let result = model.price(&contract, &market);
//! assert!((result.price - 6.86).abs() < 1e-2);
//! ```

pub mod model_enum;
pub mod pricing;

pub use model_enum::{PricingModelEnum, UnknownModelError};
pub use pricing::PricingModel;
