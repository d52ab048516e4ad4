//! # Pricer Models (L2: Business Logic)
//!
//! Option contracts and closed-form pricing models.
//!
//! This crate provides:
//! - Instrument definitions ([`instruments::Contract`], [`instruments::OptionKind`])
//! - Normal distribution primitives and the Black-Scholes-Merton formulas
//!   with analytical Greeks ([`analytical`])
//! - The pricing-model capability and its static-dispatch enum ([`models`])
//!
//! ## Design Principles
//!
//! - **Validate at the boundary**: contracts and market snapshots are checked
//!   once at construction; pricing never fails
//! - **Enum-based models** for static dispatch
//! - **Explicit Greeks presence**: a result either carries Greeks or it does not
//!
//! ## Example
//!
//! ```
//! use pricer_core::market_data::MarketSnapshot;
//! use pricer_models::instruments::{Contract, OptionKind};
//! use pricer_models::models::{PricingModel, PricingModelEnum};
//!
//! let contract = Contract::new(OptionKind::Call, 100.0_f64, 1.0).unwrap();
//! let market = MarketSnapshot::new(100.0_f64, 0.05, 0.2).unwrap();
//!
//! let model = PricingModelEnum::black_scholes();
//! let result = model.price_with_greeks(&contract, &market);
//!
//! assert!((result.price - 13.4175).abs() < 1e-3);
//! assert!(result.has_greeks());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
pub mod models;
