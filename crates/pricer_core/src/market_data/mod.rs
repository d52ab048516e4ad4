//! Market data structures for closed-form option pricing.
//!
//! # Architecture
//!
//! All structures are generic over `T: Float` so the same inputs serve
//! `f64` production pricing and `f32` experiments alike.
//!
//! # Components
//!
//! - [`snapshot`]: Spot, risk-free rate and volatility observed together ([`MarketSnapshot`])
//!
//! # Example
//!
//! ```
//! use pricer_core::market_data::MarketSnapshot;
//!
//! let market = MarketSnapshot::new(100.0_f64, 0.05, 0.20).unwrap();
//! let df = market.discount_factor(1.0);
//! assert!((df - 0.951229).abs() < 1e-5);
//! ```

pub mod snapshot;

pub use snapshot::MarketSnapshot;
