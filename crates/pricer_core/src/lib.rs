//! # pricer_core: Validated Inputs for Closed-Form Option Pricing
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Market inputs: [`MarketSnapshot`] (`market_data`)
//! - Error types: [`ValidationError`] (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Structured error types
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::market_data::MarketSnapshot;
//! use pricer_core::types::ValidationError;
//!
//! let market = MarketSnapshot::new(100.0_f64, 0.05, 0.2).unwrap();
//! assert_eq!(market.spot(), 100.0);
//!
//! // Invariants are enforced at construction
//! let err = MarketSnapshot::new(-100.0_f64, 0.05, 0.2).unwrap_err();
//! assert!(matches!(err, ValidationError::InvalidSpot { .. }));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for market inputs and errors

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod market_data;
pub mod types;

pub use market_data::MarketSnapshot;
pub use types::ValidationError;
