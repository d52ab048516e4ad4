//! Analytical pricing formulas for European options.
//!
//! This module provides:
//! - Black-Scholes-Merton prices for calls and puts
//! - Analytical Greeks (Delta, Gamma, Vega, Theta, Rho)
//! - Standard normal CDF/PDF used by both
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`**: `f64` and `f32` share one implementation
//! - **Centralized boundaries**: expiry and zero volatility are decided once
//!   by [`PricingRegime::classify`] before any formula runs
//! - **Explicit Greeks flag**: [`PricingResult::greeks`] is `None` unless requested

pub mod black_scholes;
pub mod distributions;
pub mod result;

pub use black_scholes::{d1, d2, BlackScholesModel, DiffusionTerms, PricingRegime};
pub use distributions::{norm_cdf, norm_pdf};
pub use result::{Greeks, PricingResult};
