//! Report rendering for the price command
//!
//! Table output echoes the inputs before the result; JSON output is one
//! object with `model`, `contract`, `market` and `result` keys.

use std::fmt::{self, Write};

use pricer_core::market_data::MarketSnapshot;
use pricer_models::analytical::PricingResult;
use pricer_models::instruments::Contract;
use pricer_models::models::{PricingModel, PricingModelEnum};
use serde::Serialize;

use crate::config::OutputFormat;
use crate::Result;

/// Everything needed to print one pricing run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceReport {
    /// Model that produced the result
    pub model: PricingModelEnum,
    /// Contract terms
    pub contract: Contract<f64>,
    /// Market inputs
    pub market: MarketSnapshot<f64>,
    /// Price and optional Greeks
    pub result: PricingResult<f64>,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    model: &'static str,
    contract: &'a Contract<f64>,
    market: &'a MarketSnapshot<f64>,
    result: &'a PricingResult<f64>,
}

/// Render a report in the requested format.
pub fn render(report: &PriceReport, format: OutputFormat, precision: usize) -> Result<String> {
    match format {
        OutputFormat::Table => {
            let mut out = String::new();
            write_table(&mut out, report, precision)?;
            Ok(out)
        }
        OutputFormat::Json => render_json(report),
    }
}

fn write_table<W: Write>(out: &mut W, report: &PriceReport, precision: usize) -> fmt::Result {
    let p = precision;
    let PriceReport {
        model,
        contract,
        market,
        result,
    } = report;

    writeln!(out, "=== Option Pricing Result ===")?;
    writeln!(out, "Model: {}", PricingModel::<f64>::name(model))?;
    writeln!(out, "Option Type: {}", contract.kind())?;
    writeln!(out, "Spot Price: {:.p$}", market.spot())?;
    writeln!(out, "Strike Price: {:.p$}", contract.strike())?;
    writeln!(out, "Risk-Free Rate: {:.p$}", market.rate())?;
    writeln!(out, "Volatility: {:.p$}", market.volatility())?;
    writeln!(out, "Time to Expiration: {:.p$} years", contract.time_to_expiration())?;
    writeln!(out, "--------------------------------")?;
    writeln!(out, "Option Price: {:.p$}", result.price)?;

    if let Some(greeks) = &result.greeks {
        writeln!(out, "--------------------------------")?;
        writeln!(out, "Delta: {:.p$}", greeks.delta)?;
        writeln!(out, "Gamma: {:.p$}", greeks.gamma)?;
        writeln!(out, "Vega: {:.p$}", greeks.vega)?;
        writeln!(out, "Theta: {:.p$}", greeks.theta)?;
        writeln!(out, "Rho: {:.p$}", greeks.rho)?;
    }

    write!(out, "==============================")
}

fn render_json(report: &PriceReport) -> Result<String> {
    let json = JsonReport {
        model: report.model.id(),
        contract: &report.contract,
        market: &report.market,
        result: &report.result,
    };
    Ok(serde_json::to_string_pretty(&json)?)
}
