//! Price command implementation
//!
//! Builds a contract and market snapshot from the arguments, prices them
//! with the selected model and prints the report to stdout.

use pricer_core::market_data::MarketSnapshot;
use pricer_models::instruments::{Contract, OptionKind};
use pricer_models::models::{PricingModel, PricingModelEnum};
use tracing::{debug, info};

use crate::config::CliConfig;
use crate::output::{self, PriceReport};
use crate::Result;

/// Inputs of one pricing run, as given on the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceArgs {
    /// Model identifier; falls back to the configured default
    pub model: Option<String>,
    /// `call` or `put`
    pub option_type: String,
    /// Spot price
    pub spot: f64,
    /// Strike price
    pub strike: f64,
    /// Risk-free rate
    pub rate: f64,
    /// Volatility
    pub vol: f64,
    /// Time to expiration in years
    pub maturity: f64,
    /// Also compute Greeks
    pub greeks: bool,
}

/// Run the price command
pub fn run(args: &PriceArgs, config: &CliConfig) -> Result<()> {
    let report = evaluate(args, config)?;
    let rendered = output::render(&report, config.output_format, config.precision)?;
    println!("{}", rendered);
    Ok(())
}

/// Validate the inputs and price them without printing.
pub fn evaluate(args: &PriceArgs, config: &CliConfig) -> Result<PriceReport> {
    let model = match &args.model {
        Some(name) => name.parse::<PricingModelEnum>()?,
        None => config.default_model,
    };
    let kind: OptionKind = args.option_type.parse()?;

    let contract = Contract::new(kind, args.strike, args.maturity)?;
    let market = MarketSnapshot::new(args.spot, args.rate, args.vol)?;

    info!(model = %model, kind = %kind, greeks = args.greeks, "pricing option");
    debug!(?contract, ?market, "validated inputs");

    let result = if args.greeks {
        model.price_with_greeks(&contract, &market)
    } else {
        model.price(&contract, &market)
    };

    debug!(price = result.price, "pricing complete");

    Ok(PriceReport {
        model,
        contract,
        market,
        result,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;
    use approx::assert_relative_eq;
    use pricer_core::types::ValidationError;

    fn args() -> PriceArgs {
        PriceArgs {
            model: None,
            option_type: "call".to_string(),
            spot: 100.0,
            strike: 105.0,
            rate: 0.05,
            vol: 0.2,
            maturity: 0.5,
            greeks: false,
        }
    }

    #[test]
    fn test_evaluate_reference_call() {
        let report = evaluate(&args(), &CliConfig::default()).unwrap();
        assert_relative_eq!(report.result.price, 6.86, epsilon = 1e-2);
        assert!(!report.result.has_greeks());
        assert_eq!(report.model, PricingModelEnum::black_scholes());
    }

    #[test]
    fn test_evaluate_with_greeks() {
        let report = evaluate(
            &PriceArgs {
                greeks: true,
                option_type: "PUT".to_string(),
                ..args()
            },
            &CliConfig::default(),
        )
        .unwrap();
        assert!(report.result.has_greeks());
        assert!(report.result.sensitivities().delta < 0.0);
    }

    #[test]
    fn test_evaluate_explicit_model_alias() {
        let report = evaluate(
            &PriceArgs {
                model: Some("bs".to_string()),
                ..args()
            },
            &CliConfig::default(),
        )
        .unwrap();
        assert_eq!(report.model.id(), "black_scholes");
    }

    #[test]
    fn test_evaluate_unknown_model() {
        let err = evaluate(
            &PriceArgs {
                model: Some("heston".to_string()),
                ..args()
            },
            &CliConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, CliError::UnknownModel(_)));
    }

    #[test]
    fn test_evaluate_invalid_option_type() {
        let err = evaluate(
            &PriceArgs {
                option_type: "straddle".to_string(),
                ..args()
            },
            &CliConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument(_)));
    }

    #[test]
    fn test_evaluate_missing_spot_is_validation_error() {
        let err = evaluate(
            &PriceArgs {
                spot: 0.0,
                ..args()
            },
            &CliConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CliError::Validation(ValidationError::InvalidSpot { .. })
        ));
    }

    #[test]
    fn test_evaluate_negative_volatility() {
        let err = evaluate(
            &PriceArgs {
                vol: -0.2,
                ..args()
            },
            &CliConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CliError::Validation(ValidationError::InvalidVolatility { .. })
        ));
    }
}
