//! Command handlers behind the `fiscal-sim` binary.
//!
//! Each handler returns the rendered output instead of printing it, so the
//! binary stays a thin shell and the handlers can be tested directly.

use std::path::Path;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use fiscal_core::{FiscalCalculator, FiscalParameters, TaxpayerInput};
use fiscal_data::{inputs, parameters};
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::report::{self, ScenarioReport};
use crate::utils::parse_decimal;

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Taxpayer figures for a single `calculate` run.
///
/// Amounts accept comma thousands separators (`450,000,000`). Negative
/// numbers parse so that validation can name the offending field.
#[derive(Debug, Clone, Args)]
pub struct ScenarioArgs {
    /// Label shown in the report heading.
    #[arg(long, default_value = "scenario")]
    pub label: String,

    /// Projected gross annual income.
    #[arg(
        long,
        value_parser = parse_decimal,
        allow_negative_numbers = true,
        default_value = "400,000,000"
    )]
    pub income: Decimal,

    /// Reduced gross-receipts rate, in percent.
    #[arg(
        long,
        value_parser = parse_decimal,
        allow_negative_numbers = true,
        default_value = "3"
    )]
    pub reduced_rate: Decimal,

    /// General gross-receipts rate, in percent.
    #[arg(
        long,
        value_parser = parse_decimal,
        allow_negative_numbers = true,
        default_value = "4"
    )]
    pub general_rate: Decimal,

    /// Increased gross-receipts rate, in percent.
    #[arg(
        long,
        value_parser = parse_decimal,
        allow_negative_numbers = true,
        default_value = "5"
    )]
    pub increased_rate: Decimal,

    /// Annual property tax before discounts.
    #[arg(
        long,
        value_parser = parse_decimal,
        allow_negative_numbers = true,
        default_value = "500,000"
    )]
    pub property_tax: Decimal,

    /// Annual vehicle tax before discounts.
    #[arg(
        long,
        value_parser = parse_decimal,
        allow_negative_numbers = true,
        default_value = "300,000"
    )]
    pub vehicle_tax: Decimal,

    /// The taxpayer has overdue tax debt.
    #[arg(long)]
    pub overdue_debt: bool,
}

impl ScenarioArgs {
    pub fn to_input(&self) -> TaxpayerInput {
        TaxpayerInput {
            gross_annual_income: self.income,
            reduced_rate: self.reduced_rate,
            general_rate: self.general_rate,
            increased_rate: self.increased_rate,
            property_tax: self.property_tax,
            vehicle_tax: self.vehicle_tax,
            has_overdue_debt: self.overdue_debt,
        }
    }
}

/// Loads the parameter file if one was given, otherwise the 2026 defaults.
pub fn load_parameters(path: Option<&Path>) -> Result<FiscalParameters> {
    match path {
        Some(path) => {
            let params = parameters::load_from_file(path)
                .with_context(|| format!("loading parameters from '{}'", path.display()))?;
            info!(tax_year = params.tax_year, path = %path.display(), "using parameter file");
            Ok(params)
        }
        None => {
            debug!("using built-in parameters");
            Ok(FiscalParameters::default())
        }
    }
}

/// Runs one scenario and renders it.
pub fn run_calculate(
    params: FiscalParameters,
    scenario: &ScenarioArgs,
    format: OutputFormat,
) -> Result<String> {
    let input = scenario.to_input();
    let calculator = FiscalCalculator::new(params).context("invalid fiscal parameters")?;
    let result = calculator
        .calculate(&input)
        .with_context(|| format!("calculating scenario '{}'", scenario.label))?;

    let report = ScenarioReport {
        label: &scenario.label,
        tax_year: calculator.parameters().tax_year,
        input: &input,
        result: &result,
    };
    match format {
        OutputFormat::Text => Ok(report::render_text(&report, calculator.parameters())),
        OutputFormat::Json => {
            serde_json::to_string_pretty(&report).context("serializing report")
        }
    }
}

/// Runs every scenario in a CSV file and renders them in file order.
///
/// Text output separates reports with a blank line; JSON output is an array.
pub fn run_batch(
    params: FiscalParameters,
    file: &Path,
    format: OutputFormat,
) -> Result<String> {
    let scenarios = inputs::load_from_file(file)
        .with_context(|| format!("loading scenarios from '{}'", file.display()))?;
    info!(count = scenarios.len(), file = %file.display(), "running batch");

    let calculator = FiscalCalculator::new(params).context("invalid fiscal parameters")?;
    let results = scenarios
        .iter()
        .map(|scenario| {
            calculator
                .calculate(&scenario.input)
                .with_context(|| format!("calculating scenario '{}'", scenario.label))
        })
        .collect::<Result<Vec<_>>>()?;

    let reports: Vec<ScenarioReport<'_>> = scenarios
        .iter()
        .zip(&results)
        .map(|(scenario, result)| ScenarioReport {
            label: &scenario.label,
            tax_year: calculator.parameters().tax_year,
            input: &scenario.input,
            result,
        })
        .collect();

    match format {
        OutputFormat::Text => Ok(reports
            .iter()
            .map(|report| report::render_text(report, calculator.parameters()))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => {
            serde_json::to_string_pretty(&reports).context("serializing reports")
        }
    }
}

/// Renders the effective parameter set.
pub fn render_params(
    params: &FiscalParameters,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(report::render_params_text(params)),
        OutputFormat::Json => serde_json::to_string_pretty(params).context("serializing parameters"),
    }
}
