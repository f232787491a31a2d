//! TOML loader for fiscal parameter sets.
//!
//! Every key is optional; anything left out keeps its
//! [`FiscalParameters::default`] value. Unknown keys are rejected so a
//! misspelt threshold cannot silently fall back to the default.
//!
//! ```toml
//! tax_year = 2027
//!
//! [brackets]
//! reduced_ceiling = 500000000
//! increased_floor = 5000000000
//!
//! [discounts]
//! current_year_compliance = 0.10
//! prior_year_compliance = 0.10
//! annual_payment = 0.05
//! ```
//!
//! Decimals may be written as TOML numbers or as quoted strings
//! (`"0.10"`) when exact precision matters.

use std::path::Path;

use fiscal_core::{FiscalParameters, FiscalParametersError};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur while loading a parameter file.
#[derive(Debug, Error)]
pub enum ParametersLoadError {
    #[error("cannot read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid fiscal parameters: {0}")]
    Invalid(#[from] FiscalParametersError),
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ParametersFile {
    tax_year: Option<i32>,
    #[serde(default)]
    brackets: BracketsSection,
    #[serde(default)]
    discounts: DiscountsSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct BracketsSection {
    reduced_ceiling: Option<Decimal>,
    increased_floor: Option<Decimal>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct DiscountsSection {
    current_year_compliance: Option<Decimal>,
    prior_year_compliance: Option<Decimal>,
    annual_payment: Option<Decimal>,
}

impl ParametersFile {
    fn into_parameters(self) -> FiscalParameters {
        let defaults = FiscalParameters::default();
        FiscalParameters {
            tax_year: self.tax_year.unwrap_or(defaults.tax_year),
            reduced_bracket_ceiling: self
                .brackets
                .reduced_ceiling
                .unwrap_or(defaults.reduced_bracket_ceiling),
            increased_bracket_floor: self
                .brackets
                .increased_floor
                .unwrap_or(defaults.increased_bracket_floor),
            current_year_compliance_discount: self
                .discounts
                .current_year_compliance
                .unwrap_or(defaults.current_year_compliance_discount),
            prior_year_compliance_discount: self
                .discounts
                .prior_year_compliance
                .unwrap_or(defaults.prior_year_compliance_discount),
            annual_payment_discount: self
                .discounts
                .annual_payment
                .unwrap_or(defaults.annual_payment_discount),
        }
    }
}

/// Parses TOML text into a validated parameter set.
///
/// # Errors
///
/// * [`ParametersLoadError::Toml`] on malformed TOML, unknown keys or
///   values that are not decimals.
/// * [`ParametersLoadError::Invalid`] when the merged set fails
///   [`FiscalParameters::validate`].
pub fn load_from_str(input: &str) -> Result<FiscalParameters, ParametersLoadError> {
    let file: ParametersFile = toml::from_str(input)?;
    let params = file.into_parameters();

    if let Err(e) = params.validate() {
        warn!(error = %e, "rejected fiscal parameters");
        return Err(e.into());
    }

    debug!(
        tax_year = params.tax_year,
        ceiling = %params.reduced_bracket_ceiling,
        floor = %params.increased_bracket_floor,
        combined_discount = %params.combined_discount_rate(),
        "loaded fiscal parameters"
    );
    Ok(params)
}

/// Reads a parameter file from disk and delegates to [`load_from_str`].
///
/// # Errors
///
/// Returns [`ParametersLoadError::Io`] when the file cannot be read, or any
/// error [`load_from_str`] produces.
pub fn load_from_file(path: &Path) -> Result<FiscalParameters, ParametersLoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ParametersLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_from_str(&contents)
}
