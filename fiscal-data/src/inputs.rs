//! CSV loader for taxpayer scenarios.
//!
//! ## CSV Format
//!
//! Headers are matched by name, so column order does **not** matter. Values
//! are trimmed.
//!
//! | Column | Required | Type | Notes |
//! |-----------------------|----------|---------|-------------------------------------------|
//! | `label` | no | string | Defaults to `row N` |
//! | `gross_annual_income` | yes | decimal | e.g. `400000000` |
//! | `reduced_rate` | yes | decimal | Percentage, e.g. `3` for 3% |
//! | `general_rate` | yes | decimal | Percentage |
//! | `increased_rate` | yes | decimal | Percentage |
//! | `property_tax` | yes | decimal | Annual amount |
//! | `vehicle_tax` | yes | decimal | Annual amount |
//! | `has_overdue_debt` | no | flag | `true`/`false`, `yes`/`no`, `1`/`0`; empty means `false` |
//!
//! ### Example
//!
//! ```csv
//! label,gross_annual_income,reduced_rate,general_rate,increased_rate,property_tax,vehicle_tax,has_overdue_debt
//! shop,400000000,3,4,5,500000,300000,no
//! distributor,5000000000,3,4,5,1200000,800000,yes
//! ```

use fiscal_core::{InvalidInputError, TaxpayerInput};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

// ---------------------------------------------------------------------------
// Serde-compatible row that mirrors the CSV layout exactly
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct CsvRow {
    label: Option<String>,
    gross_annual_income: Decimal,
    reduced_rate: Decimal,
    general_rate: Decimal,
    increased_rate: Decimal,
    property_tax: Decimal,
    vehicle_tax: Decimal,
    has_overdue_debt: Option<String>,
}

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// A named taxpayer input loaded from one CSV row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxpayerScenario {
    pub label: String,
    pub input: TaxpayerInput,
}

/// Errors that can occur while loading or converting CSV data.
#[derive(Debug, thiserror::Error)]
pub enum CsvLoadError {
    /// The file could not be read.
    #[error("cannot read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The underlying CSV deserialisation failed (bad structure, missing
    /// required column, type mismatch, etc.).
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// A `has_overdue_debt` cell was not a recognised flag. `row` is 1-based
    /// (header = row 0).
    #[error("unrecognised overdue-debt flag '{value}' on row {row}")]
    InvalidOverdueDebtFlag { value: String, row: usize },

    /// The row parsed but holds a negative amount or rate.
    #[error("invalid taxpayer input on row {row}: {source}")]
    InvalidInput {
        row: usize,
        #[source]
        source: InvalidInputError,
    },
}

// ---------------------------------------------------------------------------
// Core loader
// ---------------------------------------------------------------------------

fn parse_overdue_debt_flag(
    value: Option<&str>,
    row_number: usize,
) -> Result<bool, CsvLoadError> {
    let Some(raw) = value else {
        return Ok(false);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "false" | "no" | "n" | "0" => Ok(false),
        "true" | "yes" | "y" | "1" => Ok(true),
        _ => Err(CsvLoadError::InvalidOverdueDebtFlag {
            value: raw.to_string(),
            row: row_number,
        }),
    }
}

/// Convert a single CSV row into a scenario. `row_number` is 1-based.
fn convert_row(
    row: CsvRow,
    row_number: usize,
) -> Result<TaxpayerScenario, CsvLoadError> {
    let has_overdue_debt = parse_overdue_debt_flag(row.has_overdue_debt.as_deref(), row_number)?;

    let input = TaxpayerInput {
        gross_annual_income: row.gross_annual_income,
        reduced_rate: row.reduced_rate,
        general_rate: row.general_rate,
        increased_rate: row.increased_rate,
        property_tax: row.property_tax,
        vehicle_tax: row.vehicle_tax,
        has_overdue_debt,
    };
    input.validate().map_err(|source| {
        warn!(row = row_number, %source, "rejected CSV row");
        CsvLoadError::InvalidInput {
            row: row_number,
            source,
        }
    })?;

    let label = row
        .label
        .filter(|label| !label.trim().is_empty())
        .unwrap_or_else(|| format!("row {row_number}"));

    Ok(TaxpayerScenario { label, input })
}

/// Parse CSV text and return the scenarios in file order.
///
/// # Errors
///
/// * [`CsvLoadError::Parse`] if the CSV is structurally invalid or a
///   required field cannot be deserialised.
/// * [`CsvLoadError::InvalidOverdueDebtFlag`] for an unrecognised flag.
/// * [`CsvLoadError::InvalidInput`] for a negative amount or rate.
pub fn load_from_str(input: &str) -> Result<Vec<TaxpayerScenario>, CsvLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All) // tolerate whitespace around values
        .flexible(false) // strict column count
        .from_reader(input.as_bytes());

    let scenarios = reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, result)| {
            let row = result?;
            convert_row(row, idx + 1)
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(count = scenarios.len(), "loaded taxpayer scenarios");
    Ok(scenarios)
}

/// Read a file from disk and delegate to [`load_from_str`].
///
/// # Errors
///
/// Returns [`CsvLoadError::Io`] when the file cannot be read, or any error
/// [`load_from_str`] produces.
pub fn load_from_file(path: &std::path::Path) -> Result<Vec<TaxpayerScenario>, CsvLoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CsvLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_from_str(&contents)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
