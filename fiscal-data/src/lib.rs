//! Loading of taxpayer scenarios (CSV) and fiscal parameter sets (TOML).

pub mod inputs;
pub mod parameters;

pub use inputs::{CsvLoadError, TaxpayerScenario};
pub use parameters::ParametersLoadError;
