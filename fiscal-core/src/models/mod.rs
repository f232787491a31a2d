mod advisory;
mod bracket;
mod calculation_result;
mod fiscal_parameters;
mod taxpayer_input;

pub use advisory::{Advisory, AdvisoryTopic};
pub use bracket::BracketCategory;
pub use calculation_result::{CalculationResult, ComparisonRow, TaxKind};
pub use fiscal_parameters::{FiscalParameters, FiscalParametersError};
pub use taxpayer_input::{InvalidInputError, TaxpayerInput};
