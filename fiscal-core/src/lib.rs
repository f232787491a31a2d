pub mod calculations;
pub mod models;

pub use calculations::FiscalCalculator;
pub use models::*;
