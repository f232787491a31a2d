//! Fiscal burden calculation steps.
//!
//! Each step is a small pure calculator over a [`crate::FiscalParameters`]
//! set; [`FiscalCalculator`] chains them.

pub mod advisor;
pub mod calculator;
pub mod classifier;
pub mod common;
pub mod discount;
pub mod totals;

pub use advisor::RecommendationAdvisor;
pub use calculator::FiscalCalculator;
pub use classifier::{BracketClassification, BracketClassifier};
pub use discount::{ComplianceDiscounts, DiscountEvaluator};
pub use totals::{Totals, TotalsAggregator};
