//! The fiscal burden calculator.
//!
//! Runs the four steps in order on one input snapshot:
//!
//! | Step | Produces |
//! |------|----------|
//! | [`BracketClassifier`] | bracket, applicable rate, gross-receipts tax |
//! | [`DiscountEvaluator`] | property and vehicle discounts |
//! | [`TotalsAggregator`] | optimized taxes, totals, total discount |
//! | [`RecommendationAdvisor`] | advisories |
//!
//! Every call recomputes everything from its arguments, so the same input and
//! parameters always yield an identical [`CalculationResult`].
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use fiscal_core::{BracketCategory, FiscalCalculator, FiscalParameters, TaxpayerInput};
//!
//! let calculator = FiscalCalculator::new(FiscalParameters::default()).unwrap();
//!
//! let input = TaxpayerInput {
//!     gross_annual_income: dec!(400000000),
//!     reduced_rate: dec!(3),
//!     general_rate: dec!(4),
//!     increased_rate: dec!(5),
//!     property_tax: dec!(500000),
//!     vehicle_tax: dec!(300000),
//!     has_overdue_debt: false,
//! };
//!
//! let result = calculator.calculate(&input).unwrap();
//!
//! assert_eq!(result.bracket, BracketCategory::Reduced);
//! assert_eq!(result.gross_receipts_tax, dec!(12000000));
//! assert_eq!(result.total_discount, dec!(200000));
//! assert_eq!(result.total_optimized, dec!(12600000));
//! ```

use tracing::{debug, warn};

use super::advisor::RecommendationAdvisor;
use super::classifier::BracketClassifier;
use super::discount::DiscountEvaluator;
use super::totals::TotalsAggregator;
use crate::{
    CalculationResult, FiscalParameters, FiscalParametersError, InvalidInputError, TaxpayerInput,
};

/// Computes a taxpayer's projected burden under one parameter set.
///
/// Holds nothing but its parameters, so it can be shared across threads and
/// called any number of times.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FiscalCalculator {
    params: FiscalParameters,
}

impl FiscalCalculator {
    /// # Errors
    ///
    /// Returns [`FiscalParametersError`] if `params` fails
    /// [`FiscalParameters::validate`].
    pub fn new(params: FiscalParameters) -> Result<Self, FiscalParametersError> {
        if let Err(error) = params.validate() {
            warn!(%error, tax_year = params.tax_year, "rejected fiscal parameters");
            return Err(error);
        }
        Ok(Self { params })
    }

    pub fn parameters(&self) -> &FiscalParameters {
        &self.params
    }

    /// Runs the full projection.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError`] if any amount or rate in `input` is
    /// negative, in which case nothing is computed, or if a derived amount
    /// does not fit in a [`Decimal`](rust_decimal::Decimal).
    pub fn calculate(
        &self,
        input: &TaxpayerInput,
    ) -> Result<CalculationResult, InvalidInputError> {
        if let Err(error) = input.validate() {
            warn!(%error, "rejected taxpayer input");
            return Err(error);
        }

        let out_of_range = |error: &InvalidInputError| warn!(%error, "fiscal projection out of range");
        let classification = BracketClassifier::new(&self.params)
            .classify(input)
            .inspect_err(out_of_range)?;
        let discounts = DiscountEvaluator::new(&self.params)
            .evaluate(input)
            .inspect_err(out_of_range)?;
        let totals = TotalsAggregator
            .aggregate(classification.gross_receipts_tax, input, &discounts)
            .inspect_err(out_of_range)?;
        let advisories = RecommendationAdvisor::new(&self.params)
            .advise(input, totals.total_discount)
            .inspect_err(out_of_range)?;

        debug!(
            tax_year = self.params.tax_year,
            bracket = %classification.category,
            total_optimized = %totals.total_optimized,
            "fiscal projection complete"
        );

        Ok(CalculationResult {
            bracket: classification.category,
            applicable_rate: classification.applicable_rate,
            gross_receipts_tax: classification.gross_receipts_tax,
            combined_discount_rate: discounts.combined_rate,
            property_discount: discounts.property_discount,
            vehicle_discount: discounts.vehicle_discount,
            optimized_property_tax: totals.optimized_property_tax,
            optimized_vehicle_tax: totals.optimized_vehicle_tax,
            total_discount: totals.total_discount,
            potential_discount: discounts.potential_discount,
            total_unoptimized: totals.total_unoptimized,
            total_optimized: totals.total_optimized,
            advisories,
        })
    }
}
