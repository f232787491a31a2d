//! Gross-receipts bracket classification.
//!
//! Brackets are evaluated in priority order over closed intervals:
//!
//! | Income | Bracket | Rate |
//! |--------|---------|------|
//! | `<= reduced_bracket_ceiling` | Reduced | `reduced_rate` |
//! | `> increased_bracket_floor` | Increased | `increased_rate` |
//! | otherwise | General | `general_rate` |
//!
//! Income exactly at the ceiling stays in the reduced bracket. Because the
//! three rates are independent, the tax due can drop when income falls just
//! under the ceiling; that step is part of the model and is kept as is.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::common::percent_of;
use crate::{BracketCategory, FiscalParameters, InvalidInputError, TaxpayerInput};

/// Bracket and rate chosen for an income, plus the resulting tax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketClassification {
    pub category: BracketCategory,
    pub applicable_rate: Decimal,
    pub gross_receipts_tax: Decimal,
}

/// Maps gross annual income to a rate category.
#[derive(Debug, Clone, Copy)]
pub struct BracketClassifier<'a> {
    params: &'a FiscalParameters,
}

impl<'a> BracketClassifier<'a> {
    pub fn new(params: &'a FiscalParameters) -> Self {
        Self { params }
    }

    /// Picks the bracket for `income`. Total over all incomes.
    pub fn category_for(
        &self,
        income: Decimal,
    ) -> BracketCategory {
        if income <= self.params.reduced_bracket_ceiling {
            BracketCategory::Reduced
        } else if income > self.params.increased_bracket_floor {
            BracketCategory::Increased
        } else {
            BracketCategory::General
        }
    }

    /// Classifies the input's income and applies the matching caller rate.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError::Overflow`] when the tax does not fit in a
    /// [`Decimal`].
    pub fn classify(
        &self,
        input: &TaxpayerInput,
    ) -> Result<BracketClassification, InvalidInputError> {
        let category = self.category_for(input.gross_annual_income);
        let applicable_rate = rate_for(category, input);
        let gross_receipts_tax = percent_of(input.gross_annual_income, applicable_rate).ok_or(
            InvalidInputError::Overflow {
                field: "gross receipts tax",
            },
        )?;

        debug!(
            income = %input.gross_annual_income,
            bracket = %category,
            rate = %applicable_rate,
            tax = %gross_receipts_tax,
            "classified gross receipts"
        );

        Ok(BracketClassification {
            category,
            applicable_rate,
            gross_receipts_tax,
        })
    }
}

/// The caller-supplied rate for a bracket.
pub fn rate_for(
    category: BracketCategory,
    input: &TaxpayerInput,
) -> Decimal {
    match category {
        BracketCategory::Reduced => input.reduced_rate,
        BracketCategory::General => input.general_rate,
        BracketCategory::Increased => input.increased_rate,
    }
}
