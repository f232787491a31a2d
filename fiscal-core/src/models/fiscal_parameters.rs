use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when a [`FiscalParameters`] set is internally inconsistent.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FiscalParametersError {
    /// The reduced-rate ceiling must be non-negative.
    #[error("reduced bracket ceiling must be non-negative, got {0}")]
    NegativeReducedCeiling(Decimal),

    /// The reduced-rate ceiling must sit strictly below the increased-rate floor.
    #[error("reduced bracket ceiling {ceiling} must be below increased bracket floor {floor}")]
    InvertedBrackets { ceiling: Decimal, floor: Decimal },

    /// A single discount fraction fell outside [0, 1].
    #[error("{name} discount must be between 0 and 1, got {value}")]
    DiscountOutOfRange { name: &'static str, value: Decimal },

    /// The three discounts together would exceed the taxed amount.
    #[error("combined discount must not exceed 1, got {0}")]
    CombinedDiscountTooLarge(Decimal),
}

/// Thresholds and compliance discounts for one tax year.
///
/// The defaults are the 2026 values: a reduced gross-receipts rate up to
/// $450,000,000 of annual income, an increased rate above $4,500,000,000,
/// and 10% + 10% + 5% off property and vehicle taxes for compliant taxpayers.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use fiscal_core::FiscalParameters;
///
/// let params = FiscalParameters::default();
///
/// assert_eq!(params.reduced_bracket_ceiling, dec!(450000000));
/// assert_eq!(params.combined_discount_rate(), dec!(0.25));
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiscalParameters {
    /// Tax year these parameters belong to. Informational only.
    pub tax_year: i32,

    /// Highest annual income (inclusive) taxed at the reduced rate.
    pub reduced_bracket_ceiling: Decimal,

    /// Annual income above which (exclusive) the increased rate applies.
    pub increased_bracket_floor: Decimal,

    /// Discount for being up to date with the current year.
    pub current_year_compliance_discount: Decimal,

    /// Discount for being up to date with the prior year.
    pub prior_year_compliance_discount: Decimal,

    /// Discount for paying the whole year in a single instalment.
    pub annual_payment_discount: Decimal,
}

impl Default for FiscalParameters {
    fn default() -> Self {
        Self {
            tax_year: 2026,
            reduced_bracket_ceiling: Decimal::from(450_000_000_u64),
            increased_bracket_floor: Decimal::from(4_500_000_000_u64),
            current_year_compliance_discount: Decimal::new(10, 2),
            prior_year_compliance_discount: Decimal::new(10, 2),
            annual_payment_discount: Decimal::new(5, 2),
        }
    }
}

impl FiscalParameters {
    /// Sum of the three compliance discounts.
    pub fn combined_discount_rate(&self) -> Decimal {
        self.current_year_compliance_discount
            + self.prior_year_compliance_discount
            + self.annual_payment_discount
    }

    /// Checks the thresholds are ordered and every discount is a fraction.
    ///
    /// # Errors
    ///
    /// Returns [`FiscalParametersError`] if:
    /// - `reduced_bracket_ceiling` is negative
    /// - `reduced_bracket_ceiling` is not below `increased_bracket_floor`
    /// - any discount is outside [0, 1]
    /// - the combined discount exceeds 1
    pub fn validate(&self) -> Result<(), FiscalParametersError> {
        if self.reduced_bracket_ceiling < Decimal::ZERO {
            return Err(FiscalParametersError::NegativeReducedCeiling(
                self.reduced_bracket_ceiling,
            ));
        }
        if self.reduced_bracket_ceiling >= self.increased_bracket_floor {
            return Err(FiscalParametersError::InvertedBrackets {
                ceiling: self.reduced_bracket_ceiling,
                floor: self.increased_bracket_floor,
            });
        }

        let discounts = [
            ("current year compliance", self.current_year_compliance_discount),
            ("prior year compliance", self.prior_year_compliance_discount),
            ("annual payment", self.annual_payment_discount),
        ];
        for (name, value) in discounts {
            if value < Decimal::ZERO || value > Decimal::ONE {
                return Err(FiscalParametersError::DiscountOutOfRange { name, value });
            }
        }

        let combined = self.combined_discount_rate();
        if combined > Decimal::ONE {
            return Err(FiscalParametersError::CombinedDiscountTooLarge(combined));
        }
        Ok(())
    }
}
