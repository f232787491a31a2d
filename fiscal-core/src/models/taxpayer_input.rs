use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The only error a calculation can raise: a negative amount or rate, or
/// figures too large for exact decimal arithmetic.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidInputError {
    /// A currency amount (income or one of the ancillary taxes) is negative.
    #[error("{field} must be non-negative, got {value}")]
    NegativeAmount { field: &'static str, value: Decimal },

    /// One of the gross-receipts rates is negative.
    #[error("{field} must be non-negative, got {value}")]
    NegativeRate { field: &'static str, value: Decimal },

    /// A derived amount does not fit in a `Decimal`.
    #[error("{field} is too large to compute")]
    Overflow { field: &'static str },
}

/// One taxpayer's projected figures for the year.
///
/// Rates are percentages (`3` means 3%), amounts are flat currency units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxpayerInput {
    /// Projected gross annual income subject to the gross-receipts tax.
    pub gross_annual_income: Decimal,

    /// Rate applied when income falls in the reduced bracket.
    pub reduced_rate: Decimal,

    /// Rate applied between the reduced ceiling and the increased floor.
    pub general_rate: Decimal,

    /// Rate applied above the increased floor.
    pub increased_rate: Decimal,

    /// Annual property tax before any discount.
    pub property_tax: Decimal,

    /// Annual vehicle tax before any discount.
    pub vehicle_tax: Decimal,

    /// Whether the taxpayer carries overdue debt. Disqualifies every discount.
    pub has_overdue_debt: bool,
}

impl Default for TaxpayerInput {
    fn default() -> Self {
        Self {
            gross_annual_income: Decimal::from(400_000_000_u64),
            reduced_rate: Decimal::from(3),
            general_rate: Decimal::from(4),
            increased_rate: Decimal::from(5),
            property_tax: Decimal::from(500_000),
            vehicle_tax: Decimal::from(300_000),
            has_overdue_debt: false,
        }
    }
}

impl TaxpayerInput {
    /// Whether the taxpayer qualifies for the compliance discounts.
    pub fn is_compliant(&self) -> bool {
        !self.has_overdue_debt
    }

    /// Rejects negative amounts and rates, reporting the first offender.
    ///
    /// Amounts are checked before rates, each in declaration order.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError`] naming the offending field.
    pub fn validate(&self) -> Result<(), InvalidInputError> {
        let amounts = [
            ("gross annual income", self.gross_annual_income),
            ("property tax", self.property_tax),
            ("vehicle tax", self.vehicle_tax),
        ];
        if let Some((field, value)) = amounts.into_iter().find(|(_, v)| *v < Decimal::ZERO) {
            return Err(InvalidInputError::NegativeAmount { field, value });
        }

        let rates = [
            ("reduced rate", self.reduced_rate),
            ("general rate", self.general_rate),
            ("increased rate", self.increased_rate),
        ];
        if let Some((field, value)) = rates.into_iter().find(|(_, v)| *v < Decimal::ZERO) {
            return Err(InvalidInputError::NegativeRate { field, value });
        }

        Ok(())
    }
}
