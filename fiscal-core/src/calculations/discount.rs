//! Compliance discounts on the property and vehicle taxes.
//!
//! Compliance is all-or-nothing: a taxpayer without overdue debt gets the
//! current-year, prior-year and annual-payment discounts together, applied
//! to each tax independently. Overdue debt zeroes both discounts. Having no
//! overdue debt stands in for all three prerequisites; they are not checked
//! one by one.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{FiscalParameters, InvalidInputError, TaxpayerInput};

/// Discounts granted on the two ancillary taxes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceDiscounts {
    /// Combined discount fraction from the parameters.
    pub combined_rate: Decimal,
    pub property_discount: Decimal,
    pub vehicle_discount: Decimal,
    /// What the discounts would amount to for a compliant taxpayer.
    pub potential_discount: Decimal,
}

impl ComplianceDiscounts {
    pub fn total(&self) -> Decimal {
        self.property_discount + self.vehicle_discount
    }
}

/// Computes compliance-based discounts.
#[derive(Debug, Clone, Copy)]
pub struct DiscountEvaluator<'a> {
    params: &'a FiscalParameters,
}

impl<'a> DiscountEvaluator<'a> {
    pub fn new(params: &'a FiscalParameters) -> Self {
        Self { params }
    }

    /// # Errors
    ///
    /// Returns [`InvalidInputError::Overflow`] when a discount does not fit in
    /// a [`Decimal`].
    pub fn evaluate(
        &self,
        input: &TaxpayerInput,
    ) -> Result<ComplianceDiscounts, InvalidInputError> {
        let combined_rate = self.params.combined_discount_rate();
        let potential_property = discount_on(input.property_tax, combined_rate, "property discount")?;
        let potential_vehicle = discount_on(input.vehicle_tax, combined_rate, "vehicle discount")?;
        let potential_discount = potential_property
            .checked_add(potential_vehicle)
            .ok_or(InvalidInputError::Overflow {
                field: "potential discount",
            })?;

        let (property_discount, vehicle_discount) = if input.is_compliant() {
            (potential_property, potential_vehicle)
        } else {
            debug!(
                potential_discount = %potential_discount,
                "overdue debt disqualifies compliance discounts"
            );
            (Decimal::ZERO, Decimal::ZERO)
        };

        debug!(
            combined_rate = %combined_rate,
            property_discount = %property_discount,
            vehicle_discount = %vehicle_discount,
            "evaluated compliance discounts"
        );

        Ok(ComplianceDiscounts {
            combined_rate,
            property_discount,
            vehicle_discount,
            potential_discount,
        })
    }
}

fn discount_on(
    base_amount: Decimal,
    combined_rate: Decimal,
    field: &'static str,
) -> Result<Decimal, InvalidInputError> {
    base_amount
        .checked_mul(combined_rate)
        .ok_or(InvalidInputError::Overflow { field })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn input(
        property_tax: Decimal,
        vehicle_tax: Decimal,
        has_overdue_debt: bool,
    ) -> TaxpayerInput {
        TaxpayerInput {
            property_tax,
            vehicle_tax,
            has_overdue_debt,
            ..TaxpayerInput::default()
        }
    }

    #[test]
    fn compliant_taxpayer_gets_combined_discount() {
        let params = FiscalParameters::default();
        let evaluator = DiscountEvaluator::new(&params);

        let discounts = evaluator.evaluate(&input(dec!(500000), dec!(300000), false)).unwrap();

        assert_eq!(discounts.combined_rate, dec!(0.25));
        assert_eq!(discounts.property_discount, dec!(125000));
        assert_eq!(discounts.vehicle_discount, dec!(75000));
        assert_eq!(discounts.total(), dec!(200000));
    }

    #[test]
    fn overdue_debt_zeroes_both_discounts() {
        let params = FiscalParameters::default();
        let evaluator = DiscountEvaluator::new(&params);

        let discounts = evaluator.evaluate(&input(dec!(500000), dec!(300000), true)).unwrap();

        assert_eq!(discounts.property_discount, dec!(0));
        assert_eq!(discounts.vehicle_discount, dec!(0));
        assert_eq!(discounts.total(), dec!(0));
    }

    #[test]
    fn potential_discount_is_reported_regardless_of_debt() {
        let params = FiscalParameters::default();
        let evaluator = DiscountEvaluator::new(&params);

        let compliant = evaluator.evaluate(&input(dec!(500000), dec!(300000), false)).unwrap();
        let indebted = evaluator.evaluate(&input(dec!(500000), dec!(300000), true)).unwrap();

        assert_eq!(compliant.potential_discount, dec!(200000));
        assert_eq!(indebted.potential_discount, dec!(200000));
    }

    #[test]
    fn discounts_apply_to_each_tax_independently() {
        let params = FiscalParameters::default();
        let evaluator = DiscountEvaluator::new(&params);

        let discounts = evaluator.evaluate(&input(dec!(0), dec!(1000), false)).unwrap();

        assert_eq!(discounts.property_discount, dec!(0));
        assert_eq!(discounts.vehicle_discount, dec!(250));
    }

    #[test]
    fn potential_discount_overflow_is_reported() {
        let params = FiscalParameters {
            current_year_compliance_discount: dec!(1),
            prior_year_compliance_discount: dec!(0),
            annual_payment_discount: dec!(0),
            ..FiscalParameters::default()
        };
        let evaluator = DiscountEvaluator::new(&params);

        let result = evaluator.evaluate(&input(Decimal::MAX, Decimal::MAX, false));

        assert_eq!(
            result,
            Err(InvalidInputError::Overflow {
                field: "potential discount",
            })
        );
    }

    #[test]
    fn custom_discount_fractions_are_summed() {
        let params = FiscalParameters {
            current_year_compliance_discount: dec!(0.05),
            prior_year_compliance_discount: dec!(0.03),
            annual_payment_discount: dec!(0.02),
            ..FiscalParameters::default()
        };
        let evaluator = DiscountEvaluator::new(&params);

        let discounts = evaluator.evaluate(&input(dec!(1000), dec!(2000), false)).unwrap();

        assert_eq!(discounts.combined_rate, dec!(0.10));
        assert_eq!(discounts.property_discount, dec!(100));
        assert_eq!(discounts.vehicle_discount, dec!(200));
    }
}
