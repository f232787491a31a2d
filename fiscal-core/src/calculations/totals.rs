//! Totals before and after the compliance discounts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::discount::ComplianceDiscounts;
use crate::{InvalidInputError, TaxpayerInput};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub optimized_property_tax: Decimal,
    pub optimized_vehicle_tax: Decimal,
    pub total_discount: Decimal,
    pub total_unoptimized: Decimal,
    pub total_optimized: Decimal,
}

/// Sums the three taxes with and without discounts. Pure addition, no rounding.
#[derive(Debug, Clone, Copy, Default)]
pub struct TotalsAggregator;

impl TotalsAggregator {
    /// # Errors
    ///
    /// Returns [`InvalidInputError::Overflow`] when a total does not fit in a
    /// [`Decimal`].
    pub fn aggregate(
        &self,
        gross_receipts_tax: Decimal,
        input: &TaxpayerInput,
        discounts: &ComplianceDiscounts,
    ) -> Result<Totals, InvalidInputError> {
        let optimized_property_tax = input.property_tax - discounts.property_discount;
        let optimized_vehicle_tax = input.vehicle_tax - discounts.vehicle_discount;

        let totals = Totals {
            optimized_property_tax,
            optimized_vehicle_tax,
            total_discount: discounts.total(),
            total_unoptimized: sum(
                [gross_receipts_tax, input.property_tax, input.vehicle_tax],
                "total unoptimized",
            )?,
            total_optimized: sum(
                [gross_receipts_tax, optimized_property_tax, optimized_vehicle_tax],
                "total optimized",
            )?,
        };

        debug!(
            total_unoptimized = %totals.total_unoptimized,
            total_optimized = %totals.total_optimized,
            total_discount = %totals.total_discount,
            "aggregated totals"
        );

        Ok(totals)
    }
}

fn sum(
    amounts: [Decimal; 3],
    field: &'static str,
) -> Result<Decimal, InvalidInputError> {
    amounts
        .into_iter()
        .try_fold(Decimal::ZERO, Decimal::checked_add)
        .ok_or(InvalidInputError::Overflow { field })
}
