//! Advisory rules.
//!
//! Two independent rules run on every calculation:
//!
//! - **Bracket proximity**: income inside the band just above the reduced
//!   ceiling or the increased floor (strictly between the threshold and 110%
//!   of it) produces a warning quoting the extra tax paid at the higher rate.
//!   Anything else is reported as stable. Exactly one advisory.
//! - **Compliance**: overdue debt produces a call to regularize, quoting the
//!   calculation's total discount as the savings at stake. A compliant
//!   taxpayer is told to keep paying annually. Exactly one advisory.

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::common::percent_of;
use crate::{Advisory, FiscalParameters, InvalidInputError, TaxpayerInput};

/// Width of the proximity band above each threshold, as a multiplier (110%).
pub const PROXIMITY_BAND: Decimal = Decimal::from_parts(11, 0, 0, false, 1);

/// Derives guidance from threshold proximity and compliance state.
#[derive(Debug, Clone, Copy)]
pub struct RecommendationAdvisor<'a> {
    params: &'a FiscalParameters,
}

impl<'a> RecommendationAdvisor<'a> {
    pub fn new(params: &'a FiscalParameters) -> Self {
        Self { params }
    }

    /// Returns the gross-receipts advisory followed by the compliance advisory.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError::Overflow`] when the marginal cost of a
    /// nearby bracket does not fit in a [`Decimal`].
    pub fn advise(
        &self,
        input: &TaxpayerInput,
        total_discount: Decimal,
    ) -> Result<Vec<Advisory>, InvalidInputError> {
        let advisories = vec![
            self.bracket_proximity(input)?,
            self.compliance(input, total_discount),
        ];

        debug!(?advisories, "derived advisories");
        Ok(advisories)
    }

    fn bracket_proximity(
        &self,
        input: &TaxpayerInput,
    ) -> Result<Advisory, InvalidInputError> {
        let income = input.gross_annual_income;
        let ceiling = self.params.reduced_bracket_ceiling;
        let floor = self.params.increased_bracket_floor;

        let advisory = if within_band(income, ceiling) {
            Advisory::NearReducedCeiling {
                ceiling,
                marginal_cost: marginal_cost(income, input.general_rate - input.reduced_rate)?,
            }
        } else if within_band(income, floor) {
            Advisory::NearIncreasedFloor {
                floor,
                marginal_cost: marginal_cost(income, input.increased_rate - input.general_rate)?,
            }
        } else {
            Advisory::StableBracket
        };
        Ok(advisory)
    }

    fn compliance(
        &self,
        input: &TaxpayerInput,
        total_discount: Decimal,
    ) -> Advisory {
        if input.is_compliant() {
            Advisory::KeepCompliant
        } else {
            Advisory::RegularizeDebt {
                foregone_savings: total_discount,
            }
        }
    }
}

fn marginal_cost(
    income: Decimal,
    rate_gap: Decimal,
) -> Result<Decimal, InvalidInputError> {
    percent_of(income, rate_gap).ok_or(InvalidInputError::Overflow {
        field: "marginal cost",
    })
}

/// `threshold < income < threshold * 1.1`. A band whose top lies past
/// `Decimal::MAX` has no upper bound.
fn within_band(
    income: Decimal,
    threshold: Decimal,
) -> bool {
    threshold < income
        && threshold
            .checked_mul(PROXIMITY_BAND)
            .is_none_or(|upper| income < upper)
}
