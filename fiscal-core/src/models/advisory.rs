use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::{format_currency, format_whole_currency};

/// Which rule produced an [`Advisory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvisoryTopic {
    GrossReceipts,
    Compliance,
}

impl AdvisoryTopic {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GrossReceipts => "IIBB",
            Self::Compliance => "COMPLIANCE",
        }
    }
}

/// A piece of guidance derived from bracket proximity or compliance state.
///
/// Each calculation yields exactly one gross-receipts advisory followed by
/// exactly one compliance advisory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Advisory {
    /// Income sits just above the reduced-rate ceiling.
    NearReducedCeiling {
        ceiling: Decimal,
        marginal_cost: Decimal,
    },

    /// Income sits just above the increased-rate floor.
    NearIncreasedFloor {
        floor: Decimal,
        marginal_cost: Decimal,
    },

    /// Income is comfortably inside its bracket.
    StableBracket,

    /// Overdue debt blocks the compliance discounts.
    RegularizeDebt { foregone_savings: Decimal },

    /// Compliant; keep paying annually to preserve the discounts.
    KeepCompliant,
}

impl Advisory {
    pub fn topic(&self) -> AdvisoryTopic {
        match self {
            Self::NearReducedCeiling { .. } | Self::NearIncreasedFloor { .. } | Self::StableBracket => {
                AdvisoryTopic::GrossReceipts
            }
            Self::RegularizeDebt { .. } | Self::KeepCompliant => AdvisoryTopic::Compliance,
        }
    }

    /// Extra gross-receipts tax attached to a proximity advisory, if any.
    pub fn marginal_cost(&self) -> Option<Decimal> {
        match self {
            Self::NearReducedCeiling { marginal_cost, .. }
            | Self::NearIncreasedFloor { marginal_cost, .. } => Some(*marginal_cost),
            _ => None,
        }
    }
}

impl fmt::Display for Advisory {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}: ", self.topic().as_str())?;
        match self {
            Self::NearReducedCeiling {
                ceiling,
                marginal_cost,
            } => write!(
                f,
                "You are close to losing the reduced rate. Going over {} costs you an extra {}. \
                 Consider deferring invoicing if possible.",
                format_whole_currency(*ceiling),
                format_currency(*marginal_cost)
            ),
            Self::NearIncreasedFloor {
                floor,
                marginal_cost,
            } => write!(
                f,
                "Careful, you are close to the increased rate. Going over {} costs you an extra {}. \
                 This is a critical point for tax planning.",
                format_whole_currency(*floor),
                format_currency(*marginal_cost)
            ),
            Self::StableBracket => f.write_str(
                "Your income places you clearly within your current bracket. \
                 Keep an eye on year-end invoicing.",
            ),
            Self::RegularizeDebt { foregone_savings } => write!(
                f,
                "The most important step is to regularize your debt. Doing so would let you \
                 save {} on your other taxes.",
                format_currency(*foregone_savings)
            ),
            Self::KeepCompliant => f.write_str(
                "Congratulations! Staying up to date is the most profitable strategy. \
                 Make sure to choose the annual payment to maximize your discounts.",
            ),
        }
    }
}
