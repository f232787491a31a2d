use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Advisory, BracketCategory};

/// The three taxes a projection covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxKind {
    GrossReceipts,
    Property,
    Vehicle,
}

impl TaxKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::GrossReceipts => "IIBB",
            Self::Property => "Property",
            Self::Vehicle => "Vehicle",
        }
    }
}

/// One row of the unoptimized-versus-optimized comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub tax: TaxKind,
    pub unoptimized: Decimal,
    pub optimized: Decimal,
}

/// Complete outcome of one fiscal projection.
///
/// No field is rounded; round for display only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub bracket: BracketCategory,

    /// Percentage rate picked for the bracket.
    pub applicable_rate: Decimal,

    /// `gross_annual_income * applicable_rate / 100`.
    pub gross_receipts_tax: Decimal,

    /// Sum of the three compliance discounts from the parameters.
    pub combined_discount_rate: Decimal,

    pub property_discount: Decimal,
    pub vehicle_discount: Decimal,
    pub optimized_property_tax: Decimal,
    pub optimized_vehicle_tax: Decimal,

    /// `property_discount + vehicle_discount`; zero with overdue debt.
    pub total_discount: Decimal,

    /// The discount the taxpayer would get if compliant, whatever their
    /// actual standing.
    pub potential_discount: Decimal,

    pub total_unoptimized: Decimal,
    pub total_optimized: Decimal,

    /// Gross-receipts advisory first, compliance advisory second.
    pub advisories: Vec<Advisory>,
}

impl CalculationResult {
    /// Per-tax amounts before and after the compliance discounts.
    pub fn breakdown(&self) -> Vec<ComparisonRow> {
        vec![
            ComparisonRow {
                tax: TaxKind::GrossReceipts,
                unoptimized: self.gross_receipts_tax,
                optimized: self.gross_receipts_tax,
            },
            ComparisonRow {
                tax: TaxKind::Property,
                unoptimized: self.optimized_property_tax + self.property_discount,
                optimized: self.optimized_property_tax,
            },
            ComparisonRow {
                tax: TaxKind::Vehicle,
                unoptimized: self.optimized_vehicle_tax + self.vehicle_discount,
                optimized: self.optimized_vehicle_tax,
            },
        ]
    }
}
