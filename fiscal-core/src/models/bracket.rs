use std::fmt;

use serde::{Deserialize, Serialize};

use crate::FiscalParameters;
use crate::calculations::common::format_whole_currency;

/// Gross-receipts rate category selected from annual income.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BracketCategory {
    Reduced,
    General,
    Increased,
}

impl BracketCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reduced => "reduced",
            Self::General => "general",
            Self::Increased => "increased",
        }
    }

    /// Human-readable label including the threshold that defines the bracket.
    ///
    /// ```
    /// use fiscal_core::{BracketCategory, FiscalParameters};
    ///
    /// let params = FiscalParameters::default();
    ///
    /// assert_eq!(
    ///     BracketCategory::Reduced.describe(&params),
    ///     "Reduced rate (up to $450,000,000)"
    /// );
    /// ```
    pub fn describe(
        &self,
        params: &FiscalParameters,
    ) -> String {
        match self {
            Self::Reduced => format!(
                "Reduced rate (up to {})",
                format_whole_currency(params.reduced_bracket_ceiling)
            ),
            Self::General => "General rate".to_string(),
            Self::Increased => format!(
                "Increased rate (above {})",
                format_whole_currency(params.increased_bracket_floor)
            ),
        }
    }
}

impl fmt::Display for BracketCategory {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
