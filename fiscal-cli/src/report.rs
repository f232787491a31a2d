//! Rendering of calculation results for the terminal.
//!
//! The text report has five sections: totals summary, gross-receipts
//! detail, compliance benefits, recommendations and a per-tax comparison
//! table. Amounts are rounded half-up to cents for display only.

use std::fmt::{self, Write};

use fiscal_core::calculations::common::{format_currency, round_half_up};
use fiscal_core::{CalculationResult, FiscalParameters, TaxpayerInput};
use rust_decimal::Decimal;
use serde::Serialize;

/// One labelled scenario with its outcome, as emitted in JSON output.
#[derive(Debug, Serialize)]
pub struct ScenarioReport<'a> {
    pub label: &'a str,
    pub tax_year: i32,
    pub input: &'a TaxpayerInput,
    pub result: &'a CalculationResult,
}

fn percent(rate: Decimal) -> String {
    format!("{:.2}%", round_half_up(rate))
}

fn fraction_as_percent(fraction: Decimal) -> String {
    percent(fraction * Decimal::ONE_HUNDRED)
}

/// Renders the full text report for one scenario.
pub fn render_text(
    report: &ScenarioReport<'_>,
    params: &FiscalParameters,
) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_report(&mut out, report, params);
    out
}

/// Renders the unoptimized-versus-optimized table with a totals row.
pub fn render_comparison(result: &CalculationResult) -> String {
    let mut out = String::new();
    let _ = write_comparison(&mut out, result);
    out
}

/// Renders the effective parameter set.
pub fn render_params_text(params: &FiscalParameters) -> String {
    let mut out = String::new();
    let _ = write_params(&mut out, params);
    out
}

fn write_report(
    out: &mut impl Write,
    report: &ScenarioReport<'_>,
    params: &FiscalParameters,
) -> fmt::Result {
    let ScenarioReport {
        label,
        tax_year,
        input,
        result,
    } = report;

    writeln!(out, "== Fiscal projection: {label} (tax year {tax_year}) ==")?;
    writeln!(out)?;

    writeln!(out, "Summary")?;
    writeln!(
        out,
        "  Total burden (unoptimized):  {}",
        format_currency(result.total_unoptimized)
    )?;
    writeln!(
        out,
        "  Total burden (optimized):    {}  (-{})",
        format_currency(result.total_optimized),
        format_currency(result.total_discount)
    )?;
    writeln!(out)?;

    writeln!(out, "1. Gross receipts tax (IIBB)")?;
    writeln!(
        out,
        "  Projected annual income:     {}",
        format_currency(input.gross_annual_income)
    )?;
    writeln!(
        out,
        "  Bracket:                     {}",
        result.bracket.describe(params)
    )?;
    writeln!(
        out,
        "  Applicable rate:             {}",
        percent(result.applicable_rate)
    )?;
    writeln!(
        out,
        "  Estimated annual IIBB:       {}",
        format_currency(result.gross_receipts_tax)
    )?;
    writeln!(out)?;

    writeln!(out, "2. Compliance benefits")?;
    if input.is_compliant() {
        writeln!(
            out,
            "  Property tax savings:        {}",
            format_currency(result.property_discount)
        )?;
        writeln!(
            out,
            "  Vehicle tax savings:         {}",
            format_currency(result.vehicle_discount)
        )?;
        writeln!(
            out,
            "  Total savings:               {}",
            format_currency(result.total_discount)
        )?;
    } else {
        writeln!(out, "  Overdue debt: compliance discounts do not apply.")?;
        writeln!(
            out,
            "  Opportunity cost:            {}  (at {} combined discount)",
            format_currency(result.potential_discount),
            fraction_as_percent(result.combined_discount_rate)
        )?;
    }
    writeln!(out)?;

    writeln!(out, "Recommendations")?;
    for advisory in &result.advisories {
        writeln!(out, "  - {advisory}")?;
    }
    writeln!(out)?;

    write_comparison(out, result)
}

fn write_comparison(
    out: &mut impl Write,
    result: &CalculationResult,
) -> fmt::Result {
    writeln!(out, "Comparison")?;
    writeln!(out, "  {:<10}{:>20}{:>20}", "Tax", "Unoptimized", "Optimized")?;
    for row in result.breakdown() {
        writeln!(
            out,
            "  {:<10}{:>20}{:>20}",
            row.tax.label(),
            format_currency(row.unoptimized),
            format_currency(row.optimized)
        )?;
    }
    writeln!(
        out,
        "  {:<10}{:>20}{:>20}",
        "Total",
        format_currency(result.total_unoptimized),
        format_currency(result.total_optimized)
    )
}

fn write_params(
    out: &mut impl Write,
    params: &FiscalParameters,
) -> fmt::Result {
    writeln!(out, "Fiscal parameters for tax year {}", params.tax_year)?;
    writeln!(
        out,
        "  Reduced rate ceiling:        {}",
        format_currency(params.reduced_bracket_ceiling)
    )?;
    writeln!(
        out,
        "  Increased rate floor:        {}",
        format_currency(params.increased_bracket_floor)
    )?;
    writeln!(
        out,
        "  Current-year compliance:     {}",
        fraction_as_percent(params.current_year_compliance_discount)
    )?;
    writeln!(
        out,
        "  Prior-year compliance:       {}",
        fraction_as_percent(params.prior_year_compliance_discount)
    )?;
    writeln!(
        out,
        "  Annual payment:              {}",
        fraction_as_percent(params.annual_payment_discount)
    )?;
    writeln!(
        out,
        "  Combined discount:           {}",
        fraction_as_percent(params.combined_discount_rate())
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use fiscal_core::FiscalCalculator;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn scenario_a() -> TaxpayerInput {
        TaxpayerInput {
            gross_annual_income: dec!(400000000),
            reduced_rate: dec!(3),
            general_rate: dec!(4),
            increased_rate: dec!(5),
            property_tax: dec!(500000),
            vehicle_tax: dec!(300000),
            has_overdue_debt: false,
        }
    }

    fn render(input: &TaxpayerInput) -> String {
        let params = FiscalParameters::default();
        let result = FiscalCalculator::new(params.clone())
            .unwrap()
            .calculate(input)
            .unwrap();
        let report = ScenarioReport {
            label: "shop",
            tax_year: params.tax_year,
            input,
            result: &result,
        };
        render_text(&report, &params)
    }

    #[test]
    fn comparison_table_for_compliant_taxpayer() {
        let result = FiscalCalculator::default()
            .calculate(&scenario_a())
            .unwrap();

        let expected = [
            "Comparison",
            "  Tax                Unoptimized           Optimized",
            "  IIBB            $12,000,000.00      $12,000,000.00",
            "  Property           $500,000.00         $375,000.00",
            "  Vehicle            $300,000.00         $225,000.00",
            "  Total           $12,800,000.00      $12,600,000.00",
        ]
        .join("\n")
            + "\n";

        assert_eq!(render_comparison(&result), expected);
    }

    #[test]
    fn text_report_has_all_sections_in_order() {
        let text = render(&scenario_a());

        let positions: Vec<usize> = [
            "== Fiscal projection: shop (tax year 2026) ==",
            "Summary",
            "1. Gross receipts tax (IIBB)",
            "2. Compliance benefits",
            "Recommendations",
            "Comparison",
        ]
        .iter()
        .map(|heading| {
            text.find(heading)
                .unwrap_or_else(|| panic!("missing heading '{heading}' in:\n{text}"))
        })
        .collect();

        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn text_report_compliant_details() {
        let text = render(&scenario_a());

        assert!(text.contains("  Total burden (optimized):    $12,600,000.00  (-$200,000.00)\n"));
        assert!(text.contains("  Bracket:                     Reduced rate (up to $450,000,000)\n"));
        assert!(text.contains("  Applicable rate:             3.00%\n"));
        assert!(text.contains("  Total savings:               $200,000.00\n"));
        assert!(text.contains("  - IIBB: Your income places you clearly within your current bracket."));
        assert!(text.contains("  - COMPLIANCE: Congratulations!"));
    }

    #[test]
    fn text_report_overdue_debt_shows_opportunity_cost() {
        let input = TaxpayerInput {
            has_overdue_debt: true,
            ..scenario_a()
        };

        let text = render(&input);

        assert!(text.contains("  Overdue debt: compliance discounts do not apply.\n"));
        assert!(text.contains("  Opportunity cost:            $200,000.00  (at 25.00% combined discount)\n"));
        assert!(text.contains("  Total burden (optimized):    $12,800,000.00  (-$0.00)\n"));
        assert!(!text.contains("Total savings"));
    }

    #[test]
    fn params_text_lists_thresholds_and_discounts() {
        let text = render_params_text(&FiscalParameters::default());

        let expected = [
            "Fiscal parameters for tax year 2026",
            "  Reduced rate ceiling:        $450,000,000.00",
            "  Increased rate floor:        $4,500,000,000.00",
            "  Current-year compliance:     10.00%",
            "  Prior-year compliance:       10.00%",
            "  Annual payment:              5.00%",
            "  Combined discount:           25.00%",
        ]
        .join("\n")
            + "\n";

        assert_eq!(text, expected);
    }

    #[test]
    fn scenario_report_serializes_input_and_result() {
        let input = scenario_a();
        let result = FiscalCalculator::default().calculate(&input).unwrap();
        let report = ScenarioReport {
            label: "shop",
            tax_year: 2026,
            input: &input,
            result: &result,
        };

        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["label"], "shop");
        assert_eq!(value["tax_year"], 2026);
        assert_eq!(value["result"]["bracket"], "reduced");
        assert_eq!(value["result"]["advisories"][1]["kind"], "keep_compliant");
        assert_eq!(value["input"]["has_overdue_debt"], false);
    }
}
