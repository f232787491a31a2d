//! Integration tests that load the bundled fixtures and run them through the
//! calculator.

use std::path::PathBuf;

use fiscal_core::{Advisory, BracketCategory, FiscalCalculator, FiscalParameters};
use fiscal_data::{inputs, parameters};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

const SCENARIOS_CSV: &str = include_str!("../test-data/scenarios.csv");

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test-data")
        .join(name)
}

#[test]
fn test_load_fixture_scenarios_from_str() {
    let scenarios = inputs::load_from_str(SCENARIOS_CSV).expect("fixture CSV should parse");

    let labels: Vec<&str> = scenarios.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["compliant shop", "shop with debt", "near ceiling", "distributor"]
    );
}

#[test]
fn test_fixture_scenarios_with_default_parameters() {
    let scenarios =
        inputs::load_from_file(&fixture("scenarios.csv")).expect("fixture CSV should load");
    let calculator = FiscalCalculator::default();

    let totals: Vec<_> = scenarios
        .iter()
        .map(|s| {
            let result = calculator.calculate(&s.input).expect("fixture input is valid");
            (s.label.as_str(), result.bracket, result.total_optimized)
        })
        .collect();

    assert_eq!(
        totals,
        vec![
            ("compliant shop", BracketCategory::Reduced, dec!(12600000)),
            ("shop with debt", BracketCategory::Reduced, dec!(12800000)),
            ("near ceiling", BracketCategory::General, dec!(19000000)),
            ("distributor", BracketCategory::Increased, dec!(251500000)),
        ]
    );
}

#[test]
fn test_fixture_parameters_load() {
    let params =
        parameters::load_from_file(&fixture("params_2027.toml")).expect("fixture TOML should load");

    assert_eq!(
        params,
        FiscalParameters {
            tax_year: 2027,
            reduced_bracket_ceiling: dec!(500000000),
            increased_bracket_floor: dec!(5000000000),
            current_year_compliance_discount: dec!(0.10),
            prior_year_compliance_discount: dec!(0.10),
            annual_payment_discount: dec!(0.10),
        }
    );
}

#[test]
fn test_fixture_scenarios_with_custom_parameters() {
    let params =
        parameters::load_from_file(&fixture("params_2027.toml")).expect("fixture TOML should load");
    let calculator = FiscalCalculator::new(params).unwrap();
    let scenarios = inputs::load_from_str(SCENARIOS_CSV).expect("fixture CSV should parse");

    let compliant = calculator.calculate(&scenarios[0].input).unwrap();
    assert_eq!(compliant.total_discount, dec!(240000));
    assert_eq!(compliant.total_optimized, dec!(12560000));

    // 460M sits below the raised ceiling, so no proximity warning.
    let near = calculator.calculate(&scenarios[2].input).unwrap();
    assert_eq!(near.bracket, BracketCategory::Reduced);
    assert_eq!(near.gross_receipts_tax, dec!(13800000));
    assert_eq!(near.advisories[0], Advisory::StableBracket);

    // Exactly on the floor stays in the general bracket.
    let distributor = calculator.calculate(&scenarios[3].input).unwrap();
    assert_eq!(distributor.bracket, BracketCategory::General);
    assert_eq!(distributor.gross_receipts_tax, dec!(200000000));
}
