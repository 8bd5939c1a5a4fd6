//! Integration tests that run the batch loader and CSV writer against
//! on-disk fixture files.

use std::path::{Path, PathBuf};

use notary_cli::batch::{self, BatchLoadError};
use notary_cli::config::{Config, QuantityDefaults};
use notary_cli::report;
use notary_core::{DocumentType, FeeQuote};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn load_fixture_quotes(defaults: &QuantityDefaults) -> Vec<FeeQuote> {
    batch::load_from_file(&fixture("sample_requests.csv"), defaults)
        .expect("fixture file should load without error")
        .iter()
        .map(batch::QuoteRequest::quote)
        .collect()
}

#[test]
fn test_load_fixture_file_succeeds() {
    let quotes = load_fixture_quotes(&QuantityDefaults::default());

    assert_eq!(quotes.len(), 3);
}

#[test]
fn test_fixture_sale_row() {
    let quotes = load_fixture_quotes(&QuantityDefaults::default());
    let q = &quotes[0];

    assert_eq!(q.document_type, DocumentType::Sale);
    assert_eq!(q.notary_fee, dec!(468.00));
    assert_eq!(q.subtotal, dec!(507.50));
    assert_eq!(q.iva, dec!(106.58));
    assert_eq!(q.total, dec!(614.08));
}

#[test]
fn test_fixture_power_of_attorney_row() {
    let quotes = load_fixture_quotes(&QuantityDefaults::default());
    let q = &quotes[1];

    assert_eq!(q.document_type, DocumentType::PowerOfAttorney);
    assert_eq!(q.notary_fee, dec!(60.00));
    // 60 + 4 * 3 + 6 = 78, IVA 16.38
    assert_eq!(q.subtotal, dec!(78.00));
    assert_eq!(q.total, dec!(94.38));
}

#[test]
fn test_fixture_cancellation_row_uses_config_defaults() {
    let config = Config::load(&fixture("notary.toml")).expect("fixture config should load");
    let quotes = load_fixture_quotes(&config.defaults);
    let q = &quotes[2];

    assert_eq!(q.document_type, DocumentType::MortgageCancellation);
    assert_eq!(q.amount, dec!(60000));
    assert_eq!(q.notary_fee, dec!(204.00));
    assert_eq!((q.folios, q.simple_copies, q.authorized_copies), (20, 2, 0));
    // 204 + 60 + 7 = 271, IVA 56.91
    assert_eq!(q.subtotal, dec!(271.00));
    assert_eq!(q.iva, dec!(56.91));
    assert_eq!(q.total, dec!(327.91));
}

#[test]
fn test_fixture_config_values() {
    let config = Config::load(&fixture("notary.toml")).unwrap();

    assert_eq!(config.log_level, "warn");
    assert_eq!(
        config.defaults,
        QuantityDefaults {
            folios: 20,
            simple_copies: 2,
            authorized_copies: 0,
        }
    );
}

#[test]
fn test_fixture_round_trips_to_csv_output() {
    let quotes = load_fixture_quotes(&QuantityDefaults::default());
    let mut buffer = Vec::new();

    report::write_csv(&quotes, &mut buffer).unwrap();

    let output = String::from_utf8(buffer).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(
        lines[2],
        "power-of-attorney,Poderes,0.00,60.00,4,12.00,0,0.00,1,6.00,78.00,16.38,94.38"
    );
}

#[test]
fn test_load_nonexistent_file_returns_err() {
    let result = batch::load_from_file(
        Path::new("/this/path/does/not/exist.csv"),
        &QuantityDefaults::default(),
    );

    assert!(matches!(result, Err(BatchLoadError::Io(_))));
}
