//! CSV batch input for pricing many deeds at once.
//!
//! ## CSV Format
//!
//! Headers are matched by name, so column order does not matter.
//!
//! | Column              | Required | Type    | Notes                                        |
//! |---------------------|----------|---------|----------------------------------------------|
//! | `document_type`     | yes      | string  | e.g. `sale`, `mortgage-cancellation`, `poderes` |
//! | `amount`            | no       | decimal | Required unless the type is a power of attorney |
//! | `folios`            | no       | integer | Empty cell uses the configured default       |
//! | `simple_copies`     | no       | integer | Empty cell uses the configured default       |
//! | `authorized_copies` | no       | integer | Empty cell uses the configured default       |
//!
//! ### Example
//!
//! ```csv
//! document_type,amount,folios,simple_copies,authorized_copies
//! sale,150000,12,2,1
//! power-of-attorney,,4,,
//! ```

use std::path::Path;

use notary_core::{DocumentType, FeeQuote, QuoteQuantities, quote};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;

use crate::config::QuantityDefaults;
use crate::input::{AmountInputError, resolve_amount};

#[derive(Debug, Deserialize)]
struct CsvRow {
    document_type: String,
    amount: Option<String>,
    folios: Option<u32>,
    simple_copies: Option<u32>,
    authorized_copies: Option<u32>,
}

/// A validated request to price one deed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRequest {
    pub document_type: DocumentType,
    pub amount: Decimal,
    pub quantities: QuoteQuantities,
}

impl QuoteRequest {
    pub fn quote(&self) -> FeeQuote {
        quote(self.document_type, self.amount, self.quantities)
    }
}

/// Errors that can occur while loading batch input.
#[derive(Debug, thiserror::Error)]
pub enum BatchLoadError {
    #[error("cannot read batch file: {0}")]
    Io(#[from] std::io::Error),

    /// Structurally invalid CSV, a missing column or a non-integer quantity.
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// `row` is 1-based, counting data rows only.
    #[error("unrecognised document type '{value}' on row {row}")]
    InvalidDocumentType { value: String, row: usize },

    #[error("invalid amount on row {row}: {source}")]
    InvalidAmount {
        row: usize,
        #[source]
        source: AmountInputError,
    },
}

fn convert_row(
    row: CsvRow,
    row_number: usize,
    defaults: &QuantityDefaults,
) -> Result<QuoteRequest, BatchLoadError> {
    let document_type = DocumentType::parse(&row.document_type).ok_or_else(|| {
        BatchLoadError::InvalidDocumentType {
            value: row.document_type.clone(),
            row: row_number,
        }
    })?;

    let amount = resolve_amount(document_type, row.amount.as_deref()).map_err(|source| {
        BatchLoadError::InvalidAmount {
            row: row_number,
            source,
        }
    })?;

    Ok(QuoteRequest {
        document_type,
        amount,
        quantities: defaults.resolve(row.folios, row.simple_copies, row.authorized_copies),
    })
}

/// Parses batch CSV text into quote requests, in file order.
///
/// # Errors
///
/// * [`BatchLoadError::Parse`] if the CSV is malformed or a column cannot be
///   deserialised.
/// * [`BatchLoadError::InvalidDocumentType`] / [`BatchLoadError::InvalidAmount`]
///   for the first row that fails validation.
pub fn load_from_str(
    input: &str,
    defaults: &QuantityDefaults,
) -> Result<Vec<QuoteRequest>, BatchLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input.as_bytes());

    let requests = reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, result)| convert_row(result?, idx + 1, defaults))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(count = requests.len(), "loaded batch requests");
    Ok(requests)
}

/// Reads a file from disk and delegates to [`load_from_str`].
pub fn load_from_file(
    path: &Path,
    defaults: &QuantityDefaults,
) -> Result<Vec<QuoteRequest>, BatchLoadError> {
    let contents = std::fs::read_to_string(path)?;
    load_from_str(&contents, defaults)
}
