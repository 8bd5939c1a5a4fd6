//! Linear costs for the documents produced alongside a deed.
//!
//! These are deliberately left unrounded; rounding happens once, when the
//! total is assembled.

use rust_decimal::Decimal;

use crate::brackets::{AUTHORIZED_COPY_PRICE, FOLIO_PRICE, SIMPLE_COPY_PRICE};

/// Cost of `folios` sheets of the deed.
pub fn calculate_folios_cost(folios: u32) -> Decimal {
    Decimal::from(folios) * FOLIO_PRICE
}

/// Cost of `copies` simple copies.
pub fn calculate_simple_copies_cost(copies: u32) -> Decimal {
    Decimal::from(copies) * SIMPLE_COPY_PRICE
}

/// Cost of `copies` authorized copies.
pub fn calculate_authorized_copies_cost(copies: u32) -> Decimal {
    Decimal::from(copies) * AUTHORIZED_COPY_PRICE
}
