use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::DocumentType;

/// Quantities of ancillary documents produced alongside the deed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteQuantities {
    pub folios: u32,
    pub simple_copies: u32,
    pub authorized_copies: u32,
}

/// Itemised fee estimate for a single deed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeQuote {
    pub document_type: DocumentType,
    pub display_name: String,
    /// Transaction amount the fee was computed from (zero for flat-fee deeds).
    pub amount: Decimal,
    pub notary_fee: Decimal,

    pub folios: u32,
    pub folios_cost: Decimal,
    pub simple_copies: u32,
    pub simple_copies_cost: Decimal,
    pub authorized_copies: u32,
    pub authorized_copies_cost: Decimal,

    // Calculated totals
    pub subtotal: Decimal,
    pub iva: Decimal,
    pub total: Decimal,
}

impl FeeQuote {
    /// True when nothing at all would be charged.
    pub fn is_empty(&self) -> bool {
        self.notary_fee.is_zero()
            && self.folios_cost.is_zero()
            && self.simple_copies_cost.is_zero()
            && self.authorized_copies_cost.is_zero()
    }
}
