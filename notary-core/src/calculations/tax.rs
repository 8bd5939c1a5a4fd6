//! IVA and grand-total calculations.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::brackets::IVA_RATE;
use crate::calculations::common::round_half_up;

/// Monetary costs of the ancillary documents, added to the notary fee before tax.
///
/// The default is all zero, which prices the fee on its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AncillaryCosts {
    pub folios: Decimal,
    pub simple_copies: Decimal,
    pub authorized_copies: Decimal,
}

impl AncillaryCosts {
    /// Sum of all ancillary costs, unrounded.
    pub fn sum(&self) -> Decimal {
        self.folios + self.simple_copies + self.authorized_copies
    }
}

/// IVA at 21% on `base`, rounded to cents.
pub fn calculate_iva(base: Decimal) -> Decimal {
    round_half_up(base * IVA_RATE)
}

/// Notary fee plus ancillary costs plus IVA on that subtotal.
///
/// The subtotal itself is not rounded; only the tax and the final amount are.
pub fn calculate_total(
    notary_fee: Decimal,
    ancillary: &AncillaryCosts,
) -> Decimal {
    let subtotal = notary_fee + ancillary.sum();
    let iva = calculate_iva(subtotal);
    round_half_up(subtotal + iva)
}
