//! Itemised fee estimates.

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::ancillary::{
    calculate_authorized_copies_cost, calculate_folios_cost, calculate_simple_copies_cost,
};
use crate::calculations::fee::calculate_notary_fee;
use crate::calculations::tax::{AncillaryCosts, calculate_iva, calculate_total};
use crate::{DocumentType, FeeQuote, QuoteQuantities};

/// Prices a deed and its ancillary documents, returning every line of the estimate.
///
/// Flat-fee document types ignore `amount` and record it as zero. The
/// subtotal is left unrounded; IVA and the total are rounded to cents.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use notary_core::{DocumentType, QuoteQuantities, quote};
///
/// let quantities = QuoteQuantities {
///     folios: 10,
///     simple_copies: 1,
///     authorized_copies: 1,
/// };
///
/// let estimate = quote(DocumentType::Sale, dec!(150000), quantities);
///
/// assert_eq!(estimate.notary_fee, dec!(468.00));
/// assert_eq!(estimate.subtotal, dec!(507.50));
/// assert_eq!(estimate.iva, dec!(106.58));
/// assert_eq!(estimate.total, dec!(614.08));
/// ```
pub fn quote(
    doc_type: DocumentType,
    amount: Decimal,
    quantities: QuoteQuantities,
) -> FeeQuote {
    let amount = if doc_type.requires_amount() {
        amount
    } else {
        Decimal::ZERO
    };

    let notary_fee = calculate_notary_fee(doc_type, amount);
    let ancillary = AncillaryCosts {
        folios: calculate_folios_cost(quantities.folios),
        simple_copies: calculate_simple_copies_cost(quantities.simple_copies),
        authorized_copies: calculate_authorized_copies_cost(quantities.authorized_copies),
    };

    let subtotal = notary_fee + ancillary.sum();
    let iva = calculate_iva(subtotal);
    let total = calculate_total(notary_fee, &ancillary);

    debug!(%doc_type, %amount, %notary_fee, %subtotal, %iva, %total, "quoted deed");

    FeeQuote {
        document_type: doc_type,
        display_name: doc_type.display_name().to_string(),
        amount,
        notary_fee,
        folios: quantities.folios,
        folios_cost: ancillary.folios,
        simple_copies: quantities.simple_copies,
        simple_copies_cost: ancillary.simple_copies,
        authorized_copies: quantities.authorized_copies,
        authorized_copies_cost: ancillary.authorized_copies,
        subtotal,
        iva,
        total,
    }
}
