//! Rounding and percentage helpers shared by the fee calculations.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a euro amount to cents, taking exact half cents upward.
///
/// Fees, IVA and totals all pass through here before they are shown.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use notary_core::calculations::common::round_half_up;
///
/// // IVA on a 139.50 subtotal is 29.295
/// assert_eq!(round_half_up(dec!(29.295)), dec!(29.30));
/// assert_eq!(round_half_up(dec!(168.795)), dec!(168.80));
/// assert_eq!(round_half_up(dec!(90.0000025)), dec!(90.00));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Applies a percentage expressed on the 0-100 scale.
pub fn percent_of(
    value: Decimal,
    rate: Decimal,
) -> Decimal {
    value * rate / Decimal::ONE_HUNDRED
}
