//! Progressive notarial fee calculation.
//!
//! The fee starts from the first tier's base fee. Every tier the amount
//! passes through adds its marginal rate on the whole width of the tier, and
//! the tier containing the amount adds its rate on the part above the
//! previous limit. Upper limits are inclusive: an amount equal to a limit is
//! charged at that tier's own rate. A tier without a rate adds nothing, which
//! is how flat fees are expressed.
//!
//! Later tiers' base fees are the published reference figures and are not
//! read by the walk.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use notary_core::{DocumentType, calculate_notary_fee};
//!
//! // 90 + (30000 - 6000) * 0.45%
//! assert_eq!(calculate_notary_fee(DocumentType::Sale, dec!(30000)), dec!(198.00));
//! assert_eq!(calculate_notary_fee(DocumentType::PowerOfAttorney, dec!(0)), dec!(60.00));
//! ```

use rust_decimal::Decimal;
use tracing::trace;

use crate::brackets::brackets_for;
use crate::calculations::common::{percent_of, round_half_up};
use crate::{CalculationBracket, DocumentType};

/// Calculates the base notarial fee for a deed of the given type and value.
///
/// Non-positive amounts produce no fee for every document type whose fee
/// depends on the amount. Flat-fee types ignore the amount entirely.
pub fn calculate_notary_fee(
    doc_type: DocumentType,
    amount: Decimal,
) -> Decimal {
    if amount <= Decimal::ZERO && doc_type.requires_amount() {
        return Decimal::ZERO;
    }

    let fee = walk_schedule(brackets_for(doc_type), amount);
    trace!(%doc_type, %amount, %fee, "computed notary fee");

    round_half_up(fee)
}

/// Returns the unrounded fee for `amount` under `brackets`.
///
/// Yields the accumulated fee of the bounded tiers if none contains the
/// amount, which a schedule that passes
/// [`validate_schedule`](crate::validate_schedule) rules out.
fn walk_schedule(
    brackets: &[CalculationBracket],
    amount: Decimal,
) -> Decimal {
    let Some(first) = brackets.first() else {
        return Decimal::ZERO;
    };

    let mut fee = first.base_fee;
    let mut last_limit = Decimal::ZERO;

    for bracket in brackets {
        let rate = bracket.marginal_rate.unwrap_or(Decimal::ZERO);

        if bracket.contains(amount) {
            return fee + percent_of(amount - last_limit, rate);
        }

        if let Some(upper_limit) = bracket.upper_limit {
            fee += percent_of(upper_limit - last_limit, rate);
            last_limit = upper_limit;
        }
    }

    fee
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    const VALUE_BASED: [DocumentType; 6] = [
        DocumentType::Sale,
        DocumentType::Mortgage,
        DocumentType::MortgageCancellation,
        DocumentType::Donation,
        DocumentType::Inheritance,
        DocumentType::CompanyIncorporation,
    ];

    // =========================================================================
    // non-positive amount tests
    // =========================================================================

    #[test]
    fn zero_amount_yields_no_fee() {
        for doc_type in VALUE_BASED {
            assert_eq!(
                calculate_notary_fee(doc_type, dec!(0)),
                Decimal::ZERO,
                "{doc_type}"
            );
        }
    }

    #[test]
    fn negative_amount_yields_no_fee() {
        for doc_type in VALUE_BASED {
            assert_eq!(
                calculate_notary_fee(doc_type, dec!(-5)),
                Decimal::ZERO,
                "{doc_type}"
            );
        }
    }

    // =========================================================================
    // general schedule tests
    // =========================================================================

    #[test]
    fn first_tier_is_flat() {
        assert_eq!(calculate_notary_fee(DocumentType::Sale, dec!(1)), dec!(90.00));
        assert_eq!(calculate_notary_fee(DocumentType::Sale, dec!(6000)), dec!(90.00));
    }

    #[test]
    fn sale_fees_at_tier_limits() {
        let cases = [
            (dec!(30000), dec!(198.00)),
            (dec!(60000), dec!(288.00)),
            (dec!(150000), dec!(468.00)),
            (dec!(600000), dec!(918.00)),
        ];

        for (amount, expected) in cases {
            assert_eq!(
                calculate_notary_fee(DocumentType::Sale, amount),
                expected,
                "amount {amount}"
            );
        }
    }

    #[test]
    fn sale_fee_inside_a_tier() {
        // 288 + (100000 - 60000) * 0.2%
        assert_eq!(calculate_notary_fee(DocumentType::Sale, dec!(100000)), dec!(368.00));
    }

    #[test]
    fn sale_fee_in_unbounded_tier() {
        // 3618 + (10000000 - 6000000) * 0.025%
        assert_eq!(
            calculate_notary_fee(DocumentType::Sale, dec!(10000000)),
            dec!(4618.00)
        );
    }

    #[test]
    fn sale_fee_continues_past_top_limit() {
        assert_eq!(
            calculate_notary_fee(DocumentType::Sale, dec!(6000000)),
            dec!(3618.00)
        );
        assert_eq!(
            calculate_notary_fee(DocumentType::Sale, dec!(6000000.01)),
            dec!(3618.00)
        );
        assert_eq!(
            calculate_notary_fee(DocumentType::Sale, dec!(6004000)),
            dec!(3619.00)
        );
    }

    #[test]
    fn just_above_a_limit_uses_next_tier() {
        // 90 + 0.01 * 0.45%, rounded
        assert_eq!(
            calculate_notary_fee(DocumentType::Sale, dec!(6000.01)),
            dec!(90.00)
        );
        // 198 + 1000 * 0.3%
        assert_eq!(
            calculate_notary_fee(DocumentType::Sale, dec!(31000)),
            dec!(201.00)
        );
    }

    #[test]
    fn all_value_based_types_but_cancellation_share_fees() {
        for doc_type in [
            DocumentType::Mortgage,
            DocumentType::Donation,
            DocumentType::Inheritance,
            DocumentType::CompanyIncorporation,
        ] {
            assert_eq!(calculate_notary_fee(doc_type, dec!(30000)), dec!(198.00));
        }
    }

    // =========================================================================
    // mortgage cancellation tests
    // =========================================================================

    #[test]
    fn mortgage_cancellation_first_tier() {
        assert_eq!(
            calculate_notary_fee(DocumentType::MortgageCancellation, dec!(6000)),
            dec!(60.00)
        );
    }

    #[test]
    fn mortgage_cancellation_reduced_rates() {
        let cases = [
            (dec!(30000), dec!(144.00)),
            (dec!(60000), dec!(204.00)),
            (dec!(150000), dec!(339.00)),
            (dec!(200000), dec!(376.50)),
            (dec!(600000), dec!(676.50)),
            (dec!(6000000), dec!(2296.50)),
        ];

        for (amount, expected) in cases {
            assert_eq!(
                calculate_notary_fee(DocumentType::MortgageCancellation, amount),
                expected,
                "amount {amount}"
            );
        }
    }

    // =========================================================================
    // flat fee tests
    // =========================================================================

    #[test]
    fn power_of_attorney_is_flat_for_any_amount() {
        for amount in [dec!(-100), dec!(0), dec!(1), dec!(150000), dec!(99999999)] {
            assert_eq!(
                calculate_notary_fee(DocumentType::PowerOfAttorney, amount),
                dec!(60.00),
                "amount {amount}"
            );
        }
    }

    // =========================================================================
    // walk_schedule tests
    // =========================================================================

    fn progressive_schedule() -> Vec<CalculationBracket> {
        vec![
            CalculationBracket {
                upper_limit: Some(dec!(1000)),
                base_fee: dec!(10),
                marginal_rate: Some(dec!(1)),
            },
            CalculationBracket {
                upper_limit: Some(dec!(5000)),
                base_fee: dec!(20),
                marginal_rate: Some(dec!(0.5)),
            },
            CalculationBracket {
                upper_limit: None,
                base_fee: dec!(40),
                marginal_rate: Some(dec!(0.1)),
            },
        ]
    }

    #[test]
    fn walk_charges_partial_first_tier() {
        // 10 + 500 * 1%
        assert_eq!(walk_schedule(&progressive_schedule(), dec!(500)), dec!(15));
    }

    #[test]
    fn walk_uses_own_rate_at_inclusive_limit() {
        // 10 + 1000 * 1%, not 20 + 0 * 0.5%
        assert_eq!(walk_schedule(&progressive_schedule(), dec!(1000)), dec!(20));
    }

    #[test]
    fn walk_measures_marginal_part_from_previous_limit() {
        // 20 + (3000 - 1000) * 0.5%
        assert_eq!(walk_schedule(&progressive_schedule(), dec!(3000)), dec!(30));
    }

    #[test]
    fn walk_reaches_unbounded_tier() {
        // 40 + (10000 - 5000) * 0.1%
        assert_eq!(walk_schedule(&progressive_schedule(), dec!(10000)), dec!(45));
    }

    #[test]
    fn walk_ignores_base_fees_after_the_first() {
        let mut schedule = progressive_schedule();
        schedule[2].base_fee = dec!(1);

        // 10 + 1000 * 1% + 4000 * 0.5% + 5000 * 0.1%
        assert_eq!(walk_schedule(&schedule, dec!(10000)), dec!(45));
    }

    #[test]
    fn walk_over_empty_schedule_is_zero() {
        assert_eq!(walk_schedule(&[], dec!(10000)), Decimal::ZERO);
    }

    #[test]
    fn rounding_applies_once_to_the_result() {
        let schedule = [CalculationBracket {
            upper_limit: None,
            base_fee: dec!(0),
            marginal_rate: Some(dec!(0.025)),
        }];

        assert_eq!(walk_schedule(&schedule, dec!(123.45)), dec!(0.0308625));
        assert_eq!(round_half_up(walk_schedule(&schedule, dec!(123.45))), dec!(0.03));
    }
}
