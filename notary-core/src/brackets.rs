//! Notarial fee schedules, approximating the tariff of Real Decreto 1426/1989.
//!
//! Each [`DocumentType`] maps to one ordered list of [`CalculationBracket`]s.
//! Deeds with a transaction value share the general schedule, mortgage
//! cancellations have a reduced one, and powers of attorney are flat.
//!
//! | Upper limit | General fee | General rate | Cancellation fee | Cancellation rate |
//! |-------------|-------------|--------------|------------------|-------------------|
//! | 6,000       | 90          | -            | 60               | -                 |
//! | 30,000      | 90          | 0.45%        | 60               | 0.35%             |
//! | 60,000      | 198         | 0.3%         | 144              | 0.2%              |
//! | 150,000     | 288         | 0.2%         | 204              | 0.15%             |
//! | 600,000     | 468         | 0.1%         | 339              | 0.075%            |
//! | 6,000,000   | 918         | 0.05%        | 674              | 0.03%             |
//! | unbounded   | 3,168       | 0.025%       | 2,234            | 0.02%             |
//!
//! Base fees after the first tier are kept as published. The fee engine
//! accumulates tier rates from the first base fee instead of reading them.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use thiserror::Error;

use crate::{CalculationBracket, DocumentType};

/// Price of each folio (sheet) of the deed.
pub const FOLIO_PRICE: Decimal = dec!(3.00);

/// Price of each simple (unauthenticated) copy.
pub const SIMPLE_COPY_PRICE: Decimal = dec!(3.50);

/// Price of each authorized copy.
pub const AUTHORIZED_COPY_PRICE: Decimal = dec!(6.00);

/// IVA rate applied to the subtotal.
pub const IVA_RATE: Decimal = dec!(0.21);

const fn bracket(
    upper_limit: Option<Decimal>,
    base_fee: Decimal,
    marginal_rate: Option<Decimal>,
) -> CalculationBracket {
    CalculationBracket {
        upper_limit,
        base_fee,
        marginal_rate,
    }
}

static GENERAL_SCHEDULE: [CalculationBracket; 7] = [
    bracket(Some(dec!(6000)), dec!(90), None),
    bracket(Some(dec!(30000)), dec!(90), Some(dec!(0.45))),
    bracket(Some(dec!(60000)), dec!(198), Some(dec!(0.3))),
    bracket(Some(dec!(150000)), dec!(288), Some(dec!(0.2))),
    bracket(Some(dec!(600000)), dec!(468), Some(dec!(0.1))),
    bracket(Some(dec!(6000000)), dec!(918), Some(dec!(0.05))),
    bracket(None, dec!(3168), Some(dec!(0.025))),
];

static MORTGAGE_CANCELLATION_SCHEDULE: [CalculationBracket; 7] = [
    bracket(Some(dec!(6000)), dec!(60), None),
    bracket(Some(dec!(30000)), dec!(60), Some(dec!(0.35))),
    bracket(Some(dec!(60000)), dec!(144), Some(dec!(0.2))),
    bracket(Some(dec!(150000)), dec!(204), Some(dec!(0.15))),
    bracket(Some(dec!(600000)), dec!(339), Some(dec!(0.075))),
    bracket(Some(dec!(6000000)), dec!(674), Some(dec!(0.03))),
    bracket(None, dec!(2234), Some(dec!(0.02))),
];

static POWER_OF_ATTORNEY_SCHEDULE: [CalculationBracket; 1] = [bracket(None, dec!(60), None)];

/// Returns the fee schedule for a document type, ordered by upper limit.
pub fn brackets_for(doc_type: DocumentType) -> &'static [CalculationBracket] {
    match doc_type {
        DocumentType::Sale
        | DocumentType::Mortgage
        | DocumentType::Donation
        | DocumentType::Inheritance
        | DocumentType::CompanyIncorporation => &GENERAL_SCHEDULE,
        DocumentType::MortgageCancellation => &MORTGAGE_CANCELLATION_SCHEDULE,
        DocumentType::PowerOfAttorney => &POWER_OF_ATTORNEY_SCHEDULE,
    }
}

/// Ways a fee schedule can violate the ordering rules the fee engine relies on.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BracketScheduleError {
    /// The schedule has no brackets at all.
    #[error("fee schedule has no brackets")]
    Empty,

    /// The last bracket must be unbounded so every amount is covered.
    #[error("last bracket must be unbounded")]
    BoundedLastBracket,

    /// Only the last bracket may be unbounded.
    #[error("bracket {index} is unbounded but is not the last bracket")]
    UnboundedBeforeEnd { index: usize },

    /// Upper limits must be positive and strictly increasing.
    #[error("bracket {index} upper limit {limit} does not exceed the previous limit {previous}")]
    NonIncreasingLimit {
        index: usize,
        limit: Decimal,
        previous: Decimal,
    },

    /// Marginal rates are percentages and must lie in [0, 100].
    #[error("bracket {index} marginal rate must be between 0 and 100, got {rate}")]
    InvalidRate { index: usize, rate: Decimal },

    /// Base fees cannot be negative.
    #[error("bracket {index} base fee must be non-negative, got {fee}")]
    NegativeBaseFee { index: usize, fee: Decimal },
}

/// Checks that a schedule is well-formed.
///
/// # Errors
///
/// Returns [`BracketScheduleError`] if:
/// - the schedule is empty
/// - any bracket other than the last is unbounded, or the last is bounded
/// - upper limits are not strictly increasing from zero
/// - a marginal rate is outside [0, 100]
/// - a base fee is negative
pub fn validate_schedule(brackets: &[CalculationBracket]) -> Result<(), BracketScheduleError> {
    let last_index = brackets
        .len()
        .checked_sub(1)
        .ok_or(BracketScheduleError::Empty)?;

    let mut previous = Decimal::ZERO;
    for (index, bracket) in brackets.iter().enumerate() {
        if bracket.base_fee < Decimal::ZERO {
            return Err(BracketScheduleError::NegativeBaseFee {
                index,
                fee: bracket.base_fee,
            });
        }

        if let Some(rate) = bracket.marginal_rate {
            if rate < Decimal::ZERO || rate > Decimal::ONE_HUNDRED {
                return Err(BracketScheduleError::InvalidRate { index, rate });
            }
        }

        match bracket.upper_limit {
            Some(limit) if limit <= previous => {
                return Err(BracketScheduleError::NonIncreasingLimit {
                    index,
                    limit,
                    previous,
                });
            }
            Some(limit) => previous = limit,
            None if index != last_index => {
                return Err(BracketScheduleError::UnboundedBeforeEnd { index });
            }
            None => {}
        }
    }

    if brackets[last_index].upper_limit.is_some() {
        return Err(BracketScheduleError::BoundedLastBracket);
    }

    Ok(())
}
