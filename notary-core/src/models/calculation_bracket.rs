use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One tier of a progressive notarial fee schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationBracket {
    /// Inclusive upper bound of the tier. `None` means unbounded.
    pub upper_limit: Option<Decimal>,
    pub base_fee: Decimal,
    /// Percentage (0-100 scale) charged on the part of the amount that
    /// falls inside this tier.
    pub marginal_rate: Option<Decimal>,
}

impl CalculationBracket {
    /// Whether `amount` falls at or below this tier's upper bound.
    pub fn contains(
        &self,
        amount: Decimal,
    ) -> bool {
        self.upper_limit.is_none_or(|limit| amount <= limit)
    }
}
