pub mod brackets;
pub mod calculations;
pub mod models;

pub use brackets::{BracketScheduleError, brackets_for, validate_schedule};
pub use calculations::{
    AncillaryCosts, calculate_authorized_copies_cost, calculate_folios_cost, calculate_iva,
    calculate_notary_fee, calculate_simple_copies_cost, calculate_total, quote,
};
pub use models::*;
