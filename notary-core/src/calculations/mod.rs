//! Fee calculations for notarial deeds.
//!
//! The fee engine walks a [`CalculationBracket`](crate::CalculationBracket)
//! schedule; the remaining functions price ancillary documents, apply IVA and
//! assemble an itemised [`FeeQuote`](crate::FeeQuote).

pub mod ancillary;
pub mod common;
pub mod fee;
pub mod quote;
pub mod tax;

pub use ancillary::{
    calculate_authorized_copies_cost, calculate_folios_cost, calculate_simple_copies_cost,
};
pub use fee::calculate_notary_fee;
pub use quote::quote;
pub use tax::{AncillaryCosts, calculate_iva, calculate_total};
