//! Rendering of fee quotes for the terminal and for CSV export.

use std::io;

use clap::ValueEnum;
use notary_core::FeeQuote;
use notary_core::calculations::common::round_half_up;
use rust_decimal::Decimal;
use serde::Serialize;

const DISCLAIMER: &str = "*This calculator gives estimates based on current regulations. \
Final fees may vary. Please consult your notary.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
}

/// Formats an amount with two decimals and the euro sign, e.g. `168.80 €`.
pub fn money(value: Decimal) -> String {
    format!("{:.2} €", round_half_up(value))
}

/// Renders a quote as the itemised breakdown shown to the user.
///
/// A quote with nothing to charge renders as an empty string.
pub fn render_text(quote: &FeeQuote) -> String {
    if quote.is_empty() {
        return String::new();
    }

    let lines = [
        ("Notary fee:".to_string(), quote.notary_fee),
        (format!("Folios ({}):", quote.folios), quote.folios_cost),
        (
            format!("Simple copies ({}):", quote.simple_copies),
            quote.simple_copies_cost,
        ),
        (
            format!("Authorized copies ({}):", quote.authorized_copies),
            quote.authorized_copies_cost,
        ),
    ];

    let row = |label: &str, value: Decimal| format!("  {label:<26}{:>14}\n", money(value));
    let rule = format!("  {}\n", "-".repeat(40));

    let mut out = format!("Result - {}\n", quote.display_name);
    for (label, value) in &lines {
        out.push_str(&row(label.as_str(), *value));
    }
    out.push_str(&rule);
    out.push_str(&row("Subtotal:", quote.subtotal));
    out.push_str(&row("IVA (21%):", quote.iva));
    out.push_str(&rule);
    out.push_str(&row("Total:", quote.total));
    out.push('\n');
    out.push_str(DISCLAIMER);
    out.push('\n');

    out
}

/// One CSV output line; money columns are fixed to two decimals.
#[derive(Debug, Serialize)]
struct QuoteRow<'a> {
    document_type: &'a str,
    display_name: &'a str,
    amount: String,
    notary_fee: String,
    folios: u32,
    folios_cost: String,
    simple_copies: u32,
    simple_copies_cost: String,
    authorized_copies: u32,
    authorized_copies_cost: String,
    subtotal: String,
    iva: String,
    total: String,
}

impl<'a> From<&'a FeeQuote> for QuoteRow<'a> {
    fn from(quote: &'a FeeQuote) -> Self {
        let cents = |value: Decimal| format!("{:.2}", round_half_up(value));

        Self {
            document_type: quote.document_type.as_str(),
            display_name: &quote.display_name,
            amount: cents(quote.amount),
            notary_fee: cents(quote.notary_fee),
            folios: quote.folios,
            folios_cost: cents(quote.folios_cost),
            simple_copies: quote.simple_copies,
            simple_copies_cost: cents(quote.simple_copies_cost),
            authorized_copies: quote.authorized_copies,
            authorized_copies_cost: cents(quote.authorized_copies_cost),
            subtotal: cents(quote.subtotal),
            iva: cents(quote.iva),
            total: cents(quote.total),
        }
    }
}

/// Writes quotes as CSV with a header row.
pub fn write_csv<'a, I, W>(
    quotes: I,
    writer: W,
) -> Result<(), csv::Error>
where
    I: IntoIterator<Item = &'a FeeQuote>,
    W: io::Write,
{
    let mut wtr = csv::Writer::from_writer(writer);
    for quote in quotes {
        wtr.serialize(QuoteRow::from(quote))?;
    }
    wtr.flush()?;
    Ok(())
}
