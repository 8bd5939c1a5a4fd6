mod calculation_bracket;
mod document_type;
mod fee_quote;

pub use calculation_bracket::CalculationBracket;
pub use document_type::{DocumentType, ParseDocumentTypeError};
pub use fee_quote::{FeeQuote, QuoteQuantities};
