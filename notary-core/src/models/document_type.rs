use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a string does not name a known [`DocumentType`].
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown document type '{0}'")]
pub struct ParseDocumentTypeError(pub String);

/// The kinds of notarial deed the calculator can price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentType {
    Sale,
    Mortgage,
    MortgageCancellation,
    Donation,
    Inheritance,
    PowerOfAttorney,
    CompanyIncorporation,
}

impl DocumentType {
    /// Every document type, in the order a selection list shows them.
    pub const ALL: [DocumentType; 7] = [
        DocumentType::Sale,
        DocumentType::Mortgage,
        DocumentType::MortgageCancellation,
        DocumentType::Donation,
        DocumentType::Inheritance,
        DocumentType::PowerOfAttorney,
        DocumentType::CompanyIncorporation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sale => "sale",
            Self::Mortgage => "mortgage",
            Self::MortgageCancellation => "mortgage-cancellation",
            Self::Donation => "donation",
            Self::Inheritance => "inheritance",
            Self::PowerOfAttorney => "power-of-attorney",
            Self::CompanyIncorporation => "company-incorporation",
        }
    }

    /// Human-readable name shown to the user.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Sale => "Compraventa",
            Self::Mortgage => "Hipoteca",
            Self::MortgageCancellation => "Cancelación de Hipoteca",
            Self::Donation => "Donación",
            Self::Inheritance => "Herencia",
            Self::PowerOfAttorney => "Poderes",
            Self::CompanyIncorporation => "Constitución de Sociedades",
        }
    }

    /// Whether the fee depends on a transaction amount.
    ///
    /// Powers of attorney carry a flat fee, so callers never ask for an
    /// amount and pass zero instead.
    pub fn requires_amount(&self) -> bool {
        !matches!(self, Self::PowerOfAttorney)
    }

    /// Parses either the kebab-case identifier or the Spanish key used by
    /// the notarial tariff (`compraventa`, `poderes`, ...). Case-insensitive.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "sale" | "compraventa" => Some(Self::Sale),
            "mortgage" | "hipoteca" => Some(Self::Mortgage),
            "mortgage-cancellation" | "cancelacionhipoteca" => Some(Self::MortgageCancellation),
            "donation" | "donacion" => Some(Self::Donation),
            "inheritance" | "herencia" => Some(Self::Inheritance),
            "power-of-attorney" | "poderes" => Some(Self::PowerOfAttorney),
            "company-incorporation" | "sociedades" => Some(Self::CompanyIncorporation),
            _ => None,
        }
    }
}

impl FromStr for DocumentType {
    type Err = ParseDocumentTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseDocumentTypeError(s.to_string()))
    }
}

impl fmt::Display for DocumentType {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
