//! Message template records
//!
//! Context for the client-communication templates. Pure input to string
//! interpolation; the engine does not validate field values, and empty
//! strings are inserted verbatim (presentation concern, not engine logic).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The four fixed communication styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateStyle {
    /// Thank-you framing around the price news, warm register
    Sandwich,
    /// Formal register for business-like client relationships
    Official,
    /// Short and colloquial
    Casual,
    /// Premium-positioning register with scarcity framing
    Vip,
}

/// Unknown template key at the string boundary
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown template style: {0}")]
pub struct ParseTemplateStyleError(pub String);

impl FromStr for TemplateStyle {
    type Err = ParseTemplateStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sandwich" => Ok(TemplateStyle::Sandwich),
            "official" => Ok(TemplateStyle::Official),
            "casual" => Ok(TemplateStyle::Casual),
            "vip" => Ok(TemplateStyle::Vip),
            other => Err(ParseTemplateStyleError(other.to_string())),
        }
    }
}

impl fmt::Display for TemplateStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TemplateStyle::Sandwich => "sandwich",
            TemplateStyle::Official => "official",
            TemplateStyle::Casual => "casual",
            TemplateStyle::Vip => "vip",
        })
    }
}

/// Fields substituted into every template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageContext {
    pub client_name: String,
    /// Price before the change, PLN
    pub old_price: f64,
    /// Price after the change, PLN; typically `SimulationResult.new_price`
    pub new_price: f64,
    /// Label of the package the price applies to, e.g. "pakiet 8 treningów"
    pub package_label: String,
    /// Date the new price takes effect for new clients
    pub effective_date_new_clients: String,
    /// Later date the new price takes effect for existing clients
    pub effective_date_existing_clients: String,
}
