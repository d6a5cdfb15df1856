//! GICS (Global Industry Classification Standard) sector definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// GICS Level 1 sectors (11 sectors).
///
/// Serialized by display name ("Information Technology"), which is also the
/// key used for sector summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GicsSector {
    /// Information Technology
    #[serde(rename = "Information Technology")]
    InformationTechnology,

    /// Health Care
    #[serde(rename = "Health Care")]
    HealthCare,

    /// Financials
    #[serde(rename = "Financials")]
    Financials,

    /// Consumer Discretionary
    #[serde(rename = "Consumer Discretionary")]
    ConsumerDiscretionary,

    /// Communication Services
    #[serde(rename = "Communication Services")]
    CommunicationServices,

    /// Industrials
    #[serde(rename = "Industrials")]
    Industrials,

    /// Consumer Staples
    #[serde(rename = "Consumer Staples")]
    ConsumerStaples,

    /// Energy
    #[serde(rename = "Energy")]
    Energy,

    /// Utilities
    #[serde(rename = "Utilities")]
    Utilities,

    /// Real Estate
    #[serde(rename = "Real Estate")]
    RealEstate,

    /// Materials
    #[serde(rename = "Materials")]
    Materials,
}

impl GicsSector {
    /// Returns all GICS sectors.
    pub fn all() -> Vec<Self> {
        vec![
            Self::InformationTechnology,
            Self::HealthCare,
            Self::Financials,
            Self::ConsumerDiscretionary,
            Self::CommunicationServices,
            Self::Industrials,
            Self::ConsumerStaples,
            Self::Energy,
            Self::Utilities,
            Self::RealEstate,
            Self::Materials,
        ]
    }

    /// Returns the sector code (2-digit).
    pub const fn code(&self) -> u8 {
        match self {
            Self::Energy => 10,
            Self::Materials => 15,
            Self::Industrials => 20,
            Self::ConsumerDiscretionary => 25,
            Self::ConsumerStaples => 30,
            Self::HealthCare => 35,
            Self::Financials => 40,
            Self::InformationTechnology => 45,
            Self::CommunicationServices => 50,
            Self::Utilities => 55,
            Self::RealEstate => 60,
        }
    }

    /// Returns the full sector name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::InformationTechnology => "Information Technology",
            Self::HealthCare => "Health Care",
            Self::Financials => "Financials",
            Self::ConsumerDiscretionary => "Consumer Discretionary",
            Self::CommunicationServices => "Communication Services",
            Self::Industrials => "Industrials",
            Self::ConsumerStaples => "Consumer Staples",
            Self::Energy => "Energy",
            Self::Utilities => "Utilities",
            Self::RealEstate => "Real Estate",
            Self::Materials => "Materials",
        }
    }

    /// Parse a sector from its code.
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            10 => Some(Self::Energy),
            15 => Some(Self::Materials),
            20 => Some(Self::Industrials),
            25 => Some(Self::ConsumerDiscretionary),
            30 => Some(Self::ConsumerStaples),
            35 => Some(Self::HealthCare),
            40 => Some(Self::Financials),
            45 => Some(Self::InformationTechnology),
            50 => Some(Self::CommunicationServices),
            55 => Some(Self::Utilities),
            60 => Some(Self::RealEstate),
            _ => None,
        }
    }

    /// Parse a sector from a provider label.
    ///
    /// Matching ignores case, spaces, `&` and `-`, and accepts the short labels
    /// data vendors commonly use ("Technology", "Healthcare", "Telecom").
    pub fn from_name(label: &str) -> Option<Self> {
        let key: String = label
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match key.as_str() {
            "informationtechnology" | "technology" | "tech" | "it" => {
                Some(Self::InformationTechnology)
            }
            "healthcare" | "health" => Some(Self::HealthCare),
            "financials" | "financial" | "financialservices" => Some(Self::Financials),
            "consumerdiscretionary" | "consumercyclical" => Some(Self::ConsumerDiscretionary),
            "communicationservices" | "communication" | "telecom" | "telecommunications" => {
                Some(Self::CommunicationServices)
            }
            "industrials" | "industrial" => Some(Self::Industrials),
            "consumerstaples" | "consumerdefensive" => Some(Self::ConsumerStaples),
            "energy" => Some(Self::Energy),
            "utilities" | "utility" => Some(Self::Utilities),
            "realestate" => Some(Self::RealEstate),
            "materials" | "basicmaterials" => Some(Self::Materials),
            _ => None,
        }
    }
}

impl fmt::Display for GicsSector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for GicsSector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| format!("unknown GICS sector: {s}"))
    }
}
