use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const LOCALE_TH: &str = "th";
pub const LOCALE_EN: &str = "en";

/// Display language. Passed explicitly to every function that renders text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Th,
    En,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::Th, Locale::En];

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Th => LOCALE_TH,
            Locale::En => LOCALE_EN,
        }
    }

    /// Unit printed after monetary amounts.
    pub fn currency_unit(&self) -> &'static str {
        match self {
            Locale::Th => "บาท",
            Locale::En => "USD",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            LOCALE_TH => Ok(Locale::Th),
            LOCALE_EN => Ok(Locale::En),
            _ => Err(format!("Unsupported locale: {}", s)),
        }
    }
}
