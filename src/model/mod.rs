use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Last-read location for a single book.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PositionRecord {
    /// The last-viewed page number, as supplied by the host.
    pub page: i64,
    /// Milliseconds since epoch at save time. Informational only.
    pub timestamp: u64,
}

/// Every saved position, keyed by book slug. At most one record per slug;
/// the newest save wins and no history is kept.
pub type PositionMap = HashMap<String, PositionRecord>;

/// The reader's font size preference.
///
/// Medium is the default and is represented by absence: it stores as the
/// string `"medium"` but carries no body class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl FontSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            FontSize::Small => "small",
            FontSize::Medium => "medium",
            FontSize::Large => "large",
        }
    }

    /// Body class the stylesheet defines for this size. `None` for medium.
    pub fn css_class(&self) -> Option<&'static str> {
        match self {
            FontSize::Small => Some("font-small"),
            FontSize::Medium => None,
            FontSize::Large => Some("font-large"),
        }
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FontSize {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" => Ok(FontSize::Small),
            "medium" => Ok(FontSize::Medium),
            "large" => Ok(FontSize::Large),
            other => Err(StoreError::Corrupt(format!("Unknown font size: {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_size_round_trips_through_strings() {
        for size in [FontSize::Small, FontSize::Medium, FontSize::Large] {
            assert_eq!(size.as_str().parse::<FontSize>().unwrap(), size);
        }
        assert!("huge".parse::<FontSize>().is_err());
    }

    #[test]
    fn medium_has_no_css_class() {
        assert_eq!(FontSize::Medium.css_class(), None);
        assert_eq!(FontSize::Small.css_class(), Some("font-small"));
        assert_eq!(FontSize::Large.css_class(), Some("font-large"));
    }

    #[test]
    fn position_record_uses_the_wire_field_names() {
        let record = PositionRecord {
            page: 12,
            timestamp: 1700000000000,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"page":12,"timestamp":1700000000000}"#);
    }
}
