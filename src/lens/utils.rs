//! Common utility functions for lens modules
//!
//! This module provides shared helpers used across lenses, particularly the
//! output format selector and key humanizing for text reports.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output format for investigation reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    /// Human-readable text report (default)
    #[default]
    Text,
    /// Pretty-printed JSON of the report envelope
    Json,
}

impl OutputFormat {
    /// Check if this is a JSON variant
    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    /// Get a list of all format names for help text
    pub fn all_names() -> &'static [&'static str] {
        &["text", "json"]
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!(
                "Unknown output format '{}'. Valid formats: {}",
                s,
                Self::all_names().join(", ")
            )),
        }
    }
}

/// Turn a snake_case identifier into a title-cased label
///
/// Underscores become spaces; the first letter of every alphabetic run is
/// upper-cased and the rest lower-cased.
///
/// # Examples
///
/// ```
/// use phoneq::lens::utils::humanize_key;
///
/// assert_eq!(humanize_key("basic_info"), "Basic Info");
/// assert_eq!(humanize_key("map_url"), "Map Url");
/// ```
pub fn humanize_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut prev_alpha = false;
    for c in key.replace('_', " ").chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humanize_key() {
        assert_eq!(humanize_key("ip_info"), "Ip Info");
        assert_eq!(humanize_key("international_format"), "International Format");
        assert_eq!(humanize_key("loc"), "Loc");
        assert_eq!(humanize_key("is_valid"), "Is Valid");
        assert_eq!(humanize_key(""), "");
    }

    #[test]
    fn test_humanize_key_mixed_case() {
        assert_eq!(humanize_key("IP_ADDRESS"), "Ip Address");
        assert_eq!(humanize_key("ipv4_addr"), "Ipv4 Addr");
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("TXT").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("json").unwrap(), OutputFormat::Json);
        assert!(OutputFormat::from_str("yaml").is_err());
    }

    #[test]
    fn test_output_format_display() {
        assert_eq!(OutputFormat::Text.to_string(), "text");
        assert_eq!(OutputFormat::Json.to_string(), "json");
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
        assert!(OutputFormat::Json.is_json());
        assert!(!OutputFormat::Text.is_json());
    }
}
