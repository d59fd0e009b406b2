//! Report envelope and rendering
//!
//! The envelope always carries four sections in a fixed order:
//! `basic_info`, `carrier_info`, `geolocation`, `ip_info`. Each section is a
//! closed enum whose variants fix the field set, so every code path yields
//! the same keys for the same target kind. Sections that do not apply stay
//! present as empty objects.

use crate::lens::enrichment::EnrichmentResult;
use crate::lens::phone::NumberMetadata;
use crate::lens::target::TargetKind;
use crate::lens::utils::{humanize_key, OutputFormat};
use chrono::{DateTime, Local};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::error;

/// Carrier name reported when the metadata knows none
pub const UNKNOWN_CARRIER: &str = "Unknown";

/// Marker stored in `ip_info` when the lookup fails
pub const IP_INFO_ERROR: &str = "Failed to retrieve IP information";

const RULE_WIDTH: usize = 50;

// =============================================================================
// Sections
// =============================================================================

/// Placeholder for a section that does not apply; serializes as `{}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EmptySection {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhoneBasicInfo {
    pub international_format: String,
    pub national_format: String,
    pub country_code: u16,
    pub country: Option<String>,
    pub timezone: Vec<String>,
    pub is_possible: bool,
    pub is_valid: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IpBasicInfo {
    pub ip_address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum BasicInfo {
    Phone(PhoneBasicInfo),
    Ip(IpBasicInfo),
    Empty(EmptySection),
}

impl Default for BasicInfo {
    fn default() -> Self {
        BasicInfo::Empty(EmptySection {})
    }
}

impl From<&NumberMetadata> for BasicInfo {
    fn from(meta: &NumberMetadata) -> Self {
        BasicInfo::Phone(PhoneBasicInfo {
            international_format: meta.international_format.clone(),
            national_format: meta.national_format.clone(),
            country_code: meta.country_code,
            country: meta.country.clone(),
            timezone: meta.timezones.clone(),
            is_possible: meta.is_possible,
            is_valid: meta.is_valid,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CarrierInfo {
    Phone { carrier: String },
    Empty(EmptySection),
}

impl Default for CarrierInfo {
    fn default() -> Self {
        CarrierInfo::Empty(EmptySection {})
    }
}

impl From<&NumberMetadata> for CarrierInfo {
    fn from(meta: &NumberMetadata) -> Self {
        CarrierInfo::Phone {
            carrier: meta
                .carrier
                .clone()
                .unwrap_or_else(|| UNKNOWN_CARRIER.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeolocationInfo {
    pub region: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub map_url: Option<String>,
    /// Present only when the lookup failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Geolocation {
    Located(GeolocationInfo),
    Empty(EmptySection),
}

impl Default for Geolocation {
    fn default() -> Self {
        Geolocation::Empty(EmptySection {})
    }
}

impl Geolocation {
    /// Build the section from a provider outcome.
    ///
    /// `region` is the caller's own region description, used when the
    /// provider failed or omitted it. `map_url` is kept only when both
    /// coordinates resolved.
    pub fn from_result(result: &EnrichmentResult, region: Option<String>) -> Self {
        let info = match result {
            EnrichmentResult::Success(fields) => {
                let latitude = fields.get("latitude");
                let longitude = fields.get("longitude");
                let map_url = match (&latitude, &longitude) {
                    (Some(_), Some(_)) => fields.get("map_url"),
                    _ => None,
                };
                GeolocationInfo {
                    region: fields.get("region").or(region),
                    latitude,
                    longitude,
                    map_url,
                    error: None,
                }
            }
            EnrichmentResult::Failure(failure) => GeolocationInfo {
                region,
                latitude: None,
                longitude: None,
                map_url: None,
                error: Some(format!("Failed to retrieve geolocation: {}", failure)),
            },
        };
        Geolocation::Located(info)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IpInfoFields {
    pub ip: Option<String>,
    pub hostname: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
    pub loc: Option<String>,
    pub org: Option<String>,
    pub postal: Option<String>,
    pub timezone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum IpInfoSection {
    Found(IpInfoFields),
    Failed { error: String },
    Empty(EmptySection),
}

impl Default for IpInfoSection {
    fn default() -> Self {
        IpInfoSection::Empty(EmptySection {})
    }
}

impl IpInfoSection {
    /// Build the section from a provider outcome. Any failure collapses to
    /// the fixed error marker; the detail only goes to the logs.
    pub fn from_result(result: &EnrichmentResult) -> Self {
        match result {
            EnrichmentResult::Success(fields) => IpInfoSection::Found(IpInfoFields {
                ip: fields.get("ip"),
                hostname: fields.get("hostname"),
                city: fields.get("city"),
                region: fields.get("region"),
                country: fields.get("country"),
                loc: fields.get("loc"),
                org: fields.get("org"),
                postal: fields.get("postal"),
                timezone: fields.get("timezone"),
            }),
            EnrichmentResult::Failure(_) => IpInfoSection::failed(),
        }
    }

    pub fn failed() -> Self {
        IpInfoSection::Failed {
            error: IP_INFO_ERROR.to_string(),
        }
    }
}

// =============================================================================
// Envelope
// =============================================================================

/// Merged result of one investigation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportEnvelope {
    #[serde(skip)]
    pub target: String,
    #[serde(skip)]
    pub kind: TargetKind,
    pub basic_info: BasicInfo,
    pub carrier_info: CarrierInfo,
    pub geolocation: Geolocation,
    pub ip_info: IpInfoSection,
}

impl ReportEnvelope {
    /// Envelope with all four sections present and empty
    pub fn new(target: impl Into<String>, kind: TargetKind) -> Self {
        Self {
            target: target.into(),
            kind,
            basic_info: BasicInfo::default(),
            carrier_info: CarrierInfo::default(),
            geolocation: Geolocation::default(),
            ip_info: IpInfoSection::default(),
        }
    }

    /// Sections in report order, as JSON objects with their field order kept
    pub fn sections(&self) -> Vec<(&'static str, Map<String, Value>)> {
        vec![
            ("basic_info", section_map(&self.basic_info)),
            ("carrier_info", section_map(&self.carrier_info)),
            ("geolocation", section_map(&self.geolocation)),
            ("ip_info", section_map(&self.ip_info)),
        ]
    }

    /// Failures recorded in the envelope, by section name
    pub fn failures(&self) -> Vec<(&'static str, String)> {
        let mut out = vec![];
        if let Geolocation::Located(GeolocationInfo {
            error: Some(e), ..
        }) = &self.geolocation
        {
            out.push(("geolocation", e.clone()));
        }
        if let IpInfoSection::Failed { error } = &self.ip_info {
            out.push(("ip_info", error.clone()));
        }
        out
    }
}

/// Pretty JSON for a report value. Report types always serialize, so a
/// failure here is a bug; it is logged and yields an empty string.
fn pretty_json<T: Serialize>(value: &T, target: &str) -> String {
    match serde_json::to_string_pretty(value) {
        Ok(json) => json,
        Err(e) => {
            error!("failed to serialize report for {}: {}", target, e);
            String::new()
        }
    }
}

fn section_map<T: Serialize>(section: &T) -> Map<String, Value> {
    match serde_json::to_value(section) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}

// =============================================================================
// Renderer
// =============================================================================

/// Turns an envelope into JSON or a text report
///
/// The text report carries a generation timestamp; tests pin it with
/// [`ReportRenderer::with_timestamp`].
#[derive(Debug, Clone, Default)]
pub struct ReportRenderer {
    timestamp: Option<DateTime<Local>>,
}

impl ReportRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed generation time instead of the current clock
    pub fn with_timestamp(timestamp: DateTime<Local>) -> Self {
        Self {
            timestamp: Some(timestamp),
        }
    }

    pub fn render(&self, envelope: &ReportEnvelope, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.render_json(envelope),
            OutputFormat::Text => self.render_text(envelope),
        }
    }

    /// Pretty-printed JSON, explicit nulls, fixed key order
    pub fn render_json(&self, envelope: &ReportEnvelope) -> String {
        pretty_json(envelope, &envelope.target)
    }

    pub fn render_text(&self, envelope: &ReportEnvelope) -> String {
        let generated = self.timestamp.unwrap_or_else(Local::now);
        let rule = "=".repeat(RULE_WIDTH);

        let mut lines = vec![
            String::new(),
            rule.clone(),
            format!(
                "PhoneQ Report for: {} ({})",
                envelope.target,
                envelope.kind.to_string().to_uppercase()
            ),
            format!("Generated on: {}", generated.format("%Y-%m-%d %H:%M:%S")),
            rule,
            String::new(),
        ];

        for (name, fields) in envelope.sections() {
            if fields.values().all(is_blank) {
                continue;
            }
            lines.push(format!("[+] {}:", humanize_key(name)));
            for (key, value) in &fields {
                lines.push(format!("  {}: {}", humanize_key(key), display_value(value)));
            }
            lines.push(String::new());
        }

        lines.join("\n")
    }
}

/// A field counts as blank when it is null, an empty string or an empty list
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
        _ => false,
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "None".to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(display_value)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}

// =============================================================================
// Tests
// =============================================================================
