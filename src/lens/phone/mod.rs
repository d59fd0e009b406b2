//! Phone number metadata lens
//!
//! Describes an already-classified phone number: formatted forms, validity,
//! country, time zones and carrier. Synchronous and offline; parsing and
//! validation are delegated to the `phonenumber` crate, country names and
//! zones come from a built-in region table.
//!
//! # Example
//!
//! ```rust,ignore
//! use phoneq::lens::phone::{NumberMetadataProvider, PhoneNumberMetadata};
//!
//! let number = phonenumber::parse(None, "+14155552671")?;
//! let meta = PhoneNumberMetadata::new().describe(&number);
//! println!("{} ({:?})", meta.international_format, meta.country);
//! ```

mod nanp;
mod regions;

use phonenumber::{Mode, PhoneNumber};
use serde::{Deserialize, Serialize};

/// E.164 caps a full number (country code included) at 15 digits
const E164_MAX_DIGITS: usize = 15;

/// Country calling code shared by the North American Numbering Plan
const NANP_COUNTRY_CODE: u16 = 1;

/// Shortest national significant number any numbering plan allocates
const MIN_NATIONAL_DIGITS: usize = 2;

// =============================================================================
// Types
// =============================================================================

/// Facts about a parsed phone number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberMetadata {
    pub international_format: String,
    pub national_format: String,
    pub country_code: u16,
    /// ISO 3166-1 alpha-2 region the number belongs to, if any
    pub region_code: Option<String>,
    /// English region description; absent for non-geographic numbers
    pub country: Option<String>,
    /// IANA zone names; empty when unknown. North American numbers are
    /// narrowed to their area code's zone, other multi-zone regions list
    /// every zone they span.
    pub timezones: Vec<String>,
    pub is_possible: bool,
    pub is_valid: bool,
    /// Carrier name; absent when no carrier data is known
    pub carrier: Option<String>,
}

/// Source of phone number metadata
pub trait NumberMetadataProvider: Send + Sync {
    fn describe(&self, number: &PhoneNumber) -> NumberMetadata;
}

// =============================================================================
// Lens
// =============================================================================

/// Metadata provider backed by the `phonenumber` crate and the built-in
/// region table.
///
/// The bundled metadata carries no carrier names, so `carrier` is always
/// absent unless a carrier lookup is supplied via [`with_carriers`].
///
/// [`with_carriers`]: PhoneNumberMetadata::with_carriers
#[derive(Default)]
pub struct PhoneNumberMetadata {
    carriers: Option<Box<dyn Fn(&PhoneNumber) -> Option<String> + Send + Sync>>,
}

impl PhoneNumberMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a carrier lookup
    pub fn with_carriers<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&PhoneNumber) -> Option<String> + Send + Sync + 'static,
    {
        self.carriers = Some(Box::new(lookup));
        self
    }

    fn region_code(&self, number: &PhoneNumber) -> Option<String> {
        number.country().id().map(|id| format!("{:?}", id))
    }

    fn timezones(
        &self,
        number: &PhoneNumber,
        region: Option<&regions::RegionEntry>,
    ) -> Vec<String> {
        if number.code().value() == NANP_COUNTRY_CODE {
            if let Some(zone) = nanp::zone_for(number.national().value()) {
                return vec![zone.to_string()];
            }
        }
        region
            .map(|r| r.zones.iter().map(|z| z.to_string()).collect())
            .unwrap_or_default()
    }

    fn is_possible(&self, number: &PhoneNumber, is_valid: bool) -> bool {
        if is_valid {
            return true;
        }
        let national_digits = number.national().value().to_string().len();
        let code_digits = number.code().value().to_string().len();
        national_digits >= MIN_NATIONAL_DIGITS && national_digits + code_digits <= E164_MAX_DIGITS
    }
}

impl NumberMetadataProvider for PhoneNumberMetadata {
    fn describe(&self, number: &PhoneNumber) -> NumberMetadata {
        let is_valid = phonenumber::is_valid(number);
        let region_code = self.region_code(number);
        let region = region_code.as_deref().and_then(regions::find);

        let carrier = self
            .carriers
            .as_ref()
            .and_then(|lookup| lookup(number))
            .filter(|name| !name.trim().is_empty());

        NumberMetadata {
            international_format: number.format().mode(Mode::International).to_string(),
            national_format: number.format().mode(Mode::National).to_string(),
            country_code: number.code().value(),
            country: region.map(|r| r.name.to_string()),
            timezones: self.timezones(number, region),
            region_code,
            is_possible: self.is_possible(number, is_valid),
            is_valid,
            carrier,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
