//! Geolocation lens
//!
//! Resolves a target to coordinates with a single free-text geocoding search
//! (Nominatim's `/search` API). Phone numbers are searched by their region
//! description; IP addresses by the bare literal, which rarely matches
//! anything but is kept as a best-effort lookup.
//!
//! # Example
//!
//! ```rust,ignore
//! use phoneq::config::PhoneqConfig;
//! use phoneq::lens::geolocation::GeolocationProvider;
//!
//! let config = PhoneqConfig::default();
//! let provider = GeolocationProvider::from_config(&config);
//! let result = provider.query(&identity);
//! ```

use crate::config::PhoneqConfig;
use crate::lens::enrichment::{
    build_agent, EnrichmentFields, EnrichmentProvider, EnrichmentResult, ProviderFailure,
    SectionSlot,
};
use crate::lens::phone::{NumberMetadataProvider, PhoneNumberMetadata};
use crate::lens::target::{Identity, TargetKind};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// One candidate match from the geocoding service
#[derive(Debug, Clone, Deserialize)]
struct GeocodeCandidate {
    #[serde(default)]
    lat: Option<Value>,
    #[serde(default)]
    lon: Option<Value>,
}

/// Coordinates arrive as strings; tolerate bare numbers too
fn coordinate(value: Option<Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.trim().is_empty() => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Free-text geolocation provider
pub struct GeolocationProvider {
    agent: ureq::Agent,
    endpoint: String,
    map_url: String,
    user_agent: String,
    metadata: Arc<dyn NumberMetadataProvider>,
}

impl GeolocationProvider {
    pub fn new(
        agent: ureq::Agent,
        config: &PhoneqConfig,
        metadata: Arc<dyn NumberMetadataProvider>,
    ) -> Self {
        Self {
            agent,
            endpoint: config.geocode_url.clone(),
            map_url: config.map_url.clone(),
            user_agent: config.user_agent.clone(),
            metadata,
        }
    }

    /// Provider with its own agent and the default phone metadata source
    pub fn from_config(config: &PhoneqConfig) -> Self {
        Self::new(
            build_agent(config),
            config,
            Arc::new(PhoneNumberMetadata::new()),
        )
    }

    /// Region description reported alongside the coordinates
    pub fn region(&self, identity: &Identity) -> Option<String> {
        match identity {
            Identity::Phone { number, .. } => self.metadata.describe(number).country,
            _ => None,
        }
    }

    /// Free-text search for the target, given its already-resolved region
    pub fn search_text(identity: &Identity, region: Option<&str>) -> String {
        match (identity, region) {
            (Identity::Phone { .. }, Some(region)) => region.to_string(),
            (other, _) => other.raw().to_string(),
        }
    }

    /// Map link for a pair of resolved coordinates
    pub fn map_link(&self, latitude: &str, longitude: &str) -> String {
        format!("{}?mlat={}&mlon={}", self.map_url, latitude, longitude)
    }

    fn lookup(&self, identity: &Identity) -> Result<EnrichmentFields, ProviderFailure> {
        let region = self.region(identity);
        let text = Self::search_text(identity, region.as_deref());
        if identity.kind() == TargetKind::Ip {
            debug!("geolocation search by bare IP literal is low-yield: {}", text);
        }

        let candidates = self
            .agent
            .get(&self.endpoint)
            .header("User-Agent", &self.user_agent)
            .query("q", &text)
            .query("format", "json")
            .query("limit", "1")
            .call()?
            .body_mut()
            .read_json::<Vec<GeocodeCandidate>>()?;

        let (latitude, longitude) = match candidates.into_iter().next() {
            Some(first) => (coordinate(first.lat), coordinate(first.lon)),
            None => {
                debug!("geolocation search for '{}' returned no candidates", text);
                (None, None)
            }
        };

        let map_url = match (&latitude, &longitude) {
            (Some(lat), Some(lon)) => Some(self.map_link(lat, lon)),
            _ => None,
        };

        Ok(EnrichmentFields::new()
            .with("region", region)
            .with("latitude", latitude)
            .with("longitude", longitude)
            .with("map_url", map_url))
    }
}

impl EnrichmentProvider for GeolocationProvider {
    fn name(&self) -> &'static str {
        "geolocation"
    }

    fn slot(&self) -> SectionSlot {
        SectionSlot::Geolocation
    }

    fn applies_to(&self, kind: TargetKind) -> bool {
        matches!(kind, TargetKind::Phone | TargetKind::Ip)
    }

    fn query(&self, identity: &Identity) -> EnrichmentResult {
        self.lookup(identity).into()
    }
}

// =============================================================================
// Tests
// =============================================================================
