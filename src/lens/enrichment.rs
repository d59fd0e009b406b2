//! Shared types for network enrichment providers
//!
//! Every provider answers one [`EnrichmentResult`] per run. Failures are
//! values, not errors: the aggregator folds them into the report instead of
//! aborting.

use crate::config::PhoneqConfig;
use crate::lens::target::{Identity, TargetKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// =============================================================================
// Types
// =============================================================================

/// Report section a provider fills
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionSlot {
    Geolocation,
    IpInfo,
}

impl std::fmt::Display for SectionSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SectionSlot::Geolocation => write!(f, "geolocation"),
            SectionSlot::IpInfo => write!(f, "ip_info"),
        }
    }
}

/// Field values returned by a provider, keyed by report field name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichmentFields(BTreeMap<String, Option<String>>);

impl EnrichmentFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Option<String>) {
        self.0.insert(key.into(), value);
    }

    pub fn with(mut self, key: impl Into<String>, value: Option<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Value of a field; absent keys and explicit nulls both yield `None`
    pub fn get(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned().flatten()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Why a provider produced no data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProviderFailure {
    /// Could not connect (DNS, refused, TLS, I/O)
    Connection(String),
    /// The run-level timeout budget ran out
    Timeout,
    /// Non-2xx HTTP status
    Status(u16),
    /// Response body was not the expected JSON
    MalformedBody(String),
    /// Request could not be built or sent for another reason
    Request(String),
}

impl std::fmt::Display for ProviderFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderFailure::Connection(e) => write!(f, "connection failed: {}", e),
            ProviderFailure::Timeout => write!(f, "request timed out"),
            ProviderFailure::Status(code) => write!(f, "unexpected HTTP status {}", code),
            ProviderFailure::MalformedBody(e) => write!(f, "malformed response body: {}", e),
            ProviderFailure::Request(e) => write!(f, "request failed: {}", e),
        }
    }
}

impl std::error::Error for ProviderFailure {}

impl From<ureq::Error> for ProviderFailure {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::StatusCode(code) => ProviderFailure::Status(code),
            ureq::Error::Timeout(_) => ProviderFailure::Timeout,
            ureq::Error::Json(e) => ProviderFailure::MalformedBody(e.to_string()),
            e @ (ureq::Error::HostNotFound | ureq::Error::ConnectionFailed) => {
                ProviderFailure::Connection(e.to_string())
            }
            ureq::Error::Io(e) => match e.kind() {
                std::io::ErrorKind::TimedOut => ProviderFailure::Timeout,
                _ => ProviderFailure::Connection(e.to_string()),
            },
            other => ProviderFailure::Request(other.to_string()),
        }
    }
}

/// Outcome of one provider for one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnrichmentResult {
    Success(EnrichmentFields),
    Failure(ProviderFailure),
}

impl EnrichmentResult {
    pub fn is_success(&self) -> bool {
        matches!(self, EnrichmentResult::Success(_))
    }
}

impl From<Result<EnrichmentFields, ProviderFailure>> for EnrichmentResult {
    fn from(res: Result<EnrichmentFields, ProviderFailure>) -> Self {
        match res {
            Ok(fields) => EnrichmentResult::Success(fields),
            Err(failure) => EnrichmentResult::Failure(failure),
        }
    }
}

/// A source that enriches a classified target with one network request
pub trait EnrichmentProvider: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &'static str;

    /// Section the result is merged into
    fn slot(&self) -> SectionSlot;

    /// Whether this provider runs for the given target kind
    fn applies_to(&self, kind: TargetKind) -> bool;

    fn query(&self, identity: &Identity) -> EnrichmentResult;
}

/// Build the HTTP agent shared by the providers of one run.
///
/// The global timeout covers connect, send and body read, so a single stuck
/// provider can never outlive the run budget.
pub fn build_agent(config: &PhoneqConfig) -> ureq::Agent {
    ureq::Agent::config_builder()
        .timeout_global(Some(config.timeout()))
        .build()
        .into()
}

// =============================================================================
// Tests
// =============================================================================
