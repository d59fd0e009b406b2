//! IP information lookup lens
//!
//! This module looks up hostname, location and network details for an IP
//! address using the ipinfo.io JSON API. An access token is optional;
//! anonymous lookups work with a lower rate limit.

use crate::config::PhoneqConfig;
use crate::lens::enrichment::{
    build_agent, EnrichmentFields, EnrichmentProvider, EnrichmentResult, ProviderFailure,
    SectionSlot,
};
use crate::lens::target::{Identity, TargetKind};
use serde::{Deserialize, Serialize};

// =============================================================================
// Types
// =============================================================================

/// Response of the IP metadata service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpInfo {
    #[serde(default)]
    pub ip: Option<String>,
    #[serde(default)]
    pub hostname: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    /// "latitude,longitude"
    #[serde(default)]
    pub loc: Option<String>,
    /// Organization, usually "AS<number> <name>"
    #[serde(default)]
    pub org: Option<String>,
    #[serde(default)]
    pub postal: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
}

impl From<IpInfo> for EnrichmentFields {
    fn from(info: IpInfo) -> Self {
        EnrichmentFields::new()
            .with("ip", info.ip)
            .with("hostname", info.hostname)
            .with("city", info.city)
            .with("region", info.region)
            .with("country", info.country)
            .with("loc", info.loc)
            .with("org", info.org)
            .with("postal", info.postal)
            .with("timezone", info.timezone)
    }
}

// =============================================================================
// Lens
// =============================================================================

/// IP information lookup provider
///
/// # Example
///
/// ```rust,ignore
/// use phoneq::config::PhoneqConfig;
/// use phoneq::lens::ipinfo::IpInfoProvider;
///
/// let provider = IpInfoProvider::from_config(&PhoneqConfig::default());
/// let info = provider.lookup("8.8.8.8".parse()?)?;
/// println!("{:?}", info.org);
/// ```
pub struct IpInfoProvider {
    agent: ureq::Agent,
    endpoint: String,
    token: Option<String>,
    user_agent: String,
}

impl IpInfoProvider {
    pub fn new(agent: ureq::Agent, config: &PhoneqConfig) -> Self {
        Self {
            agent,
            endpoint: config.ipinfo_url.trim_end_matches('/').to_string(),
            token: config.ipinfo_token.clone(),
            user_agent: config.user_agent.clone(),
        }
    }

    pub fn from_config(config: &PhoneqConfig) -> Self {
        Self::new(build_agent(config), config)
    }

    /// Look up IP information
    pub fn lookup(&self, ip: std::net::IpAddr) -> Result<IpInfo, ProviderFailure> {
        let url = format!("{}/{}/json", self.endpoint, ip);

        let mut request = self.agent.get(&url).header("User-Agent", &self.user_agent);
        if let Some(token) = &self.token {
            request = request.query("token", token);
        }

        let info = request.call()?.body_mut().read_json::<IpInfo>()?;
        Ok(info)
    }
}

impl EnrichmentProvider for IpInfoProvider {
    fn name(&self) -> &'static str {
        "ipinfo"
    }

    fn slot(&self) -> SectionSlot {
        SectionSlot::IpInfo
    }

    fn applies_to(&self, kind: TargetKind) -> bool {
        kind == TargetKind::Ip
    }

    fn query(&self, identity: &Identity) -> EnrichmentResult {
        match identity {
            Identity::Ip { address, .. } => self.lookup(*address).map(EnrichmentFields::from).into(),
            other => EnrichmentResult::Failure(ProviderFailure::Request(format!(
                "{} target is not an IP address",
                other.kind()
            ))),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lens::target::TargetLens;
    use crate::lens::testutil::{serve_once, silent_url, unreachable_url};

    const GOOGLE_DNS: &str = r#"{
        "ip": "8.8.8.8",
        "hostname": "dns.google",
        "city": "Mountain View",
        "region": "California",
        "country": "US",
        "loc": "37.4056,-122.0775",
        "org": "AS15169 Google LLC",
        "postal": "94043",
        "timezone": "America/Los_Angeles",
        "anycast": true
    }"#;

    fn provider_for(url: String, token: Option<&str>) -> IpInfoProvider {
        let config = PhoneqConfig {
            ipinfo_url: url,
            ipinfo_token: token.map(|t| t.to_string()),
            timeout_secs: 5,
            ..Default::default()
        };
        IpInfoProvider::from_config(&config)
    }

    #[test]
    fn test_lookup_success() {
        let (url, handle) = serve_once("200 OK", GOOGLE_DNS);
        let provider = provider_for(url, None);
        let identity = TargetLens::new().classify("8.8.8.8");

        let result = provider.query(&identity);
        let request_line = handle.join().unwrap();
        assert!(request_line.starts_with("GET /8.8.8.8/json "));
        assert!(!request_line.contains("token"));

        match result {
            EnrichmentResult::Success(fields) => {
                assert_eq!(fields.get("ip").as_deref(), Some("8.8.8.8"));
                assert_eq!(fields.get("hostname").as_deref(), Some("dns.google"));
                assert_eq!(fields.get("org").as_deref(), Some("AS15169 Google LLC"));
                assert_eq!(fields.get("loc").as_deref(), Some("37.4056,-122.0775"));
                assert_eq!(fields.len(), 9);
            }
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[test]
    fn test_lookup_with_token() {
        let (url, handle) = serve_once("200 OK", r#"{"ip": "1.1.1.1"}"#);
        let provider = provider_for(url, Some("secret"));

        let info = provider.lookup("1.1.1.1".parse().unwrap()).unwrap();
        let request_line = handle.join().unwrap();
        assert!(request_line.starts_with("GET /1.1.1.1/json?token=secret "));
        assert_eq!(info.ip.as_deref(), Some("1.1.1.1"));
        assert_eq!(info.hostname, None);
    }

    #[test]
    fn test_lookup_ipv6() {
        let (url, handle) = serve_once("200 OK", r#"{"ip": "2001:4860:4860::8888"}"#);
        let provider = provider_for(url, None);

        let info = provider.lookup("2001:4860:4860::8888".parse().unwrap()).unwrap();
        handle.join().unwrap();
        assert_eq!(info.ip.as_deref(), Some("2001:4860:4860::8888"));
    }

    #[test]
    fn test_lookup_rate_limited() {
        let (url, handle) = serve_once("429 Too Many Requests", r#"{"error": "rate limit"}"#);
        let provider = provider_for(url, None);
        let identity = TargetLens::new().classify("8.8.8.8");

        let result = provider.query(&identity);
        handle.join().unwrap();
        assert_eq!(result, EnrichmentResult::Failure(ProviderFailure::Status(429)));
    }

    #[test]
    fn test_lookup_unreachable() {
        let provider = provider_for(unreachable_url(), None);
        let identity = TargetLens::new().classify("8.8.8.8");
        assert!(!provider.query(&identity).is_success());
    }

    #[test]
    fn test_lookup_silent_server_times_out() {
        let config = PhoneqConfig {
            ipinfo_url: silent_url(),
            timeout_secs: 1,
            ..Default::default()
        };
        let provider = IpInfoProvider::from_config(&config);

        let err = provider.lookup("8.8.8.8".parse().unwrap()).unwrap_err();
        assert_eq!(err, ProviderFailure::Timeout);
    }

    #[test]
    fn test_applies_only_to_ip() {
        let provider = IpInfoProvider::from_config(&PhoneqConfig::default());
        assert!(provider.applies_to(TargetKind::Ip));
        assert!(!provider.applies_to(TargetKind::Phone));

        let phone = TargetLens::new().classify("+14155552671");
        assert!(!provider.query(&phone).is_success());
    }
}
