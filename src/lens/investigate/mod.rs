//! Investigate lens
//!
//! Entry point tying everything together: classify the raw target, describe
//! phone numbers locally, fan the applicable enrichment providers out in
//! parallel, and merge every outcome into one [`ReportEnvelope`].
//!
//! # Provider selection
//!
//! | Target | Local metadata | Geolocation | IP info |
//! |--------|----------------|-------------|---------|
//! | Phone  | yes            | yes         | no      |
//! | IP     | no             | yes         | yes     |
//!
//! A provider failure only degrades its own section. The single fatal
//! condition is an invalid target, reported as [`ClassificationError`]
//! before any provider runs.
//!
//! # Example
//!
//! ```rust,ignore
//! use phoneq::config::PhoneqConfig;
//! use phoneq::lens::investigate::InvestigateLens;
//! use phoneq::lens::report::ReportRenderer;
//! use phoneq::lens::utils::OutputFormat;
//!
//! let lens = InvestigateLens::new(&PhoneqConfig::default());
//! let envelope = lens.run("8.8.8.8")?;
//! println!("{}", ReportRenderer::new().render(&envelope, OutputFormat::Json));
//! ```

use crate::config::PhoneqConfig;
use crate::lens::enrichment::{build_agent, EnrichmentProvider, EnrichmentResult, SectionSlot};
use crate::lens::geolocation::GeolocationProvider;
use crate::lens::ipinfo::IpInfoProvider;
use crate::lens::phone::{NumberMetadataProvider, PhoneNumberMetadata};
use crate::lens::report::{
    BasicInfo, CarrierInfo, Geolocation, IpBasicInfo, IpInfoSection, ReportEnvelope,
};
use crate::lens::target::{ClassificationError, Identity, TargetLens};
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// One provider's outcome, tagged with where it goes
#[derive(Debug, Clone)]
struct ProviderOutcome {
    name: &'static str,
    slot: SectionSlot,
    result: EnrichmentResult,
}

/// Target investigation lens
pub struct InvestigateLens {
    classifier: TargetLens,
    metadata: Arc<dyn NumberMetadataProvider>,
    providers: Vec<Box<dyn EnrichmentProvider>>,
}

impl InvestigateLens {
    /// Lens with the default providers, sharing one HTTP agent whose
    /// timeout is the configured run budget
    pub fn new(config: &PhoneqConfig) -> Self {
        let agent = build_agent(config);
        let metadata: Arc<dyn NumberMetadataProvider> = Arc::new(PhoneNumberMetadata::new());

        let providers: Vec<Box<dyn EnrichmentProvider>> = vec![
            Box::new(GeolocationProvider::new(
                agent.clone(),
                config,
                metadata.clone(),
            )),
            Box::new(IpInfoProvider::new(agent, config)),
        ];

        Self::with_providers(metadata, providers)
    }

    /// Lens with caller-supplied metadata source and providers
    pub fn with_providers(
        metadata: Arc<dyn NumberMetadataProvider>,
        providers: Vec<Box<dyn EnrichmentProvider>>,
    ) -> Self {
        Self {
            classifier: TargetLens::new(),
            metadata,
            providers,
        }
    }

    /// Classify without running any provider
    pub fn classify(&self, raw: &str) -> Identity {
        self.classifier.classify(raw)
    }

    /// Investigate one raw target
    pub fn run(&self, raw: &str) -> Result<ReportEnvelope, ClassificationError> {
        let identity = self.classifier.classify_strict(raw)?;
        self.run_identity(&identity)
    }

    /// Investigate an already-classified target
    pub fn run_identity(&self, identity: &Identity) -> Result<ReportEnvelope, ClassificationError> {
        let start = Instant::now();
        let kind = identity.kind();
        info!("Analyzing {}: {}", kind, identity.raw());

        let mut envelope = ReportEnvelope::new(identity.raw(), kind);
        let region = match identity {
            Identity::Phone { number, .. } => {
                let meta = self.metadata.describe(number);
                envelope.basic_info = BasicInfo::from(&meta);
                envelope.carrier_info = CarrierInfo::from(&meta);
                meta.country
            }
            Identity::Ip { raw, .. } => {
                envelope.basic_info = BasicInfo::Ip(IpBasicInfo {
                    ip_address: raw.clone(),
                });
                None
            }
            Identity::Invalid { raw } => {
                return Err(ClassificationError {
                    target: raw.clone(),
                })
            }
        };

        for outcome in self.fan_out(identity) {
            match &outcome.result {
                EnrichmentResult::Success(_) => {
                    debug!("{} provider succeeded", outcome.name)
                }
                EnrichmentResult::Failure(failure) => {
                    warn!("{} provider failed: {}", outcome.name, failure)
                }
            }
            match outcome.slot {
                SectionSlot::Geolocation => {
                    envelope.geolocation = Geolocation::from_result(&outcome.result, region.clone())
                }
                SectionSlot::IpInfo => {
                    envelope.ip_info = IpInfoSection::from_result(&outcome.result)
                }
            }
        }

        debug!(
            "investigation of {} finished in {} ms",
            identity.raw(),
            start.elapsed().as_millis()
        );
        Ok(envelope)
    }

    /// Run every applicable provider in parallel and wait for all of them.
    ///
    /// Each provider gets its own worker thread so the run budget bounds the
    /// whole fan-out regardless of how many cores the host has.
    fn fan_out(&self, identity: &Identity) -> Vec<ProviderOutcome> {
        let kind = identity.kind();
        let applicable: Vec<&dyn EnrichmentProvider> = self
            .providers
            .iter()
            .filter(|p| p.applies_to(kind))
            .map(|p| p.as_ref())
            .collect();
        if applicable.is_empty() {
            return vec![];
        }

        let query_all = || -> Vec<ProviderOutcome> {
            applicable
                .par_iter()
                .with_max_len(1)
                .map(|p| {
                    debug!("querying {} provider", p.name());
                    ProviderOutcome {
                        name: p.name(),
                        slot: p.slot(),
                        result: p.query(identity),
                    }
                })
                .collect()
        };

        match ThreadPoolBuilder::new()
            .num_threads(applicable.len())
            .thread_name(|i| format!("phoneq-provider-{}", i))
            .build()
        {
            Ok(pool) => pool.install(query_all),
            Err(e) => {
                warn!("unable to start provider pool, using the global pool: {}", e);
                query_all()
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lens::enrichment::{EnrichmentFields, ProviderFailure};
    use crate::lens::report::{GeolocationInfo, ReportRenderer, UNKNOWN_CARRIER};
    use crate::lens::target::TargetKind;
    use crate::lens::testutil::{silent_url, unreachable_url};
    use serde_json::{json, Value};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    struct FakeProvider {
        name: &'static str,
        slot: SectionSlot,
        kinds: Vec<TargetKind>,
        result: EnrichmentResult,
        calls: Arc<AtomicUsize>,
    }

    impl EnrichmentProvider for FakeProvider {
        fn name(&self) -> &'static str {
            self.name
        }

        fn slot(&self) -> SectionSlot {
            self.slot
        }

        fn applies_to(&self, kind: TargetKind) -> bool {
            self.kinds.contains(&kind)
        }

        fn query(&self, _identity: &Identity) -> EnrichmentResult {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }
    }

    /// Provider that takes a fixed time to answer
    struct SlowProvider {
        name: &'static str,
        slot: SectionSlot,
        delay: Duration,
    }

    impl EnrichmentProvider for SlowProvider {
        fn name(&self) -> &'static str {
            self.name
        }

        fn slot(&self) -> SectionSlot {
            self.slot
        }

        fn applies_to(&self, kind: TargetKind) -> bool {
            kind == TargetKind::Ip
        }

        fn query(&self, _identity: &Identity) -> EnrichmentResult {
            std::thread::sleep(self.delay);
            EnrichmentResult::Failure(ProviderFailure::Timeout)
        }
    }

    fn geo_ok(calls: &Arc<AtomicUsize>) -> Box<dyn EnrichmentProvider> {
        Box::new(FakeProvider {
            name: "geo",
            slot: SectionSlot::Geolocation,
            kinds: vec![TargetKind::Phone, TargetKind::Ip],
            result: EnrichmentResult::Success(
                EnrichmentFields::new()
                    .with("region", None)
                    .with("latitude", Some("37.4".to_string()))
                    .with("longitude", Some("-122.1".to_string()))
                    .with(
                        "map_url",
                        Some("https://www.openstreetmap.org/?mlat=37.4&mlon=-122.1".to_string()),
                    ),
            ),
            calls: calls.clone(),
        })
    }

    fn ipinfo(result: EnrichmentResult, calls: &Arc<AtomicUsize>) -> Box<dyn EnrichmentProvider> {
        Box::new(FakeProvider {
            name: "ipinfo",
            slot: SectionSlot::IpInfo,
            kinds: vec![TargetKind::Ip],
            result,
            calls: calls.clone(),
        })
    }

    fn lens_with(providers: Vec<Box<dyn EnrichmentProvider>>) -> InvestigateLens {
        InvestigateLens::with_providers(Arc::new(PhoneNumberMetadata::new()), providers)
    }

    #[test]
    fn test_invalid_target_fails_fast() {
        let calls = Arc::new(AtomicUsize::new(0));
        let lens = lens_with(vec![geo_ok(&calls)]);

        let err = lens.run("not-a-target").unwrap_err();
        assert_eq!(err.target, "not-a-target");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_phone_schema() {
        let geo_calls = Arc::new(AtomicUsize::new(0));
        let ip_calls = Arc::new(AtomicUsize::new(0));
        let lens = lens_with(vec![
            geo_ok(&geo_calls),
            ipinfo(EnrichmentResult::Success(EnrichmentFields::new()), &ip_calls),
        ]);

        let envelope = lens.run("+14155552671").unwrap();
        assert_eq!(envelope.kind, TargetKind::Phone);
        assert_eq!(geo_calls.load(Ordering::SeqCst), 1);
        assert_eq!(ip_calls.load(Ordering::SeqCst), 0);

        let value: Value =
            serde_json::from_str(&ReportRenderer::new().render_json(&envelope)).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(
            obj.keys().collect::<Vec<_>>(),
            vec!["basic_info", "carrier_info", "geolocation", "ip_info"]
        );
        assert_eq!(obj["ip_info"], json!({}));
        assert_eq!(obj["basic_info"]["country_code"], 1);
        assert_eq!(obj["basic_info"]["is_valid"], true);
        assert_eq!(obj["carrier_info"]["carrier"], UNKNOWN_CARRIER);
        // region falls back to the phone's own description
        assert_eq!(obj["geolocation"]["region"], "United States");
        assert_eq!(obj["geolocation"]["latitude"], "37.4");
    }

    #[test]
    fn test_ip_partial_failure_isolation() {
        let geo_calls = Arc::new(AtomicUsize::new(0));
        let ip_calls = Arc::new(AtomicUsize::new(0));
        let lens = lens_with(vec![
            geo_ok(&geo_calls),
            ipinfo(
                EnrichmentResult::Failure(ProviderFailure::Connection("refused".to_string())),
                &ip_calls,
            ),
        ]);

        let envelope = lens.run("8.8.8.8").unwrap();
        assert_eq!(geo_calls.load(Ordering::SeqCst), 1);
        assert_eq!(ip_calls.load(Ordering::SeqCst), 1);

        assert_eq!(
            envelope.basic_info,
            BasicInfo::Ip(IpBasicInfo {
                ip_address: "8.8.8.8".to_string()
            })
        );
        assert_eq!(envelope.carrier_info, CarrierInfo::default());
        assert_eq!(envelope.ip_info, IpInfoSection::failed());
        match &envelope.geolocation {
            Geolocation::Located(GeolocationInfo {
                region,
                latitude,
                error,
                ..
            }) => {
                assert_eq!(region, &None);
                assert_eq!(latitude.as_deref(), Some("37.4"));
                assert_eq!(error, &None);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_ip_success() {
        let calls = Arc::new(AtomicUsize::new(0));
        let fields = EnrichmentFields::new()
            .with("ip", Some("8.8.8.8".to_string()))
            .with("org", Some("AS15169 Google LLC".to_string()));
        let lens = lens_with(vec![ipinfo(EnrichmentResult::Success(fields), &calls)]);

        let envelope = lens.run("8.8.8.8").unwrap();
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["ip_info"]["ip"], "8.8.8.8");
        assert_eq!(value["ip_info"]["hostname"], Value::Null);
        // no geolocation provider configured: the section stays empty
        assert_eq!(value["geolocation"], json!({}));
    }

    #[test]
    fn test_geolocation_zero_candidates_keeps_region() {
        let calls = Arc::new(AtomicUsize::new(0));
        let provider: Box<dyn EnrichmentProvider> = Box::new(FakeProvider {
            name: "geo",
            slot: SectionSlot::Geolocation,
            kinds: vec![TargetKind::Phone, TargetKind::Ip],
            result: EnrichmentResult::Success(
                EnrichmentFields::new()
                    .with("region", Some("United States".to_string()))
                    .with("latitude", None)
                    .with("longitude", None)
                    .with("map_url", None),
            ),
            calls,
        });
        let envelope = lens_with(vec![provider]).run("+14155552671").unwrap();
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            value["geolocation"],
            json!({
                "region": "United States",
                "latitude": null,
                "longitude": null,
                "map_url": null
            })
        );
    }

    #[test]
    fn test_unreachable_services_still_produce_report() {
        let config = PhoneqConfig {
            geocode_url: unreachable_url(),
            ipinfo_url: unreachable_url(),
            timeout_secs: 2,
            ..Default::default()
        };
        let lens = InvestigateLens::new(&config);

        let envelope = lens.run("8.8.8.8").unwrap();
        assert_eq!(envelope.ip_info, IpInfoSection::failed());
        let failures = envelope.failures();
        assert_eq!(failures.len(), 2);
        assert_eq!(failures[0].0, "geolocation");
        assert_eq!(failures[1].0, "ip_info");
    }

    #[test]
    fn test_structured_output_is_stable() {
        let calls = Arc::new(AtomicUsize::new(0));
        let lens = lens_with(vec![geo_ok(&calls)]);
        let renderer = ReportRenderer::new();

        let first = renderer.render_json(&lens.run("+14155552671").unwrap());
        let second = renderer.render_json(&lens.run("+14155552671").unwrap());
        assert_eq!(first, second);
    }

    #[test]
    fn test_slow_providers_run_concurrently() {
        let delay = Duration::from_millis(800);
        let lens = lens_with(vec![
            Box::new(SlowProvider {
                name: "geo",
                slot: SectionSlot::Geolocation,
                delay,
            }),
            Box::new(SlowProvider {
                name: "ipinfo",
                slot: SectionSlot::IpInfo,
                delay,
            }),
        ]);

        let start = Instant::now();
        let envelope = lens.run("8.8.8.8").unwrap();
        let elapsed = start.elapsed();

        assert!(elapsed >= delay);
        assert!(elapsed < delay * 2, "providers ran sequentially: {:?}", elapsed);
        assert_eq!(envelope.failures().len(), 2);
    }

    #[test]
    fn test_silent_services_time_out_within_budget() {
        let config = PhoneqConfig {
            geocode_url: silent_url(),
            ipinfo_url: silent_url(),
            timeout_secs: 1,
            ..Default::default()
        };
        let lens = InvestigateLens::new(&config);

        let start = Instant::now();
        let envelope = lens.run("8.8.8.8").unwrap();
        let elapsed = start.elapsed();

        assert!(
            elapsed < Duration::from_millis(1800),
            "run exceeded its budget: {:?}",
            elapsed
        );
        assert_eq!(envelope.ip_info, IpInfoSection::failed());
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["ip_info"], json!({"error": "Failed to retrieve IP information"}));
        assert_eq!(value["geolocation"]["latitude"], Value::Null);
        assert!(value["geolocation"]["error"]
            .as_str()
            .unwrap()
            .contains("timed out"));
    }
}
