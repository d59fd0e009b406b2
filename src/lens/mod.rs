//! Lens module
//!
//! This module provides high-level "lens" abstractions that combine business logic
//! with output formatting. Lenses are designed to be reusable across different
//! interfaces (CLI, library callers, tests).
//!
//! # Lenses
//!
//! | Lens | Role | Network |
//! |------|------|---------|
//! | `TargetLens` | classify a raw target as phone, IP or invalid | no |
//! | `PhoneNumberMetadata` | formats, validity, country, zones, carrier | no |
//! | `GeolocationProvider` | free-text geocoding search | yes |
//! | `IpInfoProvider` | IP metadata lookup | yes |
//! | `InvestigateLens` | fan-out over providers, merge into a report | via providers |
//!
//! # Usage
//!
//! ```rust,ignore
//! use phoneq::config::PhoneqConfig;
//! use phoneq::lens::investigate::InvestigateLens;
//! use phoneq::lens::report::ReportRenderer;
//! use phoneq::lens::utils::OutputFormat;
//!
//! let config = PhoneqConfig::default();
//! let envelope = InvestigateLens::new(&config).run("+14155552671")?;
//! print!("{}", ReportRenderer::new().render(&envelope, OutputFormat::Text));
//! ```

pub mod utils;

pub mod enrichment;
pub mod geolocation;
pub mod investigate;
pub mod ipinfo;
pub mod phone;
pub mod report;
pub mod target;

#[cfg(test)]
mod testutil;
