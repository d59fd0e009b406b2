#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

//! PhoneQ - phone number and IP address intelligence
//!
//! PhoneQ classifies an opaque identifier (an internationally formatted phone
//! number or an IPv4/IPv6 literal), enriches it from local metadata and public
//! lookup services, and renders the merged findings as JSON or a text report.
//! It can be used as both a command-line application and a library.
//!
//! # Feature Flags
//!
//! | Feature | Description | Key Dependencies |
//! |---------|-------------|------------------|
//! | (none) | Library: classification, lookups, rendering | `phonenumber`, `ureq`, `rayon` |
//! | `cli` | The `phoneq` binary (default) | `clap`, `tracing-subscriber` |
//!
//! # Architecture
//!
//! - **[`lens`]**: business logic
//!   - `target`: classification of the raw input
//!   - `phone`: offline phone number metadata
//!   - `enrichment`: provider trait and result types
//!   - `geolocation`, `ipinfo`: network providers
//!   - `investigate`: orchestration and merging
//!   - `report`: envelope and renderers
//! - **[`config`]**: configuration management
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use phoneq::{InvestigateLens, OutputFormat, PhoneqConfig, ReportRenderer};
//!
//! let config = PhoneqConfig::default();
//! let lens = InvestigateLens::new(&config);
//!
//! match lens.run("8.8.8.8") {
//!     Ok(envelope) => println!("{}", ReportRenderer::new().render(&envelope, OutputFormat::Json)),
//!     Err(e) => eprintln!("{}", e),
//! }
//! ```

pub mod config;
pub mod lens;

// =============================================================================
// Tool identity
// =============================================================================

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = "PhoneQ - Advanced Phone Number Intelligence Tool";

pub const BANNER: &str = r#"
██████╗ ██╗  ██╗ ██████╗ ███╗  ██╗███████╗ ██████╗
██╔══██╗██║  ██║██╔═══██╗████╗ ██║██╔════╝██╔═══██╗
██████╔╝███████║██║  ██║██╔██╗ ██║█████╗  ██║  ██║
██╔═══╝ ██╔══██║██║  ██║██║╚██╗██║██╔══╝  ██║  ██║
██║    ██║  ██║╚██████╔╝██║ ╚████║███████╗╚██████╔╝
╚═╝    ╚═╝  ╚═╝ ╚═════╝ ╚═╝  ╚═══╝╚══════╝ ╚═════╝
"#;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::PhoneqConfig;

pub use lens::enrichment::{
    EnrichmentFields, EnrichmentProvider, EnrichmentResult, ProviderFailure, SectionSlot,
};
pub use lens::investigate::InvestigateLens;
pub use lens::phone::{NumberMetadata, NumberMetadataProvider, PhoneNumberMetadata};
pub use lens::report::{ReportEnvelope, ReportRenderer};
pub use lens::target::{ClassificationError, Identity, TargetKind, TargetLens};
pub use lens::utils::OutputFormat;
