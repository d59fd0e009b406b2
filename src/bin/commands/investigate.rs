use anyhow::{anyhow, Result};
use clap::Args;
use phoneq::lens::investigate::InvestigateLens;
use phoneq::lens::report::ReportRenderer;
use phoneq::lens::utils::OutputFormat;
use phoneq::PhoneqConfig;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Arguments for an investigation
#[derive(Args, Debug)]
pub struct InvestigateArgs {
    /// Phone number (international format, e.g. +14155552671) or IP address to investigate
    #[clap(name = "TARGET")]
    pub target: String,

    /// Output format
    #[clap(short = 'o', long = "output", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Save output to file (overwritten if it exists)
    #[clap(short = 'f', long)]
    pub file: Option<PathBuf>,

    /// Do not print the banner
    #[clap(long)]
    pub no_banner: bool,
}

impl InvestigateArgs {
    /// The banner would corrupt JSON piped to stdout
    pub fn show_banner(&self) -> bool {
        !self.no_banner && !(self.format.is_json() && self.file.is_none())
    }
}

/// What one investigation produced
#[derive(Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The target was neither a phone number nor an IP address
    InvalidTarget,
    /// The report was written to this file
    Saved(PathBuf),
    /// The report, for printing to stdout
    Rendered(String),
}

pub fn run(config: &PhoneqConfig, args: InvestigateArgs) -> ExitCode {
    let InvestigateArgs {
        target,
        format,
        file,
        no_banner: _,
    } = args;

    let lens = InvestigateLens::new(config);

    match execute(&lens, &target, format, file) {
        Ok(RunOutcome::InvalidTarget) => {
            eprintln!("[-] Invalid target: {}", target);
            ExitCode::FAILURE
        }
        Ok(RunOutcome::Saved(path)) => {
            println!("[+] Report saved to: {}", path.display());
            ExitCode::SUCCESS
        }
        Ok(RunOutcome::Rendered(report)) => {
            println!("{}", report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("ERROR: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Classify, investigate and render one target; nothing is written for an
/// invalid target.
pub fn execute(
    lens: &InvestigateLens,
    target: &str,
    format: OutputFormat,
    file: Option<PathBuf>,
) -> Result<RunOutcome> {
    let identity = lens.classify(target);
    if !identity.is_valid() {
        return Ok(RunOutcome::InvalidTarget);
    }
    eprintln!("[*] Analyzing {}: {}", identity.kind(), target);

    let envelope = lens.run_identity(&identity)?;
    let report = ReportRenderer::new().render(&envelope, format);

    match file {
        Some(path) => {
            save_report(&path, &report)?;
            Ok(RunOutcome::Saved(path))
        }
        None => Ok(RunOutcome::Rendered(report)),
    }
}

fn save_report(path: &Path, report: &str) -> Result<()> {
    std::fs::write(path, report)
        .map_err(|e| anyhow!("Unable to write report to {}: {}", path.display(), e))
}
