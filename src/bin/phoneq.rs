#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use clap::Parser;
use phoneq::{PhoneqConfig, BANNER, DESCRIPTION, VERSION};
use std::process::ExitCode;
use tracing::Level;

mod commands;

use commands::investigate::InvestigateArgs;

#[derive(Parser)]
#[clap(author, version, about = DESCRIPTION, long_about = None)]
struct Cli {
    /// configuration file path, by default $HOME/.phoneq/phoneq.toml is used
    #[clap(short, long)]
    config: Option<String>,

    /// ipinfo.io access token (overrides configuration and PHONEQ_IPINFO_TOKEN)
    #[clap(long)]
    token: Option<String>,

    /// Print debug information
    #[clap(long)]
    debug: bool,

    #[clap(flatten)]
    investigate: InvestigateArgs,
}

fn print_banner() {
    println!("{}", BANNER);
    println!("Version: {}", VERSION);
    println!("Description: {}", DESCRIPTION);
    println!("{}", "-".repeat(50));
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(Level::DEBUG)
            .init();
    }

    if cli.investigate.show_banner() {
        print_banner();
    }

    let config = match PhoneqConfig::new(&cli.config) {
        Ok(c) => c.with_token(cli.token),
        Err(e) => {
            eprintln!("ERROR: {}", e);
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!("configuration:\n{}", config.summary());

    commands::investigate::run(&config, cli.investigate)
}
