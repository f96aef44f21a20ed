use std::{io::IsTerminal, process, sync::Arc};

use anyhow::{Context, Result};
use clap::Parser;
use founderscan_core::{
    render_report, DefaultScanner, HttpFetcher, RenderOptions, ScanSettings, Scanner, Target,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "founderscan",
    author,
    version,
    about = "Website health scanner: security, SEO, performance and compliance"
)]
struct Cli {
    /// Domain or URL to scan, e.g. mystartup.com
    #[arg(value_name = "DOMAIN")]
    target: Option<String>,

    /// Disable coloured output
    #[arg(long)]
    no_color: bool,

    /// Log fetch and scoring details to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(raw_target) = cli.target.as_deref() else {
        print_usage();
        process::exit(1);
    };
    let target = match Target::parse(raw_target) {
        Ok(target) => target,
        Err(err) => {
            println!("{err}");
            print_usage();
            process::exit(1);
        }
    };

    println!("\n⏳ Scanning {}...", target.domain());
    println!("   Checking security, SEO, performance, and compliance...\n");

    let fetcher =
        HttpFetcher::new(&ScanSettings::default()).context("failed to initialise HTTP client")?;
    let scanner = DefaultScanner::new(Arc::new(fetcher));
    debug!(base_url = target.base_url(), "starting scan");
    let report = match scanner.scan(&target).await {
        Ok(report) => report,
        Err(err) => {
            println!("  ❌ Could not reach {}: {err:#}", target.base_url());
            process::exit(1);
        }
    };

    let color = !cli.no_color && std::io::stdout().is_terminal();
    debug!(score = report.score, color, "rendering report");
    print!("{}", render_report(&report, &RenderOptions { color })?);
    Ok(())
}

fn print_usage() {
    println!("Usage: founderscan <domain>");
    println!("Example: founderscan mystartup.com");
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "founderscan_core=debug,founderscan=debug"
    } else {
        "warn"
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
}
