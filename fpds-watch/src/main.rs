use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use fpds_watch::{RunOutcome, Watch, WatchError};
use fpds_watch_chromium::ChromiumPortal;
use fpds_watch_teams::TeamsWebhook;
use tracing_subscriber::EnvFilter;

/// Post yesterday's FPDS contract awards to a Teams channel.
#[derive(Debug, Parser)]
#[command(name = "fpds-watch", version, about)]
struct Cli {
    /// Comma-separated `<contract_no>:<contract_name>` entries; may be empty.
    contracts: String,

    /// Comma-separated `<naics_code>:<agency_name>[:<agency_label>]` entries; may be empty.
    naics: String,

    /// Incoming webhook URL the report is posted to.
    webhook_url: String,

    /// Pause after each search, in seconds.
    #[arg(long, env = "FPDS_WATCH_SEARCH_DELAY_SECS", default_value_t = 5)]
    search_delay_secs: u64,

    /// Bound on loading one results page, in seconds.
    #[arg(long, env = "FPDS_WATCH_PAGE_TIMEOUT_SECS", default_value_t = 60)]
    page_timeout_secs: u64,

    /// Bound on a detail page opening, in seconds.
    #[arg(long, env = "FPDS_WATCH_DETAIL_TIMEOUT_SECS", default_value_t = 60)]
    detail_timeout_secs: u64,

    /// Show the browser window.
    #[arg(long)]
    headed: bool,

    /// Disable Chromium's sandbox (needed when running as root in a container).
    #[arg(long, env = "FPDS_WATCH_NO_SANDBOX")]
    no_sandbox: bool,

    /// Chromium/Chrome executable to launch.
    #[arg(long, env = "CHROME_BIN")]
    chrome: Option<PathBuf>,
}

async fn run(cli: Cli) -> Result<RunOutcome, WatchError> {
    let notifier = TeamsWebhook::parse(&cli.webhook_url)?;
    let page_timeout = Duration::from_secs(cli.page_timeout_secs);

    let portal = ChromiumPortal::builder()
        .headless(!cli.headed)
        .sandbox(!cli.no_sandbox)
        .chrome_executable(cli.chrome)
        .request_timeout(page_timeout)
        .build();

    let watch = Watch::builder()
        .with_portal(Arc::new(portal))
        .with_notifier(Arc::new(notifier))
        .page_timeout(page_timeout)
        .detail_timeout(Duration::from_secs(cli.detail_timeout_secs))
        .search_delay(Duration::from_secs(cli.search_delay_secs))
        .build()?;

    watch.run(&cli.contracts, &cli.naics).await
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    match run(cli).await {
        Ok(RunOutcome::Posted { blocks }) => {
            tracing::info!(blocks = blocks.len(), "contract updates posted");
            ExitCode::SUCCESS
        }
        Ok(RunOutcome::NoUpdates) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, fatal = e.is_fatal(), "contract search failed");
            ExitCode::FAILURE
        }
    }
}
