//! Dashboard entry-point: wires configuration, the HTTP user service, and the
//! terminal front end, then mounts the dashboard.

use std::sync::Arc;

use color_eyre::eyre::{Result, WrapErr, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use dashboard::DashboardSettings;
use dashboard::domain::{Dashboard, EntryForm};
use dashboard::inbound::terminal::TerminalDashboard;
use dashboard::outbound::http::HttpUserService;

/// Application bootstrap.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = DashboardSettings::load_from_iter(std::env::args_os())
        .map_err(|error| eyre!("failed to load dashboard settings: {error}"))?;
    let base_url = settings
        .api_base_url()
        .wrap_err("invalid API base URL")?;
    let service = HttpUserService::new(base_url.clone(), settings.request_timeout())
        .wrap_err("failed to build the user service client")?;
    info!(api_base_url = %base_url, "starting dashboard");

    let terminal = TerminalDashboard::new(Dashboard::new(Arc::new(service)), EntryForm::new());
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    terminal
        .run(stdin, std::io::stdout().lock())
        .await
        .wrap_err("terminal session failed")
}
