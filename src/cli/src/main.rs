//! CLI for the Dashboard Refresh trigger.
//!
//! Stands in for the spreadsheet's `GitHub > Update Dashboard` menu: running
//! `update-dashboard` fires one authenticated refresh call.

use clap::{Parser, Subcommand, ValueEnum};
use dashboard_refresh::{
    dispatch, load_config_file, ConfigError, ConfigOverrides, DashboardRefreshTrigger, HttpMethod,
    Menu, MenuAction, RefreshError, TriggerConfig,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Dashboard Refresh - Trigger a refresh of the GitHub issues dashboard.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the config file.
    #[arg(long, default_value = "dashboard.toml")]
    config: PathBuf,

    /// Root address of the dashboard service.
    #[arg(long, env = "DASHBOARD_BASE_URL")]
    base_url: Option<String>,

    /// Access token, used instead of the configured credential source.
    #[arg(long)]
    token: Option<String>,

    /// HTTP method for the refresh call.
    #[arg(long, value_enum)]
    method: Option<MethodArg>,

    /// Request timeout in seconds.
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Fire the dashboard refresh (the default).
    UpdateDashboard,
    /// Print the menu entries.
    Menu,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum MethodArg {
    Get,
    Post,
}

impl From<MethodArg> for HttpMethod {
    fn from(value: MethodArg) -> Self {
        match value {
            MethodArg::Get => HttpMethod::Get,
            MethodArg::Post => HttpMethod::Post,
        }
    }
}

/// Errors surfaced to the user.
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Refresh(#[from] RefreshError),
}

impl CliError {
    /// 1 for auth failures, 2 for network failures, 3 for configuration.
    fn exit_code(&self) -> u8 {
        match self {
            CliError::Refresh(RefreshError::Credential(_)) => 1,
            CliError::Refresh(RefreshError::Transport(_)) => 2,
            CliError::Config(_) => 3,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(usage_exit_code(&e));
        }
    };

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Dashboard refresh failed");
            ExitCode::from(e.exit_code())
        }
    }
}

/// Usage errors count as configuration failures; `--help` and `--version` succeed.
fn usage_exit_code(e: &clap::Error) -> u8 {
    if e.use_stderr() {
        3
    } else {
        0
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<(), CliError> {
    match args.command.unwrap_or(Command::UpdateDashboard) {
        Command::Menu => {
            print!("{}", Menu::dashboard());
            Ok(())
        }
        Command::UpdateDashboard => {
            let config = resolve_config(&args)?;
            let trigger = DashboardRefreshTrigger::from_config(&config)?;
            dispatch(MenuAction::UpdateDashboard, &trigger).await?;
            Ok(())
        }
    }
}

/// Merges flags and environment on top of the config file.
fn resolve_config(args: &Args) -> Result<TriggerConfig, ConfigError> {
    let file = load_config_file(&args.config)?;
    let overrides = ConfigOverrides {
        base_url: args.base_url.clone(),
        token: args.token.clone(),
        method: args.method.map(HttpMethod::from),
        timeout_secs: args.timeout_secs,
    };
    TriggerConfig::resolve(file, overrides)
}
