use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mango_projects::api::HttpApi;
use mango_projects::commands;
use mango_projects::config::{Config, Layer};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mango-projects", version, about = "Browse and create projects on the Mango Tango API")]
struct Cli {
    /// Base URL of the projects API (overrides config and MANGO_PROJECTS_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,
    /// Request timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,
    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log filter, e.g. `debug` or `mango_projects=trace` (default: RUST_LOG, then `warn`)
    #[arg(long, global = true)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List all projects
    List,
    /// Create a project and open it
    Add {
        /// Display name; the directory name is derived from it
        name: Option<String>,
    },
    /// Show a single project
    Show {
        directory_name: String,
    },
    /// Open the edit form for a project (read-only)
    Edit {
        directory_name: String,
        /// New display name to submit (not applied)
        #[arg(long)]
        name: Option<String>,
    },
    /// Print the directory name a project name maps to
    Slug {
        name: String,
    },
}

fn main() -> Result<()> {
    let Cli { api_url, timeout, config: config_path, log_level, command } = Cli::parse();
    init_tracing(log_level.as_deref());

    let connect = || -> Result<HttpApi> {
        let flags = Layer { api_url, timeout_secs: timeout };
        let config = Config::load(config_path.as_deref(), flags).context("failed to load configuration")?;
        Ok(HttpApi::new(&config))
    };

    let mut out = std::io::stdout().lock();

    match command {
        Command::List => commands::list::run(&connect()?, &mut out),
        Command::Add { name } => commands::add::run(&connect()?, name.as_deref(), &mut out),
        Command::Show { directory_name } => commands::show::run(&connect()?, &directory_name, &mut out),
        Command::Edit { directory_name, name } => {
            commands::edit::run(&connect()?, &directory_name, name.as_deref(), &mut out)
        }
        Command::Slug { name } => commands::slug::run(&name, &mut out),
    }
}

fn init_tracing(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn")),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
