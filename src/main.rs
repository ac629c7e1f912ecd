//! `navgen` CLI - Generate random User-Agent headers and navigator configs

mod cmd;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use navgen::config::{Config, OutputFormat};
use navgen::{BrowserFamily, Filter, PlatformFamily};

use cmd::GenerateOptions;

#[derive(Parser)]
#[command(name = "navgen")]
#[command(about = "Generate random, consistent browser User-Agent headers and navigator configs")]
#[command(version)]
struct Cli {
    /// Config file (default: ~/.config/navgen/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate User-Agent headers
    #[command(visible_alias = "user-agent")]
    Ua(GenerateArgs),

    /// Generate full navigator configs
    Navigator(GenerateArgs),

    /// Show which browsers are generated for each platform
    Platforms,
}

#[derive(Args)]
struct GenerateArgs {
    /// Platform filter: win, mac, linux, a comma-separated list, or any
    #[arg(short, long)]
    platform: Option<String>,

    /// Browser filter: firefox, chrome, a comma-separated list, or any
    #[arg(short, long)]
    browser: Option<String>,

    /// Number of records to generate
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<Format>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    match cli.command {
        Commands::Ua(args) => {
            let opts = resolve_options(&args, cli.config.as_deref())?;
            cmd::cmd_user_agent(&opts)?;
        }
        Commands::Navigator(args) => {
            let opts = resolve_options(&args, cli.config.as_deref())?;
            cmd::cmd_navigator(&opts)?;
        }
        Commands::Platforms => {
            cmd::cmd_platforms()?;
        }
    }

    Ok(())
}

/// Merge command-line flags over the config file.
fn resolve_options(args: &GenerateArgs, config_path: Option<&Path>) -> Result<GenerateOptions> {
    let config = Config::load(config_path)?;

    let platform = match args.platform.as_deref() {
        Some(value) => value.parse::<Filter<PlatformFamily>>()?,
        None => config.platform_filter()?,
    };
    let browser = match args.browser.as_deref() {
        Some(value) => value.parse::<Filter<BrowserFamily>>()?,
        None => config.browser_filter()?,
    };

    Ok(GenerateOptions {
        platform,
        browser,
        count: args.count.or(config.count).unwrap_or(1),
        seed: args.seed,
        format: args
            .format
            .map(OutputFormat::from)
            .or(config.format)
            .unwrap_or_default(),
    })
}
