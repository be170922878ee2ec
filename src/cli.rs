use crate::commands;
use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "ui-import-rewriter",
    version,
    about = "Rewrite alias imports in extracted UI component files"
)]
struct Cli {
    /// Increase verbosity (-v, -vv). Uses RUST_LOG under the hood
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,

    /// Defaults to the rewrite pass when no subcommand is given
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rewrite alias imports in place in the target directory
    Rewrite {
        /// Path to rewriter.toml (defaults to ./rewriter.toml if present)
        #[arg(long)]
        config: Option<String>,
        /// Target directory (overrides config and the built-in default)
        #[arg(long)]
        dir: Option<String>,
    },
    /// Copy component files from a source directory into the target,
    /// rewriting imports on the way
    Copy {
        /// Source directory holding the original component files
        #[arg(long)]
        from: String,
        #[arg(long)]
        config: Option<String>,
        #[arg(long)]
        dir: Option<String>,
    },
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| level.to_string());
    // try_init so run_cli_with can be called more than once in-process
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(env_filter))
        .with_target(false)
        .without_time()
        .try_init();
}

fn dispatch(cli: Cli) -> Result<()> {
    init_tracing(cli.verbose);

    match cli.command {
        None => commands::rewrite(None, None),
        Some(Commands::Rewrite { config, dir }) => {
            commands::rewrite(config.as_deref(), dir.as_deref())
        }
        Some(Commands::Copy { from, config, dir }) => {
            commands::copy(config.as_deref(), &from, dir.as_deref())
        }
    }
}

pub fn run_cli() -> Result<()> {
    dispatch(Cli::parse())
}

pub fn run_cli_with<I, S>(args: I) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(Into::into).collect();
    dispatch(Cli::parse_from(args))
}
