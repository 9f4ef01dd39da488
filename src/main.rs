use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{error::ErrorKind, CommandFactory, Parser};
use log::debug;

use purge::term::spawn_resize_watcher;
use purge::{App, Config, Console, DeleteError, ScanError, TerminalSize};

/// Recursively delete a directory tree, showing progress and an ETA
#[derive(Parser, Debug)]
#[command(name = "purge", version, about, override_usage = "purge [OPTIONS] [--] <PATH>")]
struct Cli {
    /// Config file (default: $PURGE_CONFIG, then the user config dir)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,

    /// Directory to remove. Exactly one is accepted; a name starting with '-'
    /// must follow `--`.
    #[arg(value_name = "PATH")]
    paths: Vec<PathBuf>,
}

fn init_logging(quiet: bool, verbose: bool) {
    let default_level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };
    let env = env_logger::Env::new().filter_or("PURGE_LOG", default_level);
    let _ = env_logger::Builder::from_env(env).try_init();
    debug!("Logger initialized with level: {}", default_level);
}

fn usage() -> ExitCode {
    println!("{}", Cli::command().render_usage());
    ExitCode::from(1)
}

/// One line on stderr naming the failed primitive and path.
fn report(err: &anyhow::Error) {
    if let Some(e) = err.downcast_ref::<ScanError>() {
        eprintln!("{}", e);
    } else if let Some(e) = err.downcast_ref::<DeleteError>() {
        eprintln!("{}", e);
    } else {
        eprintln!("Error: {:#}", err);
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(_) => return usage(),
    };
    init_logging(cli.quiet, cli.verbose);

    let [root] = cli.paths.as_slice() else {
        return usage();
    };

    match run(cli.config.as_deref(), root.clone()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::from(1)
        }
    }
}

async fn run(config_path: Option<&std::path::Path>, root: PathBuf) -> Result<()> {
    let config = Config::load(config_path)?;

    // Init terminal handling
    let size = Arc::new(TerminalSize::detect(config.fallback_geometry()));
    let watcher = spawn_resize_watcher(Arc::clone(&size)).context("Failed to watch for terminal resize")?;

    let app = App::new(config, size);
    let outcome = tokio::task::spawn_blocking(move || app.run(&root, Console))
        .await
        .context("Removal task panicked")?;

    watcher.abort();
    outcome.map(|_| ())
}
