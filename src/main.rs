use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use taskdeck::app::AppState;
use taskdeck::config::{default_config_path, init_config, load_config, DeckConfig};
use taskdeck::input::handle_line;
use taskdeck::TaskStore;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "taskdeck")]
#[command(about = "An in-memory task deck with undo, arrival queue and priority ordering", long_about = None)]
struct Cli {
    /// Config file. Defaults to ~/.taskdeck/config.json
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print views as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default config file
    Init,
    /// Run shell commands from a file, one per line
    Run {
        /// Script to execute
        script: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = match cli.config.clone() {
        Some(path) => Ok(path),
        None => default_config_path(),
    };

    if let Some(Commands::Init) = cli.command {
        let path = config_path?;
        init_config(&path)?;
        println!("Wrote default config: {}", path.display());
        return Ok(());
    }

    let (config, load_error) = match config_path.and_then(load_config) {
        Ok(config) => (config, None),
        Err(e) => (DeckConfig::default(), Some(e)),
    };
    init_tracing(&config);
    if let Some(e) = load_error {
        tracing::warn!(error = %e, "failed to load config, using defaults");
    }

    let mut app = AppState::new(TaskStore::new(), config);

    match cli.command {
        Some(Commands::Run { script }) => {
            let content = std::fs::read_to_string(&script)
                .with_context(|| format!("Failed to read script: {}", script.display()))?;
            run_script(&mut app, &content, cli.json)
        }
        _ => run_shell(&mut app, cli.json),
    }
}

/// RUST_LOG wins over the config's filter
fn init_tracing(config: &DeckConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_script(app: &mut AppState, content: &str, json: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in content.lines() {
        if handle_line(app, line, json, &mut out)? {
            break;
        }
    }
    Ok(())
}

fn run_shell(app: &mut AppState, json: bool) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "taskdeck: type 'help' for commands")?;
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if handle_line(app, &line, json, &mut out)? {
            break;
        }
    }
    Ok(())
}
