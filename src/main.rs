mod commands;
mod templates;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use unsent_stars::Emotion;
use unsent_stars::config;
use unsent_stars::storage::FileStorage;

use commands::Session;

#[derive(Parser)]
#[command(name = "unsent-stars", version, about = "Unsent letters, kept as stars in a night sky")]
struct Cli {
    /// Directory holding saved letters (default: $ULTS_DATA_DIR or the platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
    /// Disable coloured stars
    #[arg(long, global = true)]
    no_color: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the storage key a recipient name normalizes to
    Slug {
        /// Recipient name as typed
        text: String,
    },
    /// Open (or start) the sky for a recipient
    To {
        /// Recipient name, e.g. "엄마에게"
        recipient: String,
    },
    /// Draw a sky; without a recipient, the unnamed sky
    Sky {
        /// Recipient name or slug
        recipient: Option<String>,
        /// Skip the numbered star list
        #[arg(long)]
        no_legend: bool,
    },
    /// Write a letter and turn it into a star
    Write {
        /// Recipient name or slug; omit for the unnamed sky
        #[arg(long)]
        to: Option<String>,
        /// happy, sad, angry or calm
        #[arg(long, short)]
        emotion: Option<Emotion>,
        /// Letter text, or `-` to read it from stdin
        body: String,
    },
    /// Read the letter behind star #N
    Read {
        #[arg(long)]
        to: Option<String>,
        /// Star number from the sky legend
        n: usize,
    },
    /// List letters in a sky
    List {
        #[arg(long)]
        to: Option<String>,
        /// Print the stored records as JSON
        #[arg(long)]
        json: bool,
    },
    /// List every recipient that has stars
    Recipients,
    /// Navigate to a path: `/`, `/r/<slug>`
    Open {
        #[arg(default_value = "/")]
        path: String,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(config::LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let session = Session {
        storage: FileStorage::new(config::data_dir(cli.data_dir)),
        color: config::color_enabled(cli.no_color),
    };
    tracing::debug!(root = %session.storage.root().display(), "using data dir");

    match cli.command {
        Command::Slug { text } => commands::slug::run(&text),
        Command::To { recipient } => commands::to::run(&session, &recipient),
        Command::Sky { recipient, no_legend } => {
            commands::sky::run(&session, recipient.as_deref(), !no_legend)
        }
        Command::Write { to, emotion, body } => {
            commands::write::run(&session, to.as_deref(), emotion, &body)
        }
        Command::Read { to, n } => commands::read::run(&session, to.as_deref(), n),
        Command::List { to, json } => commands::list::run(&session, to.as_deref(), json),
        Command::Recipients => commands::recipients::run(&session),
        Command::Open { path } => commands::open::run(&session, &path),
    }
}
