//! Daily Vibes command-line front end.
//!
//! # Responsibility
//! - Stand in for the journal form: mood picker, user picker, note, submit.
//! - Render the stored history newest first.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use daily_vibes_core::db::open_db;
use daily_vibes_core::{
    core_version, init_logging, DisplayZone, EntryStore, JournalService, SqliteSlotStore,
    SubmitOutcome, SystemClock, VibesConfig, MOOD_CATALOG,
};
use log::warn;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "daily-vibes")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Log how you feel, one emoji at a time")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (default: <config dir>/daily_vibes/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Journal database file, overriding the config
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Save a mood entry
    Log {
        /// Mood symbol or label (Happy, Calm, Sad, Angry, Tired, Thoughtful)
        #[arg(short, long)]
        mood: Option<String>,
        /// Who is logging (defaults to the first configured user)
        #[arg(short, long)]
        user: Option<String>,
        /// Optional note
        #[arg(short, long)]
        note: Option<String>,
    },

    /// Show saved entries, newest first
    History {
        /// Show at most this many entries
        #[arg(short, long)]
        limit: Option<usize>,
        /// Print stored records as JSON
        #[arg(long)]
        json: bool,
        /// Render times in UTC instead of local time
        #[arg(long)]
        utc: bool,
    },

    /// List selectable moods
    Moods,

    /// List selectable users
    Users,

    /// Show journal location and entry count
    Status,

    /// Print the effective configuration as TOML
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = VibesConfig::load(cli.config.as_deref()).context("failed to load config")?;
    if let Some(db) = cli.db {
        config.storage.db_path = db;
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }

    if let Err(err) = init_logging(&config.logging.level, &config.logging.dir) {
        eprintln!("warning: logging disabled: {err}");
    }

    match cli.command {
        Commands::Config => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
        Commands::Moods => {
            for mood in MOOD_CATALOG.iter() {
                println!("{}  {}", mood.symbol, mood.label);
            }
            Ok(())
        }
        Commands::Users => {
            match config.users.catalog()? {
                Some(users) => {
                    for name in users.names() {
                        println!("{name}");
                    }
                }
                None => println!("multi-user selection is disabled"),
            }
            Ok(())
        }
        command => run_journal(&config, command),
    }
}

fn run_journal(config: &VibesConfig, command: Commands) -> Result<()> {
    let db_path = &config.storage.db_path;
    if let Some(parent) = db_path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create `{}`", parent.display()))?;
    }

    let conn = open_db(db_path)
        .with_context(|| format!("failed to open journal `{}`", db_path.display()))?;
    let slots = SqliteSlotStore::try_new(&conn)?;
    let store = EntryStore::with_key(slots, config.storage.slot_key.clone());
    let users = config.users.catalog()?;
    let mut journal = JournalService::open(store, users, SystemClock);

    match command {
        Commands::Log { mood, user, note } => {
            let mut selection = journal.new_selection();
            if let Some(user) = user {
                selection.select_user(journal.users(), &user)?;
            }
            if let Some(mood) = mood {
                selection.select_mood(&mood)?;
            }
            if let Some(note) = note {
                selection.set_note(note);
            }

            match journal.submit(&mut selection)? {
                SubmitOutcome::Submitted(_) => {
                    if let Some(row) = journal.history().limit(1).rows().next() {
                        println!("{}", row.render());
                    }
                }
                SubmitOutcome::Rejected(reason) => {
                    warn!("event=cli_log module=cli status=rejected reason={reason}");
                    eprintln!("Nothing saved: {reason}.");
                }
            }
        }
        Commands::History { limit, json, utc } => {
            let mut view = journal.history();
            if let Some(limit) = limit {
                view = view.limit(limit);
            }
            if utc {
                view = view.with_zone(DisplayZone::utc());
            }

            if json {
                let shown = &journal.entries()[..view.len()];
                println!("{}", serde_json::to_string_pretty(shown)?);
            } else if view.is_empty() {
                println!("No moods logged yet.");
            } else {
                let blocks: Vec<String> = view.rows().map(|row| row.render()).collect();
                println!("{}", blocks.join("\n\n"));
            }
        }
        Commands::Status => {
            println!("daily-vibes {}", core_version());
            println!("database: {}", db_path.display());
            println!("slot: {}", journal.store().key());
            println!("entries: {}", journal.entries().len());
            match journal.users() {
                Some(users) => println!("users: {}", users.names().join(", ")),
                None => println!("users: disabled"),
            }
            if let Some(diagnostic) = journal.startup_diagnostic() {
                println!("recovered: {diagnostic}");
            }
        }
        Commands::Config | Commands::Moods | Commands::Users => {}
    }

    Ok(())
}
