use std::process;

use clap::{Parser, Subcommand};

use ac_cli::commands::{config_ops, query_ops, simulate_ops};
use ac_engine::Mode;

#[derive(Parser)]
#[command(name = "actool", about = "Term completion inspection tool")]
struct Cli {
    /// Custom settings TOML (applied before anything else runs)
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Write a JSON trace log into this directory (requires --features trace)
    #[cfg(feature = "trace")]
    #[arg(long, global = true)]
    trace_dir: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Prefix completions for a partial term
    Suggest {
        /// Vocabulary file (one term per line, `#` comments)
        vocab_file: String,
        /// Typed prefix
        prefix: String,
        /// Document whose tokens are indexed alongside the vocabulary
        #[arg(long)]
        document: Option<String>,
        /// Maximum number of results
        #[arg(short, long, default_value = "20")]
        limit: usize,
        /// Match case exactly
        #[arg(long)]
        case_sensitive: bool,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Typo-tolerant completions for a mistyped prefix
    Fuzzy {
        /// Vocabulary file (one term per line, `#` comments)
        vocab_file: String,
        /// Typed prefix
        prefix: String,
        /// Document whose tokens are indexed alongside the vocabulary
        #[arg(long)]
        document: Option<String>,
        /// Maximum number of results
        #[arg(short, long, default_value = "20")]
        limit: usize,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show term and bucket counts for both index layers
    Stats {
        /// Vocabulary file (one term per line, `#` comments)
        vocab_file: String,
        /// Document whose tokens are indexed alongside the vocabulary
        #[arg(long)]
        document: Option<String>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Replay a keystroke script and show what the editor would display
    Simulate {
        /// Vocabulary file (one term per line, `#` comments)
        vocab_file: String,
        /// Keystrokes, e.g. "(inst<tab> ?X<down><enter>"
        script: String,
        /// Document whose tokens are indexed alongside the vocabulary
        #[arg(long)]
        document: Option<String>,
        /// Completion mode (off, ghost_only, dropdown_only, both)
        #[arg(long)]
        mode: Option<Mode>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Some(path) = &cli.settings {
        if let Err(e) = ac_engine::api::settings_load_config(path) {
            eprintln!("Error loading settings: {e}");
            process::exit(1);
        }
    }

    // After settings: the first trace record reads them
    #[cfg(feature = "trace")]
    if let Some(dir) = &cli.trace_dir {
        ac_engine::api::trace_init(dir);
    }

    match cli.command {
        Command::Suggest {
            vocab_file,
            prefix,
            document,
            limit,
            case_sensitive,
            json,
        } => query_ops::suggest(
            &vocab_file,
            &prefix,
            document.as_deref(),
            limit,
            case_sensitive,
            json,
        ),
        Command::Fuzzy {
            vocab_file,
            prefix,
            document,
            limit,
            json,
        } => query_ops::fuzzy(&vocab_file, &prefix, document.as_deref(), limit, json),
        Command::Stats {
            vocab_file,
            document,
            json,
        } => query_ops::stats(&vocab_file, document.as_deref(), json),
        Command::Simulate {
            vocab_file,
            script,
            document,
            mode,
            json,
        } => simulate_ops::simulate(&vocab_file, &script, document.as_deref(), mode, json),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
