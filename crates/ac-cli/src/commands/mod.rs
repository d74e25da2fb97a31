pub mod config_ops;
pub mod query_ops;
pub mod simulate_ops;

use std::fs;
use std::process;

use ac_engine::api::AcEngine;
use ac_engine::dict::read_term_file;
use ac_engine::{CompletionConfig, MemoryBuffer};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}
pub(crate) use die;

/// Build an engine over a vocabulary file and, optionally, a document whose
/// tokens fill the buffer layer.
pub(crate) fn load_engine(
    vocab_file: &str,
    document: Option<&str>,
    config: CompletionConfig,
) -> AcEngine {
    let terms = die!(
        read_term_file(vocab_file.as_ref()),
        "Error reading {vocab_file}: {}"
    );
    let engine = AcEngine::with_config(config);
    engine.seed_vocabulary(&terms);
    if let Some(path) = document {
        let text = die!(fs::read_to_string(path), "Error reading {path}: {}");
        engine.document_switched(&MemoryBuffer::new(text));
    }
    engine
}

pub(crate) fn print_json<T: serde::Serialize>(value: &T) {
    let json = die!(serde_json::to_string_pretty(value), "Error: {}");
    println!("{json}");
}
