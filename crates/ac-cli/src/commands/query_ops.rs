use serde::Serialize;

use ac_engine::index::LayerStats;
use ac_engine::CompletionConfig;

use super::{load_engine, print_json};
use crate::table;

#[derive(Serialize)]
struct QueryOutput<'a> {
    prefix: &'a str,
    results: Vec<String>,
}

#[derive(Serialize)]
struct LayerOutput {
    terms: usize,
    buckets: usize,
    largest_bucket: Option<String>,
    largest_bucket_size: usize,
}

impl From<LayerStats> for LayerOutput {
    fn from(s: LayerStats) -> Self {
        let (largest_bucket, largest_bucket_size) = match s.largest_bucket {
            Some((key, n)) => (Some(key), n),
            None => (None, 0),
        };
        Self {
            terms: s.terms,
            buckets: s.buckets,
            largest_bucket,
            largest_bucket_size,
        }
    }
}

#[derive(Serialize)]
struct StatsOutput {
    vocabulary: LayerOutput,
    buffer: LayerOutput,
}

fn print_results(prefix: &str, results: Vec<String>, json: bool) {
    if json {
        print_json(&QueryOutput { prefix, results });
        return;
    }
    if results.is_empty() {
        println!("No matches for '{prefix}'");
        return;
    }
    let rows: Vec<Vec<String>> = results
        .into_iter()
        .enumerate()
        .map(|(i, term)| vec![(i + 1).to_string(), term])
        .collect();
    print!("{}", table::render(&["#", "term"], &rows));
}

pub fn suggest(
    vocab_file: &str,
    prefix: &str,
    document: Option<&str>,
    limit: usize,
    case_sensitive: bool,
    json: bool,
) {
    let config = CompletionConfig {
        case_sensitive,
        ..CompletionConfig::default()
    };
    let engine = load_engine(vocab_file, document, config);
    print_results(prefix, engine.suggest_prefix(prefix, limit), json);
}

pub fn fuzzy(vocab_file: &str, prefix: &str, document: Option<&str>, limit: usize, json: bool) {
    let engine = load_engine(vocab_file, document, CompletionConfig::default());
    print_results(prefix, engine.suggest_fuzzy(prefix, limit), json);
}

pub fn stats(vocab_file: &str, document: Option<&str>, json: bool) {
    let engine = load_engine(vocab_file, document, CompletionConfig::default());
    let stats = engine.stats();
    if json {
        print_json(&StatsOutput {
            vocabulary: stats.vocabulary.into(),
            buffer: stats.buffer.into(),
        });
        return;
    }
    let row = |name: &str, s: &LayerStats| {
        let largest = s
            .largest_bucket
            .as_ref()
            .map(|(k, n)| format!("{k} ({n})"))
            .unwrap_or_else(|| "-".to_string());
        vec![
            name.to_string(),
            s.terms.to_string(),
            s.buckets.to_string(),
            largest,
        ]
    };
    let rows = vec![
        row("vocabulary", &stats.vocabulary),
        row("buffer", &stats.buffer),
    ];
    print!(
        "{}",
        table::render(&["layer", "terms", "buckets", "largest bucket"], &rows)
    );
}
