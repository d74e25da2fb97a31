//! Plain-text term lists.
//!
//! One term per line, UTF-8. Blank lines and lines starting with `#` are
//! skipped; surrounding whitespace is trimmed. Used for the optional user
//! dictionary that extends the vocabulary layer.


use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid UTF-8 at line {line}")]
    InvalidEncoding { line: usize },
}

/// Terms listed in `content`, in file order.
pub fn parse_term_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Read a term list from disk. A missing file is an empty list.
pub fn read_term_file(path: &Path) -> Result<Vec<String>, DictError> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };
    let content = String::from_utf8(bytes).map_err(|e| {
        let valid = &e.as_bytes()[..e.utf8_error().valid_up_to()];
        DictError::InvalidEncoding {
            line: valid.iter().filter(|&&b| b == b'\n').count() + 1,
        }
    })?;
    let terms = parse_term_list(&content);
    debug!(path = %path.display(), terms = terms.len(), "term list read");
    Ok(terms)
}
