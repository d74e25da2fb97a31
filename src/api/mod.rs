//! Host-facing API: the thread-safe engine, event conversion and the
//! process-wide entry points for configuration and tracing.

mod engine;
mod types;


pub use engine::AcEngine;
pub use types::{AcError, AcEvent, AcKeyResponse};

use std::path::Path;

// ---------------------------------------------------------------------------
// Top-level functions
// ---------------------------------------------------------------------------

pub fn engine_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Install a custom settings TOML. Must run before the first engine is built.
pub fn settings_load_config(path: &str) -> Result<(), AcError> {
    let content = std::fs::read_to_string(path).map_err(|e| AcError::Io {
        msg: format!("{path}: {e}"),
    })?;
    ac_core::settings::init_custom(content)
        .map_err(|e| AcError::InvalidData { msg: e.to_string() })?;
    Ok(())
}

pub fn settings_default_config() -> String {
    ac_core::settings::DEFAULT_SETTINGS_TOML.to_string()
}

/// Start JSON tracing. Call after [`settings_load_config`], since the
/// first record reads the settings.
pub fn trace_init(log_dir: &str) {
    crate::trace_init::init_tracing(Path::new(log_dir));
}
