//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

use crate::mode::Mode;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

/// Fuzzy lookups below this length are never attempted.
pub const FUZZY_MIN_PREFIX_FLOOR: usize = 3;
/// Larger edit budgets make fuzzy results noise on short identifiers.
pub const FUZZY_MAX_DISTANCE_CEIL: usize = 3;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub completion: CompletionSettings,
    pub tokenizer: TokenizerSettings,
    pub ghost: GhostSettings,
    pub dropdown: DropdownSettings,
    pub fuzzy: FuzzySettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompletionSettings {
    pub mode: Mode,
    pub min_prefix_len: usize,
    pub case_sensitive: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenizerSettings {
    pub allow_dot: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GhostSettings {
    pub max_display_chars: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DropdownSettings {
    pub max_results: usize,
    pub fuzzy_fallback: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FuzzySettings {
    pub min_prefix_len: usize,
    pub max_distance: usize,
    pub scan_limit: usize,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_positive_usize {
        ($section:ident . $field:ident) => {
            if s.$section.$field == 0 {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must be positive".to_string(),
                });
            }
        };
    }

    check_positive_usize!(completion.min_prefix_len);
    check_positive_usize!(ghost.max_display_chars);
    check_positive_usize!(dropdown.max_results);
    check_positive_usize!(fuzzy.max_distance);
    check_positive_usize!(fuzzy.scan_limit);

    if s.fuzzy.min_prefix_len < FUZZY_MIN_PREFIX_FLOOR {
        return Err(SettingsError::InvalidValue {
            field: "fuzzy.min_prefix_len".to_string(),
            reason: format!("must be at least {FUZZY_MIN_PREFIX_FLOOR}"),
        });
    }
    if s.fuzzy.max_distance > FUZZY_MAX_DISTANCE_CEIL {
        return Err(SettingsError::InvalidValue {
            field: "fuzzy.max_distance".to_string(),
            reason: format!("must be at most {FUZZY_MAX_DISTANCE_CEIL}"),
        });
    }

    Ok(())
}
