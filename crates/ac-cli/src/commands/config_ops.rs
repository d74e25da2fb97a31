use std::fs;
use std::process;

use super::die;

pub fn settings_export() {
    print!("{}", ac_engine::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        ac_engine::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: completion.mode={}, dropdown.max_results={}, fuzzy.max_distance={}",
        s.completion.mode, s.dropdown.max_results, s.fuzzy.max_distance
    );
}
