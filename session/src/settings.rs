//! Startup settings loader.
//!
//! Reads a JSON settings file into a [`Config`]. Every field is extracted
//! individually: a missing or malformed value falls back to its literal
//! default instead of failing, so a broken settings file can never keep the
//! simulator from starting.

use std::fs;
use std::path::Path;

use court_core::Config;
use serde_json::Value;

/// Load settings from `path`; a missing or unreadable file yields defaults
pub fn load_config(path: &Path) -> Config {
    match fs::read_to_string(path) {
        Ok(text) => config_from_str(&text),
        Err(err) => {
            log::info!("settings file {path:?} not loaded ({err}), using defaults");
            Config::default()
        }
    }
}

/// Parse settings from JSON text; unparseable text yields defaults
pub fn config_from_str(text: &str) -> Config {
    match serde_json::from_str::<Value>(text) {
        Ok(value) => config_from_value(&value),
        Err(err) => {
            log::warn!("settings are not valid JSON ({err}), using defaults");
            Config::default()
        }
    }
}

/// Build a config from a parsed JSON value, field by field
pub fn config_from_value(value: &Value) -> Config {
    let defaults = Config::default();
    Config {
        default_force: field(value, "default_force", defaults.default_force),
        default_angle: field(value, "default_angle", defaults.default_angle),
        angle_step: field(value, "angle_step", defaults.angle_step),
        default_spin: field(value, "default_spin", defaults.default_spin),
        spin_step: field(value, "spin_step", defaults.spin_step),
        spin_min: field(value, "spin_min", defaults.spin_min),
        spin_max: field(value, "spin_max", defaults.spin_max),
        default_pace: field(value, "default_pace", defaults.default_pace),
        defender_speed: field(value, "defender_speed", defaults.defender_speed),
    }
}

fn field(value: &Value, key: &str, fallback: f32) -> f32 {
    value
        .get(key)
        .and_then(Value::as_f64)
        .map(|v| v as f32)
        .unwrap_or(fallback)
}
