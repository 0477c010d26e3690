//! Tutor configuration system.
//!
//! TOML-based configuration with environment overrides and full
//! validation. All config sections use defaults so partial configs work
//! out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! let config = tutor_config::load_config(None).expect("failed to load config");
//! tutor_config::validation::validate(&config).expect("invalid config");
//! println!("model: {}", config.model.name);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{TutorConfig, CONFIG_SCHEMA_VERSION, DEFAULT_SYSTEM_PROMPT};

use std::path::Path;

use tutor_common::ConfigError;

/// Environment variable that overrides `model.name`.
pub const MODEL_ENV: &str = "TUTOR_MODEL";

/// Load the config and apply environment overrides.
///
/// An explicit `path` must exist. Without one, `config.toml` is read from
/// the OS config directory and created with defaults if missing.
///
/// The result is not validated: callers layer their own overrides on top
/// and then run [`validation::validate`] once.
pub fn load_config(path: Option<&Path>) -> Result<TutorConfig, ConfigError> {
    let mut config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    Ok(config)
}

/// Apply environment overrides using `lookup` to read variables.
pub fn apply_env_overrides(config: &mut TutorConfig, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(model) = lookup(MODEL_ENV).filter(|m| !m.trim().is_empty()) {
        tracing::info!(model = %model, "model overridden by {MODEL_ENV}");
        config.model.name = model;
    }
}
