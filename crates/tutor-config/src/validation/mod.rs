//! Configuration validation.
//!
//! Each section has its own check; all errors are collected into a single
//! `ConfigError` so a user sees every problem at once.

mod helpers;


use crate::schema::TutorConfig;
use tutor_common::ConfigError;

use helpers::{require_non_empty, validate_range, validate_range_f64};

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &TutorConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_session(&mut errors, config);
    validate_model(&mut errors, config);
    validate_api(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_session(errors: &mut Vec<String>, config: &TutorConfig) {
    require_non_empty(errors, "session.system_prompt", &config.session.system_prompt);
}

fn validate_model(errors: &mut Vec<String>, config: &TutorConfig) {
    require_non_empty(errors, "model.name", &config.model.name);
    validate_range_f64(errors, "model.temperature", config.model.temperature, 0.0, 2.0);
    validate_range(errors, "model.max_tokens", u64::from(config.model.max_tokens), 1, 32768);
}

fn validate_api(errors: &mut Vec<String>, config: &TutorConfig) {
    let url = &config.api.base_url;
    if !(url.starts_with("https://") || url.starts_with("http://")) {
        errors.push(format!("api.base_url = {url:?} must start with http:// or https://"));
    }
    require_non_empty(errors, "api.credential_env", &config.api.credential_env);
    validate_range(
        errors,
        "api.connect_timeout_secs",
        config.api.connect_timeout_secs,
        1,
        300,
    );
    validate_range(
        errors,
        "api.request_timeout_secs",
        config.api.request_timeout_secs,
        1,
        600,
    );
}
