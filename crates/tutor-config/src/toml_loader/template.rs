//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Tutor Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[session]
# system_prompt = "You are a friendly Python tutor for a college programming class (CIT-95). Explain concepts clearly and use beginner-friendly examples."

[model]
# name = "gpt-5-nano"      # overridden by TUTOR_MODEL or --model
# temperature = 0.7        # 0.0-2.0
# max_tokens = 500         # 1-32768

[api]
# base_url = "https://api.openai.com/v1"
# credential_env = "OPENAI_API_KEY"
# connect_timeout_secs = 10   # 1-300
# request_timeout_secs = 120  # 1-600

[logging]
# level = "INFO"           # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
