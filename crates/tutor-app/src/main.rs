mod cli;
mod dotenv;
mod repl;

use std::path::Path;
use std::process::ExitCode;
use std::time::Duration;

use tracing_subscriber::EnvFilter;
use tutor_ai::{ConversationSession, GenerationParams, OpenAiClient, OpenAiConfig};
use tutor_common::TutorError;
use tutor_config::TutorConfig;

#[tokio::main]
async fn main() -> ExitCode {
    // Credentials may come from .env, so load it before anything reads them.
    dotenv::load_dotenv(Path::new(".env"));

    let args = cli::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("tutor: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: cli::Args) -> Result<(), TutorError> {
    let mut config = tutor_config::load_config(args.config.as_deref())?;
    init_logging(args.log_level.as_deref(), &config);

    apply_cli_overrides(&mut config, &args);
    tutor_config::validation::validate(&config)?;

    tracing::info!(
        "Tutor v{} starting (model: {})",
        env!("CARGO_PKG_VERSION"),
        config.model.name
    );

    let client = build_client(&config)?;
    let mut session = ConversationSession::new(config.session.system_prompt.clone())
        .with_params(generation_params(&config));

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    repl::run(&mut session, &client, stdin, &mut stdout).await?;

    tracing::info!(
        session = %session.id(),
        tokens = session.usage().total_tokens(),
        "Session ended"
    );
    Ok(())
}

/// Flags beat `TUTOR_MODEL`, which beats the file.
fn apply_cli_overrides(config: &mut TutorConfig, args: &cli::Args) {
    if let Some(model) = &args.model {
        config.model.name = model.clone();
    }
    if let Some(prompt) = &args.system_prompt {
        config.session.system_prompt = prompt.clone();
    }
}

fn generation_params(config: &TutorConfig) -> GenerationParams {
    GenerationParams {
        model: config.model.name.clone(),
        temperature: config.model.temperature,
        max_tokens: config.model.max_tokens,
    }
}

/// Logs go to stderr so they never interleave with the transcript.
/// `--log-level` wins over `RUST_LOG`, which wins over the config file.
fn init_logging(cli_level: Option<&str>, config: &TutorConfig) {
    let filter = match cli_level {
        Some(directive) => cli_filter(directive),
        None => EnvFilter::try_from_default_env().ok(),
    }
    .unwrap_or_else(|| {
        EnvFilter::new(format!("tutor={}", config.logging.level.as_directive()))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// The subscriber is not up yet, so a bad directive is reported on stderr.
fn cli_filter(directive: &str) -> Option<EnvFilter> {
    match EnvFilter::try_new(directive) {
        Ok(filter) => Some(filter),
        Err(e) => {
            eprintln!("tutor: ignoring --log-level {directive:?}: {e}");
            None
        }
    }
}

fn build_client(config: &TutorConfig) -> Result<OpenAiClient, TutorError> {
    let openai = OpenAiConfig::from_env(&config.api.credential_env)?
        .with_base_url(config.api.base_url.clone())
        .with_timeouts(
            Duration::from_secs(config.api.connect_timeout_secs),
            Duration::from_secs(config.api.request_timeout_secs),
        );
    Ok(OpenAiClient::new(openai)?)
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use tutor_config::validation::validate;

    use super::*;

    fn args(argv: &[&str]) -> cli::Args {
        cli::Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn model_flag_rescues_blank_model_in_file() {
        let mut config: TutorConfig = toml::from_str("[model]\nname = \"\"\n").unwrap();
        assert!(validate(&config).is_err());

        apply_cli_overrides(&mut config, &args(&["tutor", "--model", "gpt-4o-mini"]));

        assert_eq!(config.model.name, "gpt-4o-mini");
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn system_prompt_flag_rescues_blank_prompt_in_file() {
        let mut config: TutorConfig =
            toml::from_str("[session]\nsystem_prompt = \"  \"\n").unwrap();
        assert!(validate(&config).is_err());

        apply_cli_overrides(
            &mut config,
            &args(&["tutor", "--system-prompt", "You are a Rust tutor."]),
        );

        assert_eq!(config.session.system_prompt, "You are a Rust tutor.");
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn no_flags_leave_config_untouched() {
        let mut config = TutorConfig::default();
        apply_cli_overrides(&mut config, &args(&["tutor"]));
        assert_eq!(config.model.name, TutorConfig::default().model.name);
    }

    #[test]
    fn default_config_matches_default_generation_params() {
        assert_eq!(
            generation_params(&TutorConfig::default()),
            GenerationParams::default()
        );
    }

    #[test]
    fn bad_log_directive_is_rejected() {
        assert!(cli_filter("tutor=loud").is_none());
        assert!(cli_filter("tutor_ai=debug").is_some());
    }
}
