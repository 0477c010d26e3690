use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("missing credential: {0}")]
    MissingCredential(String),
}

#[derive(Debug, thiserror::Error)]
pub enum TutorError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("model.temperature = 3 is out of range".into());
        assert_eq!(
            err.to_string(),
            "config validation error: model.temperature = 3 is out of range"
        );

        let err = ConfigError::MissingCredential("OPENAI_API_KEY is not set".into());
        assert_eq!(err.to_string(), "missing credential: OPENAI_API_KEY is not set");
    }

    #[test]
    fn tutor_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: TutorError = config_err.into();
        assert!(matches!(err, TutorError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn tutor_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdout closed");
        let err: TutorError = io_err.into();
        assert!(matches!(err, TutorError::Io(_)));
        assert!(err.to_string().contains("stdout closed"));
    }
}
