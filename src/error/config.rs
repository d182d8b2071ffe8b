use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined.
    /// Check `.env.example` for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// A configured URL failed to parse.
    #[error("Invalid URL in configuration: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
