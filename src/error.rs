use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("missing credential: {0} is not set")]
    MissingCredential(&'static str),

    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("secret not found: {0}")]
    SecretNotFound(String),

    #[error("secret is empty: {0}")]
    SecretEmpty(String),

    #[error("value for {0} contains a line break and cannot be emitted")]
    EmbeddedNewline(String),

    #[error("secret store error: {0}")]
    Store(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ResolveError>;
