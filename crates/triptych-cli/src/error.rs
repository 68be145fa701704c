use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] triptych_core::ValidationError),

    #[error("title query must not be blank")]
    BlankQuery,

    #[error("{0}")]
    Query(String),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) | Self::BlankQuery => 2,
            Self::Query(_) => 3,
            Self::Serialization(_) | Self::Io(_) => 10,
        }
    }
}
