use thiserror::Error;

/// Errors at the configuration edge
///
/// The state machine itself has no failure modes; every tracker operation is
/// total over its domain.
#[derive(Error, Debug)]
pub enum BonusError {
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ParseError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, BonusError>;
