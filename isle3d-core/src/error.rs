/// Errors raised while setting up an island component
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum IslandError {
    #[error("asset bundle has no geometry for node `{0}`")]
    MissingGeometry(String),

    #[error("asset bundle has no material named `{0}`")]
    MissingMaterial(String),

    #[error("invalid motion config: `{field}` {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, IslandError>;
