//! Error types for configuration loading

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing required environment variable: {0}")]
    MissingEnv(String),

    #[error("Invalid value for {name}: {reason}")]
    InvalidEnv { name: String, reason: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Env file error: {0}")]
    EnvFile(#[from] dotenvy::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
