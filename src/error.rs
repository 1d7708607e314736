//! Error types for the pinterest API service

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid profile: {0}")]
    InvalidProfile(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    pub fn invalid_profile(msg: impl Into<String>) -> Self {
        Error::InvalidProfile(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }
}
