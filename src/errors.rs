//! Error types for the SQL Fiddler crate
//!
//! This module contains all error types that can be returned while building fragments.

use std::fmt;
use thiserror::Error;

/// Which allow-list a choice was looked up in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceMap {
    OrderBy,
    PageLength,
}

impl fmt::Display for ChoiceMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChoiceMap::OrderBy => write!(f, "orderBy"),
            ChoiceMap::PageLength => write!(f, "pageLength"),
        }
    }
}

#[derive(Error, Debug)]
pub enum FiddlerError {
    /// The builder was configured with a value it cannot evaluate
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The user picked a key that is not in the allow-list
    #[error("No value found in the {map} map for user choice {choice}.")]
    UnknownChoice { map: ChoiceMap, choice: String },

    #[error("Config loading error: {0}")]
    Config(#[from] config::ConfigError),
}

impl FiddlerError {
    /// The offending user choice, if this is an [`FiddlerError::UnknownChoice`]
    pub fn choice(&self) -> Option<&str> {
        match self {
            FiddlerError::UnknownChoice { choice, .. } => Some(choice),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, FiddlerError>;
