//! Convenience re-exports for common SQL Fiddler usage
//!
//! # Example
//!
//! ```rust
//! use sql_fiddler::prelude::*;
//!
//! let fiddler = SqlFiddler::new();
//! assert_eq!(fiddler.resolve_page_offset(None), 0);
//! ```

pub use crate::core::SqlFiddler;
pub use crate::errors::{ChoiceMap, FiddlerError};
pub use crate::fragments::{
    DEFAULT_CHOICE, FiddlerRequest, MATCH_ALL, Pagination, QueryFragments, SearchMode, escape_like,
};

// Re-export centralized config
pub use config::{ConfigError, FiddlerConfig, SearchConfig};
