//! # SQL Fiddler
//!
//! Builds the user-driven parts of a listing query (a search predicate, an
//! ORDER BY clause and LIMIT/OFFSET values) without ever splicing user text
//! into SQL. Search input is bound to a named marker; ordering and page
//! length are picked from allow-lists.
//!
//! ## Quick Start
//!
//! ```rust
//! use sql_fiddler::prelude::*;
//! use std::collections::HashMap;
//!
//! let fiddler = SqlFiddler::new()
//!     .configure_search("title LIKE :search", "search")
//!     .configure_order_by(HashMap::from([
//!         ("_default".to_string(), "id DESC".to_string()),
//!         ("title".to_string(), "title ASC".to_string()),
//!     ]))
//!     .configure_page_length(HashMap::from([("_default".to_string(), 20)]));
//!
//! let (where_clause, markers) = fiddler.build_search(Some("50%_off"))?;
//! let order_by = fiddler.resolve_order_by(Some("title"))?;
//! let limit = fiddler.resolve_page_length(None)?;
//! let offset = fiddler.resolve_page_offset(Some("3"));
//!
//! let sql = format!(
//!     "SELECT * FROM product WHERE {} ORDER BY {} LIMIT {} OFFSET {}",
//!     where_clause, order_by, limit, offset
//! );
//! assert_eq!(
//!     sql,
//!     "SELECT * FROM product WHERE title LIKE :search ORDER BY title ASC LIMIT 20 OFFSET 2"
//! );
//! assert_eq!(markers[":search"], "%50\\%\\_off%");
//! # Ok::<(), FiddlerError>(())
//! ```

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod core;
pub mod errors;
pub mod fragments;
pub mod prelude;

// Re-export the main public types for convenience
pub use crate::core::SqlFiddler;
pub use errors::{ChoiceMap, FiddlerError};
pub use fragments::{FiddlerRequest, Pagination, QueryFragments, SearchMode};

// Re-export centralized config
pub use config::{ConfigError, FiddlerConfig, SearchConfig};
