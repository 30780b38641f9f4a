//! Fragment building utilities
//!
//! This module provides the search, ordering and pagination fragments.

pub mod ordering;
pub mod pagination;
pub mod request;
pub mod search;


pub use ordering::{DEFAULT_CHOICE, resolve_order_by};
pub use pagination::{Pagination, resolve_page_length, resolve_page_offset};
pub use request::{FiddlerRequest, QueryFragments};
pub use search::{MATCH_ALL, SearchExpression, SearchMode, escape_like};
