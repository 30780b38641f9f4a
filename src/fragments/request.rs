//! One-shot request resolution types

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::fragments::pagination::Pagination;

/// Raw user input for a listing query, typically deserialized from a query string
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FiddlerRequest {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub order_by: Option<String>,
    #[serde(default)]
    pub page_length: Option<String>,
    #[serde(default)]
    pub page: Option<String>,
}

impl FiddlerRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: &str) -> Self {
        self.search = Some(search.to_string());
        self
    }

    pub fn with_order_by(mut self, order_by: &str) -> Self {
        self.order_by = Some(order_by.to_string());
        self
    }

    pub fn with_page_length(mut self, page_length: &str) -> Self {
        self.page_length = Some(page_length.to_string());
        self
    }

    pub fn with_page(mut self, page: &str) -> Self {
        self.page = Some(page.to_string());
        self
    }
}

/// Every fragment needed to finish a listing query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryFragments {
    /// Search predicate, `"1"` when there is no search
    pub where_clause: String,
    /// Marker assignments to bind alongside `where_clause`
    pub markers: HashMap<String, String>,
    pub order_by: String,
    pub pagination: Pagination,
}
