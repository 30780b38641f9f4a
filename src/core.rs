//! Core SQL Fiddler functionality
//!
//! This module contains the main SqlFiddler struct: one configured set of
//! search, ordering and pagination rules that request input is resolved against.

use std::collections::HashMap;

use crate::errors::Result;
use crate::fragments::{
    FiddlerRequest, Pagination, QueryFragments, SearchExpression, ordering, pagination,
};
use config::FiddlerConfig;

/// Fragment builder holding the allow-lists and search settings for one query
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SqlFiddler {
    search: SearchExpression,
    order_by_map: HashMap<String, String>,
    page_length_map: HashMap<String, i64>,
}

impl SqlFiddler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder from loaded configuration
    pub fn from_config(config: &FiddlerConfig) -> Self {
        let mut fiddler = Self::new()
            .configure_order_by(config.order_by.clone())
            .configure_page_length(config.page_length.clone());

        if let Some(search) = &config.search {
            fiddler = fiddler
                .configure_search(&search.template, &search.marker)
                .configure_search_mode(&search.mode);
        }

        fiddler
    }

    /// Set the search template and marker name; resets the mode to wrap (`%%`)
    pub fn configure_search(mut self, template: &str, marker_name: &str) -> Self {
        self.search = SearchExpression {
            template: template.to_string(),
            marker_name: marker_name.to_string(),
            ..SearchExpression::default()
        };
        self
    }

    /// Set the search mode alias. Unknown aliases fail when a search is built.
    pub fn configure_search_mode(mut self, mode: &str) -> Self {
        self.search.mode = mode.to_string();
        self
    }

    /// Replace the order-by allow-list
    pub fn configure_order_by(mut self, map: HashMap<String, String>) -> Self {
        self.order_by_map = map;
        self
    }

    /// Replace the page-length allow-list
    pub fn configure_page_length(mut self, map: HashMap<String, i64>) -> Self {
        self.page_length_map = map;
        self
    }

    pub fn search(&self) -> &SearchExpression {
        &self.search
    }

    pub fn order_by_map(&self) -> &HashMap<String, String> {
        &self.order_by_map
    }

    pub fn page_length_map(&self) -> &HashMap<String, i64> {
        &self.page_length_map
    }

    /// Search fragment plus the marker assignments to bind with it.
    ///
    /// Absent or blank input yields `"1"` and no markers.
    pub fn build_search(&self, user_input: Option<&str>) -> Result<(String, HashMap<String, String>)> {
        self.search.build(user_input)
    }

    pub fn resolve_order_by(&self, user_choice: Option<&str>) -> Result<String> {
        ordering::resolve_order_by(&self.order_by_map, user_choice)
    }

    pub fn resolve_page_length(&self, user_choice: Option<&str>) -> Result<i64> {
        pagination::resolve_page_length(&self.page_length_map, user_choice)
    }

    pub fn resolve_page_offset(&self, user_page: Option<&str>) -> i64 {
        pagination::resolve_page_offset(user_page)
    }

    /// Resolve every fragment of a request at once
    pub fn build(&self, request: &FiddlerRequest) -> Result<QueryFragments> {
        let (where_clause, markers) = self.build_search(request.search.as_deref())?;
        let order_by = self.resolve_order_by(request.order_by.as_deref())?;
        let limit = self.resolve_page_length(request.page_length.as_deref())?;
        let offset = self.resolve_page_offset(request.page.as_deref());

        crate::debug_log!(
            "Built fragments: where={}, markers={}, order_by={}, limit={}, offset={}",
            where_clause,
            markers.len(),
            order_by,
            limit,
            offset
        );

        Ok(QueryFragments {
            where_clause,
            markers,
            order_by,
            pagination: Pagination::new(limit, offset),
        })
    }
}
