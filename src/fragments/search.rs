//! Search expression fragments
//!
//! Turns a raw user string into a LIKE pattern bound to a named marker.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::errors::FiddlerError;

/// Fragment returned when there is nothing to search for, so `WHERE 1` still works
pub const MATCH_ALL: &str = "1";

/// Characters ignored when deciding whether the user typed a search at all
pub const BLANK_CHARS: [char; 6] = [' ', '\t', '\n', '\r', '\0', '\x0B'];

/// How the raw search value is decorated with wildcards
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchMode {
    /// `%value%`
    #[default]
    Wrap,
    /// `%value`
    Prefix,
    /// `value%`
    Suffix,
    /// value as typed, unescaped
    None,
}

impl SearchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMode::Wrap => "%%",
            SearchMode::Prefix => "%",
            SearchMode::Suffix => "s%",
            SearchMode::None => "none",
        }
    }

    /// Escape (unless `None`) and add the wildcards for this mode
    pub fn decorate(&self, raw: &str) -> String {
        match self {
            SearchMode::Wrap => format!("%{}%", escape_like(raw)),
            SearchMode::Prefix => format!("%{}", escape_like(raw)),
            SearchMode::Suffix => format!("{}%", escape_like(raw)),
            SearchMode::None => raw.to_string(),
        }
    }
}

impl FromStr for SearchMode {
    type Err = FiddlerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "%%" | "%like%" | "%s%" => Ok(SearchMode::Wrap),
            "%" | "%like" | "%s" => Ok(SearchMode::Prefix),
            "s%" | "like%" => Ok(SearchMode::Suffix),
            "n" | "none" => Ok(SearchMode::None),
            other => Err(FiddlerError::Configuration(format!(
                "Unknown search mode '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Backslash-escape the LIKE wildcards `%` and `_`
pub fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if c == '%' || c == '_' {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Search expression settings held by the builder
#[derive(Debug, Clone, PartialEq)]
pub struct SearchExpression {
    pub template: String,
    pub marker_name: String,
    /// Raw mode alias, parsed only when a search is evaluated
    pub mode: String,
}

impl Default for SearchExpression {
    fn default() -> Self {
        Self {
            template: MATCH_ALL.to_string(),
            marker_name: String::new(),
            mode: SearchMode::default().as_str().to_string(),
        }
    }
}

impl SearchExpression {
    /// Build the search fragment and its marker assignments.
    ///
    /// Input made only of `BLANK_CHARS` counts as no search; other Unicode
    /// whitespace (e.g. NBSP) is searched for like any other text.
    pub fn build(
        &self,
        user_input: Option<&str>,
    ) -> Result<(String, HashMap<String, String>), FiddlerError> {
        let raw = match user_input {
            Some(raw) if !raw.trim_matches(BLANK_CHARS).is_empty() => raw,
            _ => return Ok((MATCH_ALL.to_string(), HashMap::new())),
        };

        let mode: SearchMode = self.mode.parse()?;
        let mut markers = HashMap::with_capacity(1);
        markers.insert(format!(":{}", self.marker_name), mode.decorate(raw));

        Ok((self.template.clone(), markers))
    }
}
