//! Allow-listed choice lookups
//!
//! ORDER BY fragments (and page lengths, see `pagination`) are never taken
//! from user input directly; the user only picks a key in a configured map.

use std::collections::HashMap;

use crate::errors::{ChoiceMap, FiddlerError};

pub use config::DEFAULT_CHOICE;

/// Look a user choice up in an allow-list, falling back to `_default` when absent
pub(crate) fn resolve_choice<'a, V>(
    map: &'a HashMap<String, V>,
    kind: ChoiceMap,
    user_choice: Option<&str>,
) -> Result<&'a V, FiddlerError> {
    let choice = user_choice.unwrap_or(DEFAULT_CHOICE);

    match map.get(choice) {
        Some(value) => {
            crate::trace_log!("Resolved {} choice '{}'", kind, choice);
            Ok(value)
        }
        None => {
            tracing::warn!("No value found in the {} map for user choice {}", kind, choice);
            Err(FiddlerError::UnknownChoice {
                map: kind,
                choice: choice.to_string(),
            })
        }
    }
}

/// Resolve the ORDER BY fragment for a user choice
pub fn resolve_order_by(
    map: &HashMap<String, String>,
    user_choice: Option<&str>,
) -> Result<String, FiddlerError> {
    resolve_choice(map, ChoiceMap::OrderBy, user_choice).cloned()
}
