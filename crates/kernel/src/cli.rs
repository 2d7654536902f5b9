//! CLI command implementations.
//!
//! These commands run the listing core directly, without starting the
//! server or contacting the listing backend.

use anyhow::{Context, Result};

use crate::catalog::{SearchParams, build_query_variables};

/// Validate a listing query string.
///
/// Returns the JSON query variables for a valid query, or the canonical
/// redirect target and the offending parameters for an invalid one.
pub fn cmd_check_query(query: &str, path: &str) -> Result<String> {
    let params = SearchParams::parse(query);
    match build_query_variables(&params) {
        Ok(variables) => {
            let json = serde_json::to_string_pretty(&variables)
                .context("failed to encode query variables")?;
            Ok(format!("valid\n{json}"))
        }
        Err(redirect) => {
            let invalid: Vec<String> = redirect.invalid.iter().map(|d| d.to_string()).collect();
            Ok(format!(
                "redirect {}\ninvalid: {}",
                redirect.location(path),
                invalid.join(", ")
            ))
        }
    }
}
