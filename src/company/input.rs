use anyhow::{Context, Result};
use log::{debug, warn};
use serde_json::Value;
use std::path::Path;

use super::Company;

/// Parses one company object or an array of company objects.
pub fn parse_companies(json: &str) -> Result<Vec<Company>> {
    let document: Value = serde_json::from_str(json).context("Failed to parse company records")?;

    // Decode the shape explicitly so field-level errors survive in the chain.
    let companies = if document.is_array() {
        serde_json::from_value::<Vec<Company>>(document)
    } else {
        serde_json::from_value::<Company>(document).map(|company| vec![company])
    }
    .context("Failed to parse company records")?;

    for company in &companies {
        let oversized = company.oversized_fields();
        if !oversized.is_empty() {
            warn!(
                "Company {} has fields exceeding their storage: {}",
                company.id,
                oversized.join(", ")
            );
        }
    }

    debug!("Parsed {} company records", companies.len());
    Ok(companies)
}

/// Reads and parses the company records stored at `path`.
pub fn read_companies(path: &Path) -> Result<Vec<Company>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read company records from {}", path.display()))?;
    parse_companies(&contents)
        .with_context(|| format!("Invalid company records in {}", path.display()))
}
