use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub directory_name: String,
}

/// Body of the create request. The identifier travels in the path, not here.
#[derive(Debug, Serialize)]
pub struct NewProject<'a> {
    pub name: &'a str,
}

/// Canonical identifier for a project name: lower-cased, with every run of
/// whitespace collapsed into a single `-`.
pub fn directory_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_space = false;

    for c in name.chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push('-');
            }
            in_space = true;
        } else {
            out.extend(c.to_lowercase());
            in_space = false;
        }
    }

    out
}

pub fn validate_name(name: Option<&str>) -> Result<&str, ValidationError> {
    match name {
        None => Err(ValidationError::MissingName),
        Some(n) if n.trim().is_empty() => Err(ValidationError::EmptyName),
        Some(n) => Ok(n),
    }
}

/// Rejects identifiers that a URL path would collapse (`.` and `..`).
pub fn validate_directory_name(directory_name: &str) -> Result<&str, ValidationError> {
    match directory_name {
        "." | ".." => Err(ValidationError::ReservedDirectoryName(directory_name.to_string())),
        dir => Ok(dir),
    }
}
