use std::fmt::Write;

use crate::error::ApiError;
use crate::project::Project;
use crate::routes::Route;

pub const ADD_PROJECT: &str = "Add Project";

pub fn index(projects: &[Project]) -> String {
    let mut out = String::new();

    if projects.is_empty() {
        out.push_str("No projects yet.\n");
    }
    for p in projects {
        let _ = writeln!(out, "{:<40} {}", p.name, Route::Edit(p.directory_name.clone()));
    }

    let _ = writeln!(out, "\n[{ADD_PROJECT}] {}", Route::AddProject);
    out
}

pub fn project(p: &Project) -> String {
    format!("{}\n{}\n  directory: {}\n", p.name, "─".repeat(p.name.chars().count().max(8)), p.directory_name)
}

/// Current values shown as the edit form would prefill them.
pub fn edit(p: &Project) -> String {
    let mut out = format!("Editing {}\n", Route::Edit(p.directory_name.clone()));
    let _ = writeln!(out, "  name: {}", p.name);
    out.push_str("\nProjects are read-only; submitting this form changes nothing.\n");
    out
}

pub fn redirect(route: &Route) -> String {
    format!("→ {route}\n")
}

/// Picks the failure view for `err`.
pub fn error(err: &ApiError) -> String {
    match err {
        ApiError::Validation(e) => format!("Cannot submit: {e}."),
        ApiError::NotFound(dir) => {
            format!("Not found: no project named '{dir}'. See {} for existing projects.", Route::Index)
        }
        ApiError::Network { url, reason } => {
            format!("Could not reach the projects API at {url} ({reason}). Check that it is running and try again.")
        }
        ApiError::Decode { url, reason } => {
            format!("The projects API at {url} sent a response that could not be read: {reason}")
        }
        ApiError::Status { status, body } if err.is_retryable() => {
            format!("The projects API failed (HTTP {status}): {}. Try again later.", body.trim())
        }
        ApiError::Status { status, body } => format!("The projects API refused the request (HTTP {status}): {}", body.trim()),
        ApiError::IdentifierMismatch { sent, returned } => {
            format!("Created '{returned}' but expected '{sent}'; the API derives identifiers differently.")
        }
    }
}
