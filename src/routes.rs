//! Loaders and actions behind each navigable view.
//!
//! Every function performs at most one round trip through [`ProjectsApi`]
//! and returns a typed result; the caller picks the view to render.

use std::fmt;

use crate::api::ProjectsApi;
use crate::error::ApiError;
use crate::project::{self, Project};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Index,
    AddProject,
    Project(String),
    Edit(String),
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index => write!(f, "/"),
            Self::AddProject => write!(f, "/add-project"),
            Self::Project(dir) => write!(f, "/project/{dir}"),
            Self::Edit(dir) => write!(f, "/edit/{dir}"),
        }
    }
}

/// The creation form as submitted. `name` is `None` when the field is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectForm {
    pub name: Option<String>,
}

impl ProjectForm {
    pub fn with_name(name: impl Into<String>) -> Self {
        Self { name: Some(name.into()) }
    }
}

/// List view loader. Order is whatever the API returns.
pub fn index(api: &impl ProjectsApi) -> Result<Vec<Project>, ApiError> {
    api.list_projects()
}

/// Creation form action. On success, redirects to the detail view of the
/// identifier the API returned.
pub fn add_project(api: &impl ProjectsApi, form: &ProjectForm) -> Result<Route, ApiError> {
    let name = project::validate_name(form.name.as_deref())?;
    let directory_name = project::directory_name(name);
    project::validate_directory_name(&directory_name)?;

    let created = api.create_project(&directory_name, name)?;
    if created.directory_name != directory_name {
        tracing::warn!(sent = %directory_name, returned = %created.directory_name, "identifier mismatch");
        return Err(ApiError::IdentifierMismatch {
            sent: directory_name,
            returned: created.directory_name,
        });
    }

    tracing::info!(directory_name = %created.directory_name, "project created");
    Ok(Route::Project(created.directory_name))
}

/// Detail view loader.
pub fn project(api: &impl ProjectsApi, directory_name: &str) -> Result<Project, ApiError> {
    api.get_project(directory_name)
}

/// Edit view loader. Projects are read-only, so there is no matching write.
pub fn edit(api: &impl ProjectsApi, directory_name: &str) -> Result<Project, ApiError> {
    api.get_project(directory_name)
}

/// Edit form action. Accepts the submission and changes nothing; the view
/// stays where it is.
pub fn edit_action(directory_name: &str, form: &ProjectForm) -> Option<Route> {
    tracing::info!(directory_name, submitted = ?form.name, "edit submitted; projects are read-only");
    None
}
