use serde::de::DeserializeOwned;
use url::Url;

use crate::config::Config;
use crate::error::{ApiError, ValidationError};
use crate::project::{self, NewProject, Project};

/// The projects backend as the front-end consumes it.
pub trait ProjectsApi {
    fn list_projects(&self) -> Result<Vec<Project>, ApiError>;
    fn create_project(&self, directory_name: &str, name: &str) -> Result<Project, ApiError>;
    fn get_project(&self, directory_name: &str) -> Result<Project, ApiError>;
}

pub struct HttpApi {
    base: Url,
    agent: ureq::Agent,
}

impl HttpApi {
    pub fn new(config: &Config) -> Self {
        let agent = ureq::Agent::new_with_config(
            ureq::config::Config::builder()
                .http_status_as_error(false)
                .timeout_global(Some(config.timeout))
                .build(),
        );

        Self { base: config.api_url.clone(), agent }
    }

    /// `{base}/api/projects[/{directory_name}]`, with the identifier
    /// percent-encoded as a single path segment. Dot segments are refused
    /// because URL normalisation would drop them from the path.
    pub fn endpoint(&self, directory_name: Option<&str>) -> Result<Url, ValidationError> {
        let dir = directory_name.map(project::validate_directory_name).transpose()?;

        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(["api", "projects"]);
            if let Some(dir) = dir {
                segments.push(dir);
            }
        }
        Ok(url)
    }
}

impl ProjectsApi for HttpApi {
    fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        let url = self.endpoint(None)?;
        tracing::debug!(%url, "GET");
        read(&url, None, self.agent.get(url.as_str()).call())
    }

    fn create_project(&self, directory_name: &str, name: &str) -> Result<Project, ApiError> {
        let url = self.endpoint(Some(directory_name))?;
        tracing::debug!(%url, name, "POST");
        let result = self.agent.post(url.as_str()).send_json(&NewProject { name });
        // A 404 on create means the route is missing, not the project.
        read(&url, None, result)
    }

    fn get_project(&self, directory_name: &str) -> Result<Project, ApiError> {
        // No project can be stored under a dot segment.
        let url = self
            .endpoint(Some(directory_name))
            .map_err(|_| ApiError::NotFound(directory_name.to_string()))?;
        tracing::debug!(%url, "GET");
        read(&url, Some(directory_name), self.agent.get(url.as_str()).call())
    }
}

fn network(url: &Url, err: &ureq::Error) -> ApiError {
    tracing::warn!(%url, error = %err, "projects API request failed");
    ApiError::Network { url: url.to_string(), reason: err.to_string() }
}

fn read<T: DeserializeOwned>(
    url: &Url,
    directory_name: Option<&str>,
    result: Result<ureq::http::Response<ureq::Body>, ureq::Error>,
) -> Result<T, ApiError> {
    let mut response = result.map_err(|e| network(url, &e))?;
    let status = response.status().as_u16();
    let body = response.body_mut().read_to_vec().map_err(|e| network(url, &e))?;

    tracing::debug!(%url, status, bytes = body.len(), "response received");

    if let (404, Some(dir)) = (status, directory_name) {
        return Err(ApiError::NotFound(dir.to_string()));
    }
    if !(200..300).contains(&status) {
        tracing::warn!(%url, status, "projects API rejected request");
        let body = String::from_utf8_lossy(&body).into_owned();
        return Err(ApiError::Status { status, body });
    }

    // The reference backend answers a lookup for a missing project with `null`.
    if let (Some(dir), b"null") = (directory_name, body.trim_ascii()) {
        return Err(ApiError::NotFound(dir.to_string()));
    }

    serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!(%url, error = %e, "malformed response body");
        ApiError::Decode { url: url.to_string(), reason: e.to_string() }
    })
}
