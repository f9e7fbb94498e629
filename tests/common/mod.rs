#![allow(dead_code)]

use std::cell::{Cell, RefCell};

use mango_projects::api::ProjectsApi;
use mango_projects::error::ApiError;
use mango_projects::project::Project;

/// In-memory backend that derives identifiers like the reference API and
/// counts every call.
#[derive(Default)]
pub struct FakeApi {
    pub projects: RefCell<Vec<Project>>,
    pub calls: Cell<usize>,
    pub rename_to: Option<String>,
    pub unreachable: bool,
}

impl FakeApi {
    pub fn with(projects: &[(&str, &str)]) -> Self {
        let projects = projects
            .iter()
            .map(|(name, dir)| Project { name: (*name).into(), directory_name: (*dir).into() })
            .collect();
        Self { projects: RefCell::new(projects), ..Self::default() }
    }

    fn hit(&self) -> Result<(), ApiError> {
        self.calls.set(self.calls.get() + 1);
        if self.unreachable {
            return Err(ApiError::Network {
                url: "http://localhost:5000/api/projects".into(),
                reason: "connection refused".into(),
            });
        }
        Ok(())
    }
}

impl ProjectsApi for FakeApi {
    fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        self.hit()?;
        Ok(self.projects.borrow().clone())
    }

    fn create_project(&self, directory_name: &str, name: &str) -> Result<Project, ApiError> {
        self.hit()?;
        if self.projects.borrow().iter().any(|p| p.directory_name == directory_name) {
            return Err(ApiError::Status { status: 400, body: "Project already exists".into() });
        }
        let project = Project {
            name: name.into(),
            directory_name: self.rename_to.clone().unwrap_or_else(|| directory_name.into()),
        };
        self.projects.borrow_mut().push(project.clone());
        Ok(project)
    }

    fn get_project(&self, directory_name: &str) -> Result<Project, ApiError> {
        self.hit()?;
        self.projects
            .borrow()
            .iter()
            .find(|p| p.directory_name == directory_name)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(directory_name.into()))
    }
}
