use std::io::Write;

use anyhow::{Result, bail};

use crate::api::ProjectsApi;
use crate::render;
use crate::routes::{self, ProjectForm, Route};

use super::show;

pub fn run(api: &impl ProjectsApi, name: Option<&str>, out: &mut impl Write) -> Result<()> {
    let form = ProjectForm { name: name.map(String::from) };

    let route = match routes::add_project(api, &form) {
        Ok(route) => route,
        Err(e) => bail!(render::error(&e)),
    };

    write!(out, "{}", render::redirect(&route))?;

    // Follow the redirect the way a browser would.
    match &route {
        Route::Project(dir) => show::run(api, dir, out),
        _ => Ok(()),
    }
}
