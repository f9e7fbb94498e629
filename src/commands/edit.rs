use std::io::Write;

use anyhow::{Result, bail};

use crate::api::ProjectsApi;
use crate::render;
use crate::routes::{self, ProjectForm};

pub fn run(
    api: &impl ProjectsApi,
    directory_name: &str,
    name: Option<&str>,
    out: &mut impl Write,
) -> Result<()> {
    let project = match routes::edit(api, directory_name) {
        Ok(project) => project,
        Err(e) => bail!(render::error(&e)),
    };

    write!(out, "{}", render::edit(&project))?;

    if let Some(name) = name {
        let form = ProjectForm::with_name(name);
        if let Some(route) = routes::edit_action(directory_name, &form) {
            write!(out, "{}", render::redirect(&route))?;
        } else {
            writeln!(out, "Submitted name '{name}' was not applied.")?;
        }
    }

    Ok(())
}
