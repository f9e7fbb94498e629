use std::io::Write;

use anyhow::{Result, bail};

use crate::api::ProjectsApi;
use crate::{render, routes};

pub fn run(api: &impl ProjectsApi, directory_name: &str, out: &mut impl Write) -> Result<()> {
    match routes::project(api, directory_name) {
        Ok(project) => {
            write!(out, "{}", render::project(&project))?;
            Ok(())
        }
        Err(e) => bail!(render::error(&e)),
    }
}
