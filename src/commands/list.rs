use std::io::Write;

use anyhow::{Result, bail};

use crate::api::ProjectsApi;
use crate::{render, routes};

pub fn run(api: &impl ProjectsApi, out: &mut impl Write) -> Result<()> {
    match routes::index(api) {
        Ok(projects) => {
            write!(out, "{}", render::index(&projects))?;
            Ok(())
        }
        Err(e) => bail!(render::error(&e)),
    }
}
