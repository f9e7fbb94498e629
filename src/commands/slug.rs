use std::io::Write;

use anyhow::Result;

use crate::project;

pub fn run(name: &str, out: &mut impl Write) -> Result<()> {
    let validated = project::validate_name(Some(name))?;
    writeln!(out, "{}", project::directory_name(validated))?;
    Ok(())
}
