//! Dependency installation delegated to the ecosystem's package manager,
//! run as a subprocess scoped to the target directory.

use crate::error::{Error, Result};
use crate::registry::Ecosystem;
use log::debug;
use std::path::Path;
use std::process::Command;

fn install_command(ecosystem: Ecosystem) -> (&'static str, &'static [&'static str]) {
    match ecosystem {
        Ecosystem::Node => ("npm", &["install"]),
        Ecosystem::Python => ("pip", &["install", "-r", "requirements.txt"]),
    }
}

/// Runs the ecosystem's install command with the target directory as the
/// working directory.
///
/// # Errors
/// * `Error::InstallError` when the command cannot be spawned or exits
///   non-zero
pub fn install_dependencies(target: &Path, ecosystem: Ecosystem) -> Result<()> {
    let (program, args) = install_command(ecosystem);
    debug!("Running '{} {}' in '{}'", program, args.join(" "), target.display());

    let status = Command::new(program)
        .args(args)
        .current_dir(target)
        .status()
        .map_err(|e| Error::InstallError(format!("could not run '{}': {}", program, e)))?;

    if !status.success() {
        return Err(Error::InstallError(format!(
            "'{} {}' exited with status: {}",
            program,
            args.join(" "),
            status
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install_command_per_ecosystem() {
        let (program, args) = install_command(Ecosystem::Node);
        assert_eq!(program, "npm");
        assert_eq!(args, &["install"]);

        let (program, _) = install_command(Ecosystem::Python);
        assert_eq!(program, "pip");
    }
}
