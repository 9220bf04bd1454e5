//! Materializing a template into the target directory.
//! Local sources are copied file by file; remote sources are cloned.
//! The copy is non-clobbering: files already present at the destination
//! are left untouched, and nothing is ever deleted.

use crate::error::{Error, Result};
use crate::source::TemplateSource;
use crate::vcs;
use log::debug;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Populates the target directory from the template source.
///
/// # Errors
/// * `Error::CopyError` on any I/O fault during a local copy
/// * `Error::GitError` when cloning a remote source fails
pub fn materialize(source: &TemplateSource, target: &Path) -> Result<()> {
    match source {
        TemplateSource::Local(template_dir) => copy_tree(template_dir, target),
        TemplateSource::Remote(url) => vcs::clone_repo(url, target),
    }
}

/// Recursively copies the template tree into the target directory,
/// creating directories as needed and skipping destination files that
/// already exist.
fn copy_tree(template_dir: &Path, target: &Path) -> Result<()> {
    fs::create_dir_all(target).map_err(Error::CopyError)?;

    for entry in WalkDir::new(template_dir) {
        let entry = entry.map_err(|e| Error::CopyError(e.into()))?;
        let relative = entry
            .path()
            .strip_prefix(template_dir)
            .map_err(|e| Error::CopyError(std::io::Error::other(e.to_string())))?;
        if relative.as_os_str().is_empty() {
            continue;
        }

        let dest = target.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&dest).map_err(Error::CopyError)?;
        } else {
            if dest.exists() {
                debug!("Keeping existing file '{}'", dest.display());
                continue;
            }
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent).map_err(Error::CopyError)?;
            }
            debug!("Copying '{}' -> '{}'", entry.path().display(), dest.display());
            fs::copy(entry.path(), &dest).map_err(Error::CopyError)?;
        }
    }
    Ok(())
}
