//! Version-control operations: cloning remote templates and initializing
//! fresh repositories in the target directory.

use crate::error::{Error, Result};
use log::debug;
use std::path::Path;

/// Clones a remote template repository into the target directory.
///
/// The clone doubles as materialization for remote sources and leaves
/// the target directory as an already-initialized repository.
pub fn clone_repo(url: &str, target: &Path) -> Result<()> {
    debug!("Cloning '{}' into '{}'", url, target.display());

    let mut callbacks = git2::RemoteCallbacks::new();
    callbacks.credentials(|_url, username_from_url, _allowed_types| {
        git2::Cred::ssh_key(
            username_from_url.unwrap_or("git"),
            None,
            Path::new(&format!(
                "{}/.ssh/id_rsa",
                std::env::var("HOME").unwrap_or_default()
            )),
            None,
        )
    });

    let mut fetch_opts = git2::FetchOptions::new();
    fetch_opts.remote_callbacks(callbacks);

    let mut builder = git2::build::RepoBuilder::new();
    builder.fetch_options(fetch_opts);

    builder.clone(url, target).map_err(Error::GitError)?;
    Ok(())
}

/// Initializes a new, empty repository in the target directory.
pub fn init_repo(target: &Path) -> Result<()> {
    debug!("Initializing repository in '{}'", target.display());
    git2::Repository::init(target).map_err(Error::GitError)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_repo_creates_git_dir() {
        let temp_dir = TempDir::new().unwrap();
        init_repo(temp_dir.path()).unwrap();
        assert!(temp_dir.path().join(".git").is_dir());
    }

    #[test]
    fn test_init_repo_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        init_repo(temp_dir.path()).unwrap();
        // Re-init of an existing repository is not an error.
        init_repo(temp_dir.path()).unwrap();
    }
}
