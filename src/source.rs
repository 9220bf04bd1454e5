//! Template source resolution and validation.
//! Maps a template identifier onto a local directory or a remote git
//! repository and verifies the source is reachable before any mutation
//! of the target directory begins.

use crate::error::{Error, Result};
use crate::registry::{Ecosystem, TemplateRegistry};
use log::debug;
use std::path::PathBuf;
use url::Url;

/// Represents the source location of a template.
#[derive(Debug, Clone)]
pub enum TemplateSource {
    /// Local filesystem template path
    Local(PathBuf),
    /// Remote git repository URL (HTTPS or SSH)
    Remote(String),
}

impl std::fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateSource::Local(path) => {
                write!(f, "local path: '{}'", path.display())
            }
            TemplateSource::Remote(repo) => write!(f, "remote repository: '{repo}'"),
        }
    }
}

impl TemplateSource {
    pub fn is_remote(&self) -> bool {
        matches!(self, TemplateSource::Remote(_))
    }
}

/// A validated template source paired with its ecosystem.
#[derive(Debug)]
pub struct ResolvedTemplate {
    pub source: TemplateSource,
    pub ecosystem: Ecosystem,
}

/// Returns true when the identifier is itself a repository URL rather
/// than a registry key.
fn is_remote_identifier(s: &str) -> bool {
    if let Ok(url) = Url::parse(s) {
        if url.scheme() == "https" || url.scheme() == "git" {
            return true;
        }
    }
    s.starts_with("git@")
}

/// Maps an identifier onto a template source without touching the
/// filesystem or the network. Unregistered identifiers fall back to the
/// conventional local path `<templates_root>/<lowercased identifier>`.
pub fn resolve_unchecked(
    registry: &TemplateRegistry,
    identifier: &str,
) -> ResolvedTemplate {
    if is_remote_identifier(identifier) {
        return ResolvedTemplate {
            source: TemplateSource::Remote(identifier.to_string()),
            ecosystem: Ecosystem::Node,
        };
    }

    let key = identifier.to_lowercase();
    match registry.get(&key) {
        Some(entry) => {
            let source = match entry.remote {
                Some(url) => TemplateSource::Remote(url.to_string()),
                None => TemplateSource::Local(registry.templates_root().join(&key)),
            };
            ResolvedTemplate { source, ecosystem: entry.ecosystem }
        }
        None => ResolvedTemplate {
            source: TemplateSource::Local(registry.templates_root().join(&key)),
            ecosystem: Ecosystem::Node,
        },
    }
}

/// Resolves and validates a template identifier.
///
/// This is the single gate protecting the target directory: it must
/// succeed before the pipeline is constructed, so an invalid template
/// reference can never cause partial mutation.
///
/// # Errors
/// * `Error::InvalidTemplateError` when the identifier maps to a local
///   path that does not exist or is not readable, or to a remote URL
///   that is unreachable.
pub fn resolve(registry: &TemplateRegistry, identifier: &str) -> Result<ResolvedTemplate> {
    let resolved = resolve_unchecked(registry, identifier);
    debug!("Resolved template '{}' to {}", identifier, resolved.source);
    validate(&resolved.source).map_err(|reason| Error::InvalidTemplateError {
        template: identifier.to_string(),
        reason,
    })?;
    Ok(resolved)
}

/// Checks that a template source is accessible. Returns the human-readable
/// failure reason on the error path.
pub fn validate(source: &TemplateSource) -> std::result::Result<(), String> {
    match source {
        TemplateSource::Local(path) => {
            if !path.is_dir() {
                return Err(format!("no template directory at '{}'", path.display()));
            }
            // Readability probe; permission problems surface here instead
            // of halfway through the copy.
            std::fs::read_dir(path)
                .map(|_| ())
                .map_err(|e| format!("template directory '{}' is not readable: {}", path.display(), e))
        }
        TemplateSource::Remote(url) => check_remote_reachable(url),
    }
}

/// Lightweight network existence check against the repository URL with
/// the clone suffix removed. A status outside 2xx or a connection error
/// fails validation.
fn check_remote_reachable(url: &str) -> std::result::Result<(), String> {
    let probe_url = url.trim_end_matches(".git");
    debug!("Checking remote template at '{}'", probe_url);

    let response = reqwest::blocking::get(probe_url)
        .map_err(|e| format!("could not reach '{}': {}", probe_url, e))?;

    if !response.status().is_success() {
        return Err(format!(
            "'{}' answered with status {}",
            probe_url,
            response.status()
        ));
    }
    Ok(())
}
