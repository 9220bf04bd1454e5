//! The template registry: a static mapping from short template keys to
//! their display label, optional remote repository URL, and ecosystem.
//! The registry is an explicitly constructed value passed into resolution,
//! not a process-wide singleton, so tests can substitute fake registries.

use indexmap::IndexMap;
use std::path::PathBuf;

/// The package ecosystem a template targets. Decides which ignore block
/// is appended to .gitignore and which package manager installs
/// dependencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ecosystem {
    Node,
    Python,
}

/// A single registry entry describing a known template.
#[derive(Debug, Clone)]
pub struct TemplateEntry {
    /// Human-readable label shown in the selection prompt
    pub label: &'static str,
    /// Remote repository URL; None means the template ships locally
    /// under `<templates_root>/<key>`
    pub remote: Option<&'static str>,
    pub ecosystem: Ecosystem,
}

/// Registry of known templates plus the root directory local templates
/// are resolved under.
#[derive(Debug)]
pub struct TemplateRegistry {
    templates_root: PathBuf,
    entries: IndexMap<&'static str, TemplateEntry>,
}

impl TemplateRegistry {
    pub fn new(
        templates_root: PathBuf,
        entries: IndexMap<&'static str, TemplateEntry>,
    ) -> Self {
        Self { templates_root, entries }
    }

    /// The built-in registry. Entry order matters: the first entry is the
    /// default choice in the interactive selection prompt.
    pub fn builtin(templates_root: PathBuf) -> Self {
        let mut entries = IndexMap::new();
        entries.insert(
            "javascript",
            TemplateEntry { label: "JavaScript", remote: None, ecosystem: Ecosystem::Node },
        );
        entries.insert(
            "typescript",
            TemplateEntry { label: "TypeScript", remote: None, ecosystem: Ecosystem::Node },
        );
        entries.insert(
            "python",
            TemplateEntry { label: "Python", remote: None, ecosystem: Ecosystem::Python },
        );
        entries.insert(
            "electron",
            TemplateEntry {
                label: "Electron",
                remote: Some("https://github.com/electron/electron-quick-start.git"),
                ecosystem: Ecosystem::Node,
            },
        );
        Self::new(templates_root, entries)
    }

    pub fn templates_root(&self) -> &PathBuf {
        &self.templates_root
    }

    pub fn get(&self, key: &str) -> Option<&TemplateEntry> {
        self.entries.get(key)
    }

    /// Key of the first registry entry, the default prompt choice.
    pub fn first_key(&self) -> Option<&'static str> {
        self.entries.keys().next().copied()
    }

    /// Labels of all registered templates, in registry order.
    pub fn labels(&self) -> Vec<String> {
        self.entries.values().map(|e| e.label.to_string()).collect()
    }

    /// Maps a selected label back to its template key.
    pub fn key_for_label(&self, label: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(_, entry)| entry.label == label)
            .map(|(key, _)| *key)
    }
}

/// Default root directory for locally shipped templates: the `templates`
/// directory next to the installed binary, overridable with the
/// STENCIL_TEMPLATES_DIR environment variable.
pub fn default_templates_root() -> PathBuf {
    if let Ok(dir) = std::env::var("STENCIL_TEMPLATES_DIR") {
        return PathBuf::from(dir);
    }
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("templates")))
        .unwrap_or_else(|| PathBuf::from("templates"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registry_order() {
        let registry = TemplateRegistry::builtin(PathBuf::from("templates"));
        let labels = registry.labels();
        assert_eq!(labels[0], "JavaScript");
        assert!(labels.contains(&"Electron".to_string()));
    }

    #[test]
    fn test_key_for_label() {
        let registry = TemplateRegistry::builtin(PathBuf::from("templates"));
        assert_eq!(registry.key_for_label("TypeScript"), Some("typescript"));
        assert_eq!(registry.key_for_label("Unknown"), None);
    }
}
