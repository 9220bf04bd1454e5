//! Stencil scaffolds new projects from a small registry of templates:
//! it copies (or clones) a template into a target directory, generates
//! .gitignore and LICENSE files, optionally initializes a git repository,
//! and optionally installs dependencies.

/// Command-line interface module for the stencil application
pub mod cli;

/// Error types and handling for the stencil application
pub mod error;

/// Dependency installation via the ecosystem's package manager
pub mod install;

/// Logger configuration
pub mod logger;

/// Non-clobbering copy / clone of template contents into the target
pub mod materialize;

/// Generated .gitignore and LICENSE files
pub mod metadata;

/// Per-invocation options record and its resolution
pub mod options;

/// The ordered task pipeline with enabled/skip predicates
pub mod pipeline;

/// User input and interaction handling
pub mod prompt;

/// The static template registry
pub mod registry;

/// Pipeline assembly for one scaffolding run
pub mod scaffold;

/// Template source resolution and the pre-mutation validation gate
pub mod source;

/// Git clone and repository initialization
pub mod vcs;
