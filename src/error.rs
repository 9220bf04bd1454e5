//! Error handling for the stencil application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for stencil operations.
///
/// Each variant maps to one scaffolding concern; every error aborts the
/// remaining pipeline steps and is reported once at the top level.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    /// The template identifier is not registered, has no local directory,
    /// or its remote URL is unreachable. Raised before any mutation.
    #[error("invalid template '{template}': {reason}")]
    InvalidTemplateError { template: String, reason: String },

    /// An I/O fault while copying template files into the target directory
    #[error("failed to materialize template: {0}")]
    CopyError(#[source] io::Error),

    /// An I/O fault while writing generated metadata (.gitignore, LICENSE)
    #[error("failed to write '{path}': {source}")]
    FileWriteError {
        path: String,
        #[source]
        source: io::Error,
    },

    /// A git operation (clone, init) reported failure
    #[error("git operation failed: {0}")]
    GitError(#[from] git2::Error),

    /// The dependency installation subprocess failed
    #[error("dependency installation failed: {0}")]
    InstallError(String),

    /// Represents errors during user interaction
    #[error("prompt error: {0}")]
    PromptError(String),

    /// A pipeline task failed; carries the task name and the underlying error
    #[error("task '{task}' failed: {source}")]
    TaskError {
        task: String,
        #[source]
        source: Box<Error>,
    },
}

/// Convenience type alias for Results with stencil's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{}", err);
    std::process::exit(1);
}
