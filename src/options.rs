//! Resolution of the per-invocation options record from command-line
//! arguments and interactive prompts. Options are constructed once and
//! treated as read-only for the rest of the run.

use crate::cli::Args;
use crate::error::{Error, Result};
use crate::prompt::Prompter;
use crate::registry::TemplateRegistry;
use chrono::Datelike;
use std::path::PathBuf;

/// Fully resolved configuration for one scaffolding run.
#[derive(Debug)]
pub struct Options {
    pub template: String,
    pub target_dir: PathBuf,
    pub git: bool,
    pub install: bool,
    pub yes: bool,
    pub holder: String,
    pub year: i32,
}

/// Builds the options record, prompting for choices the command line
/// left open. With `--yes` every prompt is answered with its default:
/// the first registry template and no git repository.
pub fn resolve(
    args: Args,
    registry: &TemplateRegistry,
    prompt: &dyn Prompter,
) -> Result<Options> {
    let template = match args.template {
        Some(template) => template,
        None if args.yes => registry
            .first_key()
            .map(str::to_string)
            .ok_or_else(|| Error::PromptError("template registry is empty".to_string()))?,
        None => {
            let labels = registry.labels();
            let choice = prompt.select("Select a template", &labels, 0)?;
            registry
                .key_for_label(&labels[choice])
                .map(str::to_string)
                .ok_or_else(|| Error::PromptError("template registry is empty".to_string()))?
        }
    };

    let git = if args.git {
        true
    } else if args.yes {
        false
    } else {
        prompt.confirm("Initialize a git repository?", false)?
    };

    let target_dir = match args.output_dir {
        Some(dir) => dir,
        None => std::env::current_dir().map_err(Error::IoError)?,
    };

    let holder = args
        .holder
        .or_else(|| std::env::var("USER").ok())
        .unwrap_or_else(|| "Unknown".to_string());

    let year = args.year.unwrap_or_else(|| chrono::Local::now().year());

    Ok(Options {
        template,
        target_dir,
        git,
        install: args.install,
        yes: args.yes,
        holder,
        year,
    })
}
