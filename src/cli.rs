//! Command-line interface implementation for stencil.
//! Provides argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for stencil.
#[derive(Parser, Debug)]
#[command(author, version, about = "stencil: minimal project scaffolding tool", long_about = None)]
pub struct Args {
    /// Name of the template to scaffold from (prompted for if omitted)
    #[arg(value_name = "TEMPLATE")]
    pub template: Option<String>,

    /// Directory where the generated project will be created
    #[arg(short, long, value_name = "OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Answer all prompts with their defaults
    #[arg(short, long)]
    pub yes: bool,

    /// Initialize a git repository in the output directory
    #[arg(short, long)]
    pub git: bool,

    /// Install dependencies after scaffolding
    #[arg(short, long)]
    pub install: bool,

    /// Name recorded as the copyright holder in the generated LICENSE
    #[arg(long, value_name = "NAME")]
    pub holder: Option<String>,

    /// Project creation year for the LICENSE copyright line
    #[arg(long, value_name = "YEAR")]
    pub year: Option<i32>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
pub fn get_args() -> Args {
    Args::parse()
}
