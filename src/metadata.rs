//! Generated project metadata: the .gitignore ignore block and the
//! LICENSE file with substituted copyright year(s) and holder name.

use crate::error::{Error, Result};
use crate::registry::Ecosystem;
use chrono::Datelike;
use log::debug;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

const MIT_LICENSE: &str = include_str!("../assets/MIT.txt");

const NODE_IGNORE_BLOCK: &str = "\
# Dependencies
node_modules/

# Logs
npm-debug.log*
yarn-debug.log*
yarn-error.log*

# Environment
.env
.env.local

# Build output
dist/
build/
";

const PYTHON_IGNORE_BLOCK: &str = "\
# Byte-compiled files
__pycache__/
*.py[cod]

# Environments
.env
.venv/
venv/

# Distribution
dist/
build/
*.egg-info/
";

fn ignore_block(ecosystem: Ecosystem) -> &'static str {
    match ecosystem {
        Ecosystem::Node => NODE_IGNORE_BLOCK,
        Ecosystem::Python => PYTHON_IGNORE_BLOCK,
    }
}

fn file_write_error(path: &Path, source: std::io::Error) -> Error {
    Error::FileWriteError { path: path.display().to_string(), source }
}

/// Appends the ecosystem's ignore block to `<target>/.gitignore`,
/// creating the file if absent. Existing content is never truncated.
/// The append is idempotent: when the block is already present the file
/// is left as-is, so repeated invocations do not duplicate it.
pub fn append_gitignore(target: &Path, ecosystem: Ecosystem) -> Result<()> {
    let path = target.join(".gitignore");
    let block = ignore_block(ecosystem);

    if let Ok(existing) = std::fs::read_to_string(&path) {
        if existing.contains(block) {
            debug!("Ignore block already present in '{}'", path.display());
            return Ok(());
        }
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|e| file_write_error(&path, e))?;
    file.write_all(block.as_bytes()).map_err(|e| file_write_error(&path, e))
}

/// Formats the copyright year range: the creation year alone when it is
/// the current year, otherwise "<creation> - <current>".
pub fn copyright_years(creation_year: i32, current_year: i32) -> String {
    if creation_year == current_year {
        creation_year.to_string()
    } else {
        format!("{} - {}", creation_year, current_year)
    }
}

/// Writes `<target>/LICENSE` from the MIT template with the year and
/// holder placeholders substituted, overwriting any existing file.
pub fn write_license(target: &Path, holder: &str, creation_year: i32) -> Result<()> {
    let current_year = chrono::Local::now().year();
    let years = copyright_years(creation_year, current_year);

    let content = MIT_LICENSE
        .replace("<year>", &years)
        .replace("<copyright holders>", holder);

    let path = target.join("LICENSE");
    debug!("Writing license to '{}'", path.display());
    std::fs::write(&path, content).map_err(|e| file_write_error(&path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_years_range() {
        assert_eq!(copyright_years(2019, 2024), "2019 - 2024");
    }

    #[test]
    fn test_copyright_years_single() {
        assert_eq!(copyright_years(2024, 2024), "2024");
    }

    #[test]
    fn test_ignore_block_per_ecosystem() {
        assert!(ignore_block(Ecosystem::Node).contains("node_modules/"));
        assert!(ignore_block(Ecosystem::Python).contains("__pycache__/"));
    }
}
