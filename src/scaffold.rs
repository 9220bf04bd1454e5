//! Assembly of the scaffolding pipeline for one invocation.

use crate::install::install_dependencies;
use crate::materialize::materialize;
use crate::metadata::{append_gitignore, write_license};
use crate::options::Options;
use crate::pipeline::{Pipeline, Task};
use crate::source::ResolvedTemplate;
use crate::vcs;

/// Builds the ordered pipeline: materialize, gitignore, license,
/// git init, dependency install.
///
/// Git init is enabled only when requested and the source is local; a
/// remote clone already produced an initialized repository. Dependency
/// installation is skipped unless explicitly requested.
pub fn build_pipeline<'a>(
    options: &'a Options,
    resolved: &'a ResolvedTemplate,
) -> Pipeline<'a> {
    let source = &resolved.source;
    let ecosystem = resolved.ecosystem;
    let target = options.target_dir.as_path();

    Pipeline::new(vec![
        Task::new("materialize template", move || materialize(source, target)),
        Task::new("generate .gitignore", move || append_gitignore(target, ecosystem)),
        Task::new("write LICENSE", move || {
            write_license(target, &options.holder, options.year)
        }),
        Task::new("initialize git repository", move || vcs::init_repo(target))
            .enabled_if(move || options.git && !source.is_remote()),
        Task::new("install dependencies", move || {
            install_dependencies(target, ecosystem)
        })
        .skip_if(move || {
            if options.install {
                None
            } else {
                Some("pass --install to automatically install dependencies".to_string())
            }
        }),
    ])
}
