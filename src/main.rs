//! Stencil's main application entry point and orchestration logic.
//! Parses arguments, resolves options and the template source, then
//! drives the scaffolding pipeline.

use stencil::{
    cli::get_args,
    error::{default_error_handler, Result},
    logger::init_logger,
    options,
    prompt::DialoguerPrompter,
    registry::{default_templates_root, TemplateRegistry},
    scaffold::build_pipeline,
    source,
};

fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn run(args: stencil::cli::Args) -> Result<()> {
    let prompt = DialoguerPrompter::new();
    let registry = TemplateRegistry::builtin(default_templates_root());

    let options = options::resolve(args, &registry, &prompt)?;

    // Validation gate: nothing under the target directory is touched
    // until the template source has been confirmed accessible.
    let resolved = source::resolve(&registry, &options.template)?;
    println!("Using template from the {}", resolved.source);

    build_pipeline(&options, &resolved).run()?;

    println!(
        "Project scaffolded successfully in {}.",
        options.target_dir.display()
    );
    Ok(())
}
