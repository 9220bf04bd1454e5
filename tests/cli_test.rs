use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use stencil::cli::Args;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("stencil")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_no_args() {
    let parsed = Args::try_parse_from(make_args(&[])).unwrap();

    assert_eq!(parsed.template, None);
    assert!(!parsed.yes);
    assert!(!parsed.git);
    assert!(!parsed.install);
    assert!(!parsed.verbose);
}

#[test]
fn test_positional_template() {
    let parsed = Args::try_parse_from(make_args(&["javascript"])).unwrap();
    assert_eq!(parsed.template.as_deref(), Some("javascript"));
}

#[test]
fn test_all_flags() {
    let parsed = Args::try_parse_from(make_args(&[
        "javascript",
        "--yes",
        "--git",
        "--install",
        "--verbose",
        "--output-dir",
        "./out",
        "--holder",
        "Jane Doe",
        "--year",
        "2019",
    ]))
    .unwrap();

    assert!(parsed.yes);
    assert!(parsed.git);
    assert!(parsed.install);
    assert!(parsed.verbose);
    assert_eq!(parsed.output_dir, Some(PathBuf::from("./out")));
    assert_eq!(parsed.holder.as_deref(), Some("Jane Doe"));
    assert_eq!(parsed.year, Some(2019));
}

#[test]
fn test_short_flags() {
    let parsed = Args::try_parse_from(make_args(&["-y", "-g", "-i", "-v"])).unwrap();

    assert!(parsed.yes);
    assert!(parsed.git);
    assert!(parsed.install);
    assert!(parsed.verbose);
}

#[test]
fn test_git_url_template() {
    let parsed =
        Args::try_parse_from(make_args(&["https://github.com/user/template.git"]))
            .unwrap();
    assert_eq!(
        parsed.template.as_deref(),
        Some("https://github.com/user/template.git")
    );
}

#[test]
fn test_too_many_args() {
    assert!(Args::try_parse_from(make_args(&["javascript", "extra"])).is_err());
}
