//! Tests for the diff command.

use super::{RunOptions, execute, run};
use crate::cli::Cli;
use clap::Parser;
use mindiff::config::{Config, OutputFormat};
use mindiff::error::MindiffError;
use mindiff::exit_codes;
use mindiff::loader::Source;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_input(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

fn parse(args: &[&str]) -> Cli {
    let mut argv = vec!["mindiff"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap()
}

fn fruit_inputs(dir: &Path) -> (PathBuf, PathBuf) {
    let old = write_input(
        dir,
        "old.txt",
        "apple\ncherry\nraspberry\norange\npeach\nlemon\n",
    );
    let new = write_input(
        dir,
        "new.txt",
        "apple\nbanana\ncherry\nstrawberry\norange\nlemon\n",
    );
    (old, new)
}

#[test]
fn test_run_writes_text_output() {
    let temp = TempDir::new().unwrap();
    let (old, new) = fruit_inputs(temp.path());
    let out = temp.path().join("out.diff");

    let cli = parse(&[
        old.to_str().unwrap(),
        new.to_str().unwrap(),
        "-o",
        out.to_str().unwrap(),
    ]);
    let code = run(cli).unwrap();

    assert_eq!(code, exit_codes::SUCCESS);
    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        "  apple\n+ banana\n  cherry\n! strawberry\n  orange\n- peach\n  lemon\n"
    );
}

#[test]
fn test_exit_code_flag_reports_differences() {
    let temp = TempDir::new().unwrap();
    let (old, new) = fruit_inputs(temp.path());
    let out = temp.path().join("out.diff");

    let cli = parse(&[
        "--exit-code",
        "-o",
        out.to_str().unwrap(),
        old.to_str().unwrap(),
        new.to_str().unwrap(),
    ]);
    assert_eq!(run(cli).unwrap(), exit_codes::DIFFERENCES_FOUND);

    let cli = parse(&[
        "--exit-code",
        "-o",
        out.to_str().unwrap(),
        old.to_str().unwrap(),
        old.to_str().unwrap(),
    ]);
    assert_eq!(run(cli).unwrap(), exit_codes::SUCCESS);
}

#[test]
fn test_json_format_from_flag() {
    let temp = TempDir::new().unwrap();
    let old = write_input(temp.path(), "a.txt", "one\n");
    let new = write_input(temp.path(), "b.txt", "two\n");
    let out = temp.path().join("out.ndjson");

    let cli = parse(&[
        "--format",
        "json",
        "-o",
        out.to_str().unwrap(),
        old.to_str().unwrap(),
        new.to_str().unwrap(),
    ]);
    run(cli).unwrap();

    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        "{\"marker\":\"changed\",\"content\":\"two\"}\n"
    );
}

#[test]
fn test_config_file_sets_prefixes_and_format_flag_overrides() {
    let temp = TempDir::new().unwrap();
    let old = write_input(temp.path(), "a.txt", "keep\nold\n");
    let new = write_input(temp.path(), "b.txt", "keep\nnew\n");
    let config = write_input(
        temp.path(),
        "mindiff.yaml",
        "format: json\nprefixes:\n  unchanged: \"= \"\n  changed: \"~ \"\n",
    );
    let out = temp.path().join("out.diff");

    let cli = parse(&[
        "--config",
        config.to_str().unwrap(),
        "--format",
        "text",
        "-o",
        out.to_str().unwrap(),
        old.to_str().unwrap(),
        new.to_str().unwrap(),
    ]);
    run(cli).unwrap();

    assert_eq!(fs::read_to_string(&out).unwrap(), "= keep\n~ new\n");
}

#[test]
fn test_invalid_config_is_config_error() {
    let temp = TempDir::new().unwrap();
    let config = write_input(temp.path(), "bad.yaml", "max_lines: 0\n");

    let cli = parse(&["--config", config.to_str().unwrap(), "a", "b"]);
    let err = run(cli).unwrap_err();

    assert!(matches!(err, MindiffError::Config(_)));
    assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
}

#[test]
fn test_max_lines_flag_overrides_config() {
    let config = Config {
        max_lines: Some(100),
        ..Config::default()
    };
    let options = RunOptions::from_cli(parse(&["--max-lines", "2", "a", "b"]), config).unwrap();
    assert_eq!(options.config.max_lines, Some(2));

    let err = RunOptions::from_cli(parse(&["--max-lines", "0", "a", "b"]), Config::default())
        .unwrap_err();
    assert!(matches!(err, MindiffError::UserError(_)));
}

#[test]
fn test_oversized_input_aborts_before_output() {
    let temp = TempDir::new().unwrap();
    let (old, new) = fruit_inputs(temp.path());
    let out = temp.path().join("out.diff");

    let cli = parse(&[
        "--max-lines",
        "3",
        "-o",
        out.to_str().unwrap(),
        old.to_str().unwrap(),
        new.to_str().unwrap(),
    ]);
    let err = run(cli).unwrap_err();

    assert!(matches!(
        err,
        MindiffError::InputTooLarge {
            lines: 6,
            limit: 3,
            ..
        }
    ));
    assert!(!out.exists());
}

#[test]
fn test_missing_input_is_input_error() {
    let temp = TempDir::new().unwrap();
    let new = write_input(temp.path(), "new.txt", "x\n");
    let missing = temp.path().join("missing.txt");

    let cli = parse(&[missing.to_str().unwrap(), new.to_str().unwrap()]);
    let err = run(cli).unwrap_err();

    assert_eq!(err.exit_code(), exit_codes::INPUT_FAILURE);
}

#[test]
fn test_both_operands_stdin_rejected() {
    let err = RunOptions::from_cli(parse(&["-", "-"]), Config::default()).unwrap_err();
    assert!(matches!(err, MindiffError::UserError(_)));
}

#[test]
fn test_format_defaults_to_config_value() {
    let config = Config {
        format: OutputFormat::Json,
        ..Config::default()
    };
    let options = RunOptions::from_cli(parse(&["-", "b.txt"]), config).unwrap();

    assert_eq!(options.format, OutputFormat::Json);
    assert_eq!(options.old, Source::Stdin);
    assert_eq!(options.new, Source::Path(PathBuf::from("b.txt")));
}

#[test]
fn test_execute_empty_inputs_writes_empty_output() {
    let temp = TempDir::new().unwrap();
    let old = write_input(temp.path(), "a.txt", "");
    let new = write_input(temp.path(), "b.txt", "");
    let out = temp.path().join("out.diff");

    let options = RunOptions {
        old: Source::Path(old),
        new: Source::Path(new),
        output: Some(out.clone()),
        format: OutputFormat::Text,
        config: Config::default(),
        exit_code: true,
    };

    assert_eq!(execute(&options).unwrap(), exit_codes::SUCCESS);
    assert_eq!(fs::read_to_string(&out).unwrap(), "");
}
