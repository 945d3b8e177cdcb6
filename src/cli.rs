// src/cli.rs
use std::path::PathBuf;

use crate::config::options::{IdMode, IndexOptions, OutputSchema, VersionFormat};
use crate::error::IndexError;
use crate::progress::LogProgress;

pub const HELP: &str = include_str!("cli_help.txt");

pub enum Command {
    Run(IndexOptions),
    Help,
}

/// Parse process arguments and run.
pub fn run() -> Result<(), IndexError> {
    match parse_args(std::env::args().skip(1))? {
        Command::Help => {
            eprintln!("{}", HELP);
            Ok(())
        }
        Command::Run(opts) => {
            crate::log::init(opts.verbose, opts.log_file.clone());
            let mut progress = LogProgress::default();
            crate::runner::run(&opts, Some(&mut progress)).map(|_| ())
        }
    }
}

pub fn parse_args<I>(args: I) -> Result<Command, IndexError>
where
    I: IntoIterator<Item = String>,
{
    let mut opts = IndexOptions::default();
    let mut args = args.into_iter();

    while let Some(a) = args.next() {
        match a.as_str() {
            "--libraries" => opts.libraries = Some(PathBuf::from(value(&mut args, &a)?)),
            "--mappings" => opts.mappings = Some(PathBuf::from(value(&mut args, &a)?)),
            "-o" | "--out" => opts.out = PathBuf::from(value(&mut args, &a)?),
            "--schema" => {
                let v = value(&mut args, &a)?;
                opts.schema = OutputSchema::parse(&v).ok_or_else(|| unknown("schema", &v))?;
            }
            "--versions" => {
                let v = value(&mut args, &a)?;
                opts.versions = VersionFormat::parse(&v).ok_or_else(|| unknown("version format", &v))?;
            }
            "--ids" => {
                let v = value(&mut args, &a)?;
                opts.ids = IdMode::parse(&v).ok_or_else(|| unknown("id mode", &v))?;
            }
            "--no-source-links" => opts.source_links = false,
            "--versioned-only" => opts.only_versioned_rows = true,
            "--any-origin" => opts.same_origin_only = false,
            "-v" | "--verbose" => opts.verbose = true,
            "--log-file" => opts.log_file = Some(PathBuf::from(value(&mut args, &a)?)),
            "-h" | "--help" => return Ok(Command::Help),
            _ => return Err(IndexError::Usage(format!("Unknown arg: {}", a))),
        }
    }
    Ok(Command::Run(opts))
}

fn value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, IndexError> {
    args.next()
        .ok_or_else(|| IndexError::Usage(format!("Missing value for {}", flag)))
}

fn unknown(what: &str, v: &str) -> IndexError {
    IndexError::Usage(format!("Unknown {}: {}", what, v))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Command, IndexError> {
        parse_args(args.iter().map(|a| s!(*a)))
    }

    #[test]
    fn no_args_gives_defaults() {
        match parse(&[]).unwrap() {
            Command::Run(opts) => assert_eq!(opts, IndexOptions::default()),
            Command::Help => panic!("expected run"),
        }
    }

    #[test]
    fn flags_map_onto_options() {
        let cmd = parse(&[
            "--libraries", "libs.csv", "-o", "out/index.json", "--schema", "flat",
            "--versions", "level", "--ids", "seq", "--no-source-links", "--versioned-only", "-v",
        ])
        .unwrap();
        let Command::Run(opts) = cmd else { panic!("expected run") };
        assert_eq!(opts.libraries, Some(PathBuf::from("libs.csv")));
        assert_eq!(opts.out, PathBuf::from("out/index.json"));
        assert_eq!(opts.schema, OutputSchema::Flat);
        assert_eq!(opts.versions, VersionFormat::Level);
        assert_eq!(opts.ids, IdMode::Sequential);
        assert!(!opts.source_links);
        assert!(opts.only_versioned_rows);
        assert!(opts.verbose);
    }

    #[test]
    fn missing_value_and_unknown_flag_are_usage_errors() {
        assert!(matches!(parse(&["--out"]), Err(IndexError::Usage(_))));
        assert!(matches!(parse(&["--ids", "random"]), Err(IndexError::Usage(_))));
        assert!(matches!(parse(&["--frobnicate"]), Err(IndexError::Usage(_))));
    }

    #[test]
    fn help_short_circuits() {
        assert!(matches!(parse(&["--verbose", "-h", "--bogus"]), Ok(Command::Help)));
    }
}
