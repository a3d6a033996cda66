// random_order: command line interface
// usage: random_order [--in-file path] [--out-file path] [--seed n] [--strict] [--log filter] size
//
// Open Source licensing under terms of GNU General Public License version 3
// SPDX identifier: GPL-3.0-only
// https://opensource.org/licenses/GPL-3.0
// https://www.gnu.org/licenses/gpl-3.0.en.html

use crate::{
    error::FixtureError,
    fixture::{FixturePaths, DEFAULT_IN_FILE, DEFAULT_OUT_FILE},
    size::SizeMode,
};
use anyhow::{Error, Result};
use clap::{value_parser, Arg, ArgAction, Command};
use std::{ffi::OsString, path::PathBuf};

// constants
const DEFAULT_LOG_FILTER: &str = "warn";
const SIZE_PARAM: &str = "size";
const IN_FILE_PARAM: &str = "in-file";
const OUT_FILE_PARAM: &str = "out-file";
const SEED_PARAM: &str = "seed";
const STRICT_PARAM: &str = "strict";
const LOG_PARAM: &str = "log";

// command line data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliOpts {
    pub size_text: String,
    pub paths: FixturePaths,
    pub seed: Option<u64>,
    pub size_mode: SizeMode,
    pub log: String,
}

// command-line interface definition
fn command() -> Command {
    Command::new("random_order")
        .about("Writes two randomly shuffled permutations of 1..SIZE as comma-separated test fixtures")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new(SIZE_PARAM)
                .value_name("SIZE")
                .help("permutation length; options must come before it")
                .num_args(1..)
                .action(ArgAction::Append)
                // "-abc" and "-1a" are sizes, not flags
                .allow_hyphen_values(true)
                .allow_negative_numbers(true)
                .required(false),
        )
        .arg(
            Arg::new(IN_FILE_PARAM)
                .long(IN_FILE_PARAM)
                .num_args(1)
                .value_name("PATH")
                .env("RANDOM_ORDER_IN_FILE")
                .value_parser(value_parser!(PathBuf))
                .default_value(DEFAULT_IN_FILE),
        )
        .arg(
            Arg::new(OUT_FILE_PARAM)
                .long(OUT_FILE_PARAM)
                .num_args(1)
                .value_name("PATH")
                .env("RANDOM_ORDER_OUT_FILE")
                .value_parser(value_parser!(PathBuf))
                .default_value(DEFAULT_OUT_FILE),
        )
        .arg(
            Arg::new(SEED_PARAM)
                .long(SEED_PARAM)
                .num_args(1)
                .value_name("U64")
                .env("RANDOM_ORDER_SEED")
                .help("seed for reproducible output")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new(STRICT_PARAM)
                .long(STRICT_PARAM)
                .help("reject a SIZE that is not a non-negative integer")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(LOG_PARAM)
                .long(LOG_PARAM)
                .num_args(1)
                .value_name("FILTER")
                .env("RUST_LOG")
                .default_value(DEFAULT_LOG_FILTER),
        )
}

// exactly one size argument is accepted
fn single_size(sizes: Vec<String>) -> Result<String, FixtureError> {
    match <[String; 1]>::try_from(sizes) {
        Ok([size]) => Ok(size),
        Err(sizes) => Err(FixtureError::InvalidArgumentCount { got: sizes.len() }),
    }
}

// process command line and return values
pub fn process_cli<I, T>(args: I) -> Result<CliOpts, Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = command().try_get_matches_from(args)?;

    let sizes: Vec<String> = matches
        .get_many::<String>(SIZE_PARAM)
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    let cli = CliOpts {
        size_text: single_size(sizes)?,

        // these won't be empty due to a default value
        paths: FixturePaths {
            input: matches.get_one::<PathBuf>(IN_FILE_PARAM).unwrap().to_owned(),
            output: matches.get_one::<PathBuf>(OUT_FILE_PARAM).unwrap().to_owned(),
        },
        log: matches.get_one::<String>(LOG_PARAM).unwrap().to_owned(),

        seed: matches.get_one::<u64>(SEED_PARAM).copied(),
        size_mode: if matches.get_flag(STRICT_PARAM) {
            SizeMode::Strict
        } else {
            SizeMode::Lenient
        },
    };

    Ok(cli)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_definition_is_consistent() {
        command().debug_assert();
    }

    #[test]
    fn single_size_uses_defaults() {
        let cli = process_cli(["random_order", "--log", "warn", "3"]).unwrap();
        assert_eq!(cli.size_text, "3");
        assert_eq!(cli.size_mode, SizeMode::Lenient);
        assert_eq!(cli.paths, FixturePaths::default());
        assert_eq!(cli.log, "warn");
    }

    #[test]
    fn options_override_defaults() {
        let cli = process_cli([
            "random_order",
            "--in-file",
            "a.txt",
            "--out-file",
            "b.txt",
            "--seed",
            "42",
            "--strict",
            "10",
        ])
        .unwrap();
        assert_eq!(cli.paths.input, PathBuf::from("a.txt"));
        assert_eq!(cli.paths.output, PathBuf::from("b.txt"));
        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.size_mode, SizeMode::Strict);
        assert_eq!(cli.size_text, "10");
    }

    #[test]
    fn negative_size_is_a_value() {
        let cli = process_cli(["random_order", "-5"]).unwrap();
        assert_eq!(cli.size_text, "-5");
    }

    #[test]
    fn hyphen_led_size_is_a_value() {
        for size in ["-abc", "-1a", "--x"] {
            let cli = process_cli(["random_order", size]).unwrap();
            assert_eq!(cli.size_text, size);
        }
        let cli = process_cli(["random_order", "--strict", "--seed", "4", "-abc"]).unwrap();
        assert_eq!(cli.size_mode, SizeMode::Strict);
        assert_eq!(cli.seed, Some(4));
        assert_eq!(cli.size_text, "-abc");
    }

    #[test]
    fn options_after_size_count_as_arguments() {
        let err = process_cli(["random_order", "3", "--strict"]).unwrap_err();
        assert_eq!(
            err.downcast_ref::<FixtureError>(),
            Some(&FixtureError::InvalidArgumentCount { got: 2 })
        );
    }

    #[test]
    fn wrong_argument_count_is_rejected() {
        for args in [vec!["random_order"], vec!["random_order", "1", "2"]] {
            let expected = args.len() - 1;
            let err = process_cli(args).unwrap_err();
            assert_eq!(
                err.downcast_ref::<FixtureError>(),
                Some(&FixtureError::InvalidArgumentCount { got: expected })
            );
        }
    }
}
