//! Parsing Options.
//! `--algorithm {kind}` or `-a`, defaults to running every demonstration.

use clap::{Arg, Command};
use std::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AlgorithmKind {
    All,
    BeadSort,
    BubbleSort,
    RecursiveBubbleSort,
    BinarySearch,
    Uint256,
}

impl AlgorithmKind {
    const EACH: [AlgorithmKind; 5] = [
        AlgorithmKind::BeadSort,
        AlgorithmKind::BubbleSort,
        AlgorithmKind::RecursiveBubbleSort,
        AlgorithmKind::BinarySearch,
        AlgorithmKind::Uint256,
    ];

    pub fn name(self) -> &'static str {
        match self {
            AlgorithmKind::All => "all",
            AlgorithmKind::BeadSort => "bead",
            AlgorithmKind::BubbleSort => "bubble",
            AlgorithmKind::RecursiveBubbleSort => "recursive-bubble",
            AlgorithmKind::BinarySearch => "binary-search",
            AlgorithmKind::Uint256 => "uint256",
        }
    }

    /// The concrete algorithms to run; `All` expands to every one of them.
    pub fn selected(self) -> Vec<AlgorithmKind> {
        match self {
            AlgorithmKind::All => Self::EACH.to_vec(),
            kind => vec![kind],
        }
    }
}

fn make_options_parser() -> clap::Command {
    let parser = Command::new("abacus")
        .no_binary_name(true)
        .about("Runs the bead sort, bubble sort, binary search and U256 demonstrations")
        .version("v0.1.0")
        .arg(
            Arg::new("algorithm")
                .short('a')
                .long("algorithm")
                .help("The algorithm to demonstrate")
                .default_value("all")
                .value_parser([
                    "all",
                    "bead",
                    "bubble",
                    "recursive-bubble",
                    "binary-search",
                    "uint256",
                ]),
        )
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("VALUES")
                .allow_hyphen_values(true)
                .help("Comma or space separated integers used instead of the configured sort/search data"),
        )
        .arg(
            Arg::new("target")
                .short('t')
                .long("target")
                .value_name("N")
                .allow_hyphen_values(true)
                .value_parser(clap::value_parser!(i64))
                .help("Value to look up with binary search"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("TOML file with the demonstration data")
                .default_value("abacus.toml"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Path to file where the JSON report will be stored"),
        );
    parser
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub algorithm: AlgorithmKind,
    pub input: Option<Vec<i64>>,
    pub target: Option<i64>,
    pub config: String,
    pub output: Option<String>,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            algorithm: AlgorithmKind::All,
            input: None,
            target: None,
            config: "abacus.toml".to_string(),
            output: None,
        }
    }
}

impl Options {
    pub fn parse_from_str(s: &str) -> Result<Self, Box<dyn Error>> {
        let flags = shellwords::split(s)?;
        Self::parse_from_args(&flags)
    }

    pub fn parse_from_args(flags: &[String]) -> Result<Self, Box<dyn Error>> {
        let app = make_options_parser();
        let matches = app.try_get_matches_from(flags.iter())?;
        let algorithm = match matches.get_one::<String>("algorithm").map(String::as_str) {
            Some("all") => AlgorithmKind::All,
            Some("bead") => AlgorithmKind::BeadSort,
            Some("bubble") => AlgorithmKind::BubbleSort,
            Some("recursive-bubble") => AlgorithmKind::RecursiveBubbleSort,
            Some("binary-search") => AlgorithmKind::BinarySearch,
            Some("uint256") => AlgorithmKind::Uint256,
            _ => return Err("UnsupportedAlgorithm")?,
        };

        let input = matches
            .get_one::<String>("input")
            .map(|s| parse_values(s))
            .transpose()?;
        let target = matches.get_one::<i64>("target").copied();
        let config = matches
            .get_one::<String>("config")
            .cloned()
            .unwrap_or_default();
        let output = matches.get_one::<String>("output").cloned();

        Ok(Options {
            algorithm,
            input,
            target,
            config,
            output,
        })
    }
}

/// Splits `"5, 3 1"` style lists on commas and whitespace.
pub fn parse_values(s: &str) -> Result<Vec<i64>, std::num::ParseIntError> {
    s.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|tok| !tok.is_empty())
        .map(str::parse)
        .collect()
}
