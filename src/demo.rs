//! Runs the selected demonstrations and collects their outcomes.

use log::{info, warn};

use crate::ciphers::U256;
use crate::config::DemoConfig;
use crate::options::{AlgorithmKind, Options};
use crate::report::{DemoReport, Outcome, RunRecord};
use crate::searching::binary_search;
use crate::sorting::{
    bead_sort, bubble_sort, fits_grid, is_sorted, recursive_bubble_sort, MAX_GRID_CELLS,
};

pub fn run(options: &Options, config: &DemoConfig) -> DemoReport {
    let mut report = DemoReport::default();
    for kind in options.algorithm.selected() {
        match kind {
            AlgorithmKind::BeadSort => {
                for input in sort_inputs(options, &config.bead_inputs) {
                    report.push(run_bead_sort(input));
                }
            }
            AlgorithmKind::BubbleSort => {
                for input in sort_inputs(options, &config.bubble_inputs) {
                    report.push(run_infallible_sort(kind, input, bubble_sort));
                }
            }
            AlgorithmKind::RecursiveBubbleSort => {
                for input in sort_inputs(options, &config.bubble_inputs) {
                    report.push(run_infallible_sort(kind, input, recursive_bubble_sort));
                }
            }
            AlgorithmKind::BinarySearch => {
                let haystack = options
                    .input
                    .clone()
                    .unwrap_or_else(|| config.search_input.clone());
                let targets = match options.target {
                    Some(target) => vec![target],
                    None => config.search_targets.clone(),
                };
                for target in targets {
                    report.push(run_binary_search(&haystack, target));
                }
            }
            AlgorithmKind::Uint256 => {
                for value in &config.uint256_values {
                    report.push(describe_u256(value));
                }
            }
            AlgorithmKind::All => {}
        }
    }
    info!(
        "finished {} runs, {} rejected",
        report.runs.len(),
        report.rejected_count()
    );
    report
}

fn sort_inputs(options: &Options, configured: &[Vec<i64>]) -> Vec<Vec<i64>> {
    match &options.input {
        Some(input) => vec![input.clone()],
        None => configured.to_vec(),
    }
}

pub fn run_bead_sort(input: Vec<i64>) -> RunRecord {
    let mut data = input.clone();
    let outcome = if !fits_grid(&data) {
        warn!("bead sort input needs more than {MAX_GRID_CELLS} grid cells");
        Outcome::Rejected {
            error: format!("bead grid larger than {MAX_GRID_CELLS} cells"),
        }
    } else {
        match bead_sort(&mut data) {
            Ok(()) => Outcome::Sorted { output: data },
            Err(err) => Outcome::Rejected {
                error: err.to_string(),
            },
        }
    };
    RunRecord {
        algorithm: AlgorithmKind::BeadSort.name().to_string(),
        input,
        outcome,
    }
}

fn run_infallible_sort(kind: AlgorithmKind, input: Vec<i64>, sort: fn(&mut [i64])) -> RunRecord {
    let mut data = input.clone();
    sort(&mut data);
    RunRecord {
        algorithm: kind.name().to_string(),
        input,
        outcome: Outcome::Sorted { output: data },
    }
}

pub fn run_binary_search(haystack: &[i64], target: i64) -> RunRecord {
    if !is_sorted(haystack) {
        warn!("binary search input is not ascending, the result may be wrong");
    }
    let outcome = match binary_search(haystack, &target) {
        Some(index) => Outcome::Found { target, index },
        None => Outcome::NotFound { target },
    };
    RunRecord {
        algorithm: AlgorithmKind::BinarySearch.name().to_string(),
        input: haystack.to_vec(),
        outcome,
    }
}

pub fn describe_u256(value: &U256) -> RunRecord {
    RunRecord {
        algorithm: AlgorithmKind::Uint256.name().to_string(),
        input: Vec::new(),
        outcome: Outcome::Formatted {
            decimal: value.to_string(),
            hex: format!("{value:#x}"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_run_covers_every_algorithm() {
        let report = run(&Options::default(), &DemoConfig::default());
        // 2 bead + 1 bubble + 1 recursive + 2 searches + 3 integers
        assert_eq!(report.runs.len(), 9);
        assert_eq!(report.rejected_count(), 0);
        assert_eq!(
            report.runs[0].outcome,
            Outcome::Sorted {
                output: vec![1, 1, 1, 3, 4, 5, 7, 20]
            }
        );
    }

    #[test]
    fn custom_input_replaces_configured_data() {
        let options = Options {
            algorithm: AlgorithmKind::BeadSort,
            input: Some(vec![3, -1, 2]),
            ..Options::default()
        };
        let report = run(&options, &DemoConfig::default());
        assert_eq!(report.runs.len(), 1);
        assert_eq!(report.runs[0].input, vec![3, -1, 2]);
        assert_eq!(report.rejected_count(), 1);
    }

    #[test]
    fn target_option_overrides_configured_targets() {
        let options = Options {
            algorithm: AlgorithmKind::BinarySearch,
            target: Some(19),
            ..Options::default()
        };
        let report = run(&options, &DemoConfig::default());
        assert_eq!(
            report.runs,
            vec![RunRecord {
                algorithm: "binary-search".to_string(),
                input: vec![1, 3, 5, 7, 9, 11, 13, 15, 17, 19],
                outcome: Outcome::Found { target: 19, index: 9 },
            }]
        );
    }

    #[test]
    fn oversized_bead_input_is_rejected() {
        let record = run_bead_sort(vec![i64::MAX, 1, 2]);
        assert_eq!(record.input, vec![i64::MAX, 1, 2]);
        assert_eq!(
            record.outcome,
            Outcome::Rejected {
                error: format!("bead grid larger than {MAX_GRID_CELLS} cells")
            }
        );
    }

    #[test]
    fn u256_is_described_in_both_bases() {
        let record = describe_u256(&U256::from_u64(255));
        assert_eq!(
            record.outcome,
            Outcome::Formatted {
                decimal: "255".to_string(),
                hex: "0xff".to_string()
            }
        );
    }
}
