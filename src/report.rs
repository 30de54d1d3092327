use anyhow::{Context, Result};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    Sorted { output: Vec<i64> },
    Rejected { error: String },
    Found { target: i64, index: usize },
    NotFound { target: i64 },
    Formatted { decimal: String, hex: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunRecord {
    pub algorithm: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub input: Vec<i64>,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoReport {
    pub tool_name: String,
    pub runs: Vec<RunRecord>,
}

impl Default for DemoReport {
    fn default() -> Self {
        DemoReport {
            tool_name: "abacus".to_string(),
            runs: Vec::new(),
        }
    }
}

impl DemoReport {
    pub fn push(&mut self, record: RunRecord) {
        self.runs.push(record);
    }

    pub fn rejected_count(&self) -> usize {
        self.runs
            .iter()
            .filter(|run| matches!(run.outcome, Outcome::Rejected { .. }))
            .count()
    }

    /// Writes the report as pretty-printed JSON.
    pub fn save_to_file(&self, file_path: &str) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(file_path, content)
            .with_context(|| format!("Failed to write report: {file_path}"))
    }
}

fn spaced(values: &[i64]) -> String {
    values.iter().join(" ")
}

impl fmt::Display for RunRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Outcome::Sorted { output } => {
                writeln!(f, "Original array: {}", spaced(&self.input))?;
                writeln!(f, "Sorted array: {}", spaced(output))
            }
            Outcome::Rejected { error } => {
                writeln!(f, "Original array: {}", spaced(&self.input))?;
                writeln!(f, "{} failed: {}", self.algorithm, error)
            }
            Outcome::Found { target, index } => {
                writeln!(f, "Target value {target} found at index: {index}")
            }
            Outcome::NotFound { target } => {
                writeln!(f, "Target value {target} not found in the array.")
            }
            Outcome::Formatted { decimal, hex } => {
                writeln!(f, "U256 {hex} = {decimal}")
            }
        }
    }
}

impl fmt::Display for DemoReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for run in &self.runs {
            write!(f, "{run}")?;
        }
        Ok(())
    }
}
