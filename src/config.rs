use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::ciphers::U256;

/// Data fed to each demonstration when no `--input` is given.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    #[serde(default = "default_bead_inputs")]
    pub bead_inputs: Vec<Vec<i64>>,
    #[serde(default = "default_bubble_inputs")]
    pub bubble_inputs: Vec<Vec<i64>>,
    #[serde(default = "default_search_input")]
    pub search_input: Vec<i64>,
    #[serde(default = "default_search_targets")]
    pub search_targets: Vec<i64>,
    /// Hex strings, e.g. `"0x2a"`.
    #[serde(default = "default_uint256_values")]
    pub uint256_values: Vec<U256>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            bead_inputs: default_bead_inputs(),
            bubble_inputs: default_bubble_inputs(),
            search_input: default_search_input(),
            search_targets: default_search_targets(),
            uint256_values: default_uint256_values(),
        }
    }
}

impl DemoConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: DemoConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        Ok(config)
    }
}

fn default_bead_inputs() -> Vec<Vec<i64>> {
    vec![vec![5, 3, 1, 7, 4, 1, 1, 20], vec![10, 2, 8, 1, 5]]
}

fn default_bubble_inputs() -> Vec<Vec<i64>> {
    vec![vec![64, 34, 25, 12, 22, 11, 90]]
}

fn default_search_input() -> Vec<i64> {
    (1..20).step_by(2).collect()
}

fn default_search_targets() -> Vec<i64> {
    vec![13, 6]
}

fn default_uint256_values() -> Vec<U256> {
    vec![U256::from_u64(42), U256::from(u128::MAX), U256::MAX]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let config = DemoConfig::load_from_file("does/not/exist.toml").unwrap();
        assert_eq!(config, DemoConfig::default());
        assert_eq!(config.search_input, vec![1, 3, 5, 7, 9, 11, 13, 15, 17, 19]);
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config: DemoConfig = toml::from_str(
            r#"
            bead_inputs = [[3, 0, 2]]
            uint256_values = ["0xff", "10"]
            "#,
        )
        .unwrap();
        assert_eq!(config.bead_inputs, vec![vec![3, 0, 2]]);
        assert_eq!(
            config.uint256_values,
            vec![U256::from_u64(255), U256::from_u64(16)]
        );
        assert_eq!(config.bubble_inputs, default_bubble_inputs());
        assert_eq!(config.search_targets, vec![13, 6]);
    }

    #[test]
    fn invalid_u256_is_a_parse_error() {
        let parsed = toml::from_str::<DemoConfig>(r#"uint256_values = ["0xgg"]"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn reads_file_from_disk() {
        let path = std::env::temp_dir().join(format!("abacus_config_{}.toml", std::process::id()));
        fs::write(&path, "search_targets = [1, 2]\n").unwrap();
        let config = DemoConfig::load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(config.search_targets, vec![1, 2]);
    }

    #[test]
    fn malformed_file_reports_path() {
        let path = std::env::temp_dir().join(format!("abacus_bad_{}.toml", std::process::id()));
        fs::write(&path, "bead_inputs = 7\n").unwrap();
        let err = DemoConfig::load_from_file(&path).unwrap_err();
        fs::remove_file(&path).unwrap();
        assert!(format!("{err:#}").contains("Failed to parse config file"));
    }
}
