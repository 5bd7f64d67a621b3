//! Simulator configuration.
//!
//! Loaded from YAML; every field has a default so partial files work.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::algorithm::AlgorithmKind;

/// Settings for the `cpu-sched` front end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulatorConfig {
    /// Algorithm used when none is given on the command line.
    #[serde(default = "default_algorithm")]
    pub default_algorithm: AlgorithmKind,

    /// Round Robin quantum used when none is given on the command line.
    #[serde(default)]
    pub quantum: Option<i64>,

    /// Directory receiving timestamped report files.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Whether to write a report file after each run.
    #[serde(default = "default_save_report")]
    pub save_report: bool,
}

fn default_algorithm() -> AlgorithmKind {
    AlgorithmKind::Fcfs
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_save_report() -> bool {
    true
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            default_algorithm: default_algorithm(),
            quantum: None,
            output_dir: default_output_dir(),
            save_report: default_save_report(),
        }
    }
}

impl SimulatorConfig {
    /// Load config from file, or use defaults.
    ///
    /// An explicit path must exist. Otherwise `./cpu-sched.yml` and the
    /// user config directory are tried in turn.
    pub fn load(path: Option<&PathBuf>) -> eyre::Result<Self> {
        if let Some(config_path) = path {
            return Self::from_file(config_path);
        }

        let default_paths = [
            Some(PathBuf::from("cpu-sched.yml")),
            dirs::config_dir().map(|p| p.join("cpu-sched").join("config.yml")),
        ];

        for path in default_paths.iter().flatten() {
            if path.exists() {
                log::debug!("Loading config from {}", path.display());
                return Self::from_file(path);
            }
        }

        Ok(Self::default())
    }

    /// Reads a YAML config file.
    pub fn from_file(path: &Path) -> eyre::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_yaml(&content)?)
    }

    /// Parses YAML config text.
    pub fn from_yaml(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Quantum from the command line, falling back to the config.
    pub fn resolve_quantum(&self, cli: Option<i64>) -> Option<i64> {
        cli.or(self.quantum)
    }

    /// Output directory from the command line, falling back to the config.
    pub fn resolve_output_dir(&self, cli: Option<&Path>) -> PathBuf {
        cli.map(Path::to_path_buf)
            .unwrap_or_else(|| self.output_dir.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = SimulatorConfig::default();
        assert_eq!(config.default_algorithm, AlgorithmKind::Fcfs);
        assert_eq!(config.quantum, None);
        assert!(config.save_report);
    }

    #[test]
    fn test_partial_yaml() {
        let config =
            SimulatorConfig::from_yaml("default_algorithm: Round Robin\nquantum: 3\n").unwrap();
        assert_eq!(config.default_algorithm, AlgorithmKind::RoundRobin);
        assert_eq!(config.quantum, Some(3));
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert!(config.save_report);
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yml");
        std::fs::write(&path, "save_report: false\noutput_dir: reports\n").unwrap();

        let config = SimulatorConfig::load(Some(&path)).unwrap();
        assert!(!config.save_report);
        assert_eq!(config.output_dir, PathBuf::from("reports"));
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.yml");
        assert!(SimulatorConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn test_cli_overrides() {
        let config = SimulatorConfig {
            quantum: Some(4),
            ..Default::default()
        };
        assert_eq!(config.resolve_quantum(Some(2)), Some(2));
        assert_eq!(config.resolve_quantum(None), Some(4));
        assert_eq!(
            config.resolve_output_dir(Some(Path::new("/tmp/out"))),
            PathBuf::from("/tmp/out")
        );
    }
}
