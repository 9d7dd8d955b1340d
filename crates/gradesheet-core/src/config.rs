//! Run configuration and the input directory layout.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::Problem;

/// Top-level gradesheet configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory under which the per-problem directories live.
    #[serde(default = "default_input_root")]
    pub input_root: PathBuf,
    /// Where the roster CSV is written.
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

fn default_input_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_output() -> PathBuf {
    PathBuf::from("./extracted_data.csv")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_root: default_input_root(),
            output: default_output(),
        }
    }
}

/// Load config from an explicit path, or `gradesheet.toml` in the current
/// directory, or fall back to defaults.
pub fn load_config_from(path: Option<&Path>) -> Result<Config> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("gradesheet.toml");
        local.exists().then_some(local)
    };

    match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))
        }
        None => Ok(Config::default()),
    }
}

/// The static directory-to-problem mapping: `html_files_<N>` for each of
/// the four problems, resolved against the input root.
#[derive(Debug, Clone)]
pub struct InputLayout {
    dirs: Vec<(Problem, PathBuf)>,
}

impl InputLayout {
    pub fn new(input_root: &Path) -> Self {
        let dirs = Problem::ALL
            .iter()
            .map(|&p| (p, input_root.join(format!("html_files_{}", p.number()))))
            .collect();
        Self { dirs }
    }

    /// Per-problem directories in ascending problem order.
    pub fn problem_dirs(&self) -> impl Iterator<Item = (Problem, &Path)> {
        self.dirs.iter().map(|(p, d)| (*p, d.as_path()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.input_root, PathBuf::from("."));
        assert_eq!(config.output, PathBuf::from("./extracted_data.csv"));
    }

    #[test]
    fn parse_partial_config() {
        let config: Config = toml::from_str(r#"input_root = "/srv/submissions""#).unwrap();
        assert_eq!(config.input_root, PathBuf::from("/srv/submissions"));
        assert_eq!(config.output, PathBuf::from("./extracted_data.csv"));
    }

    #[test]
    fn load_explicit_missing_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(load_config_from(Some(&missing)).is_err());
    }

    #[test]
    fn load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gradesheet.toml");
        std::fs::write(&path, "output = \"roster.csv\"\n").unwrap();

        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.output, PathBuf::from("roster.csv"));
        assert_eq!(config.input_root, PathBuf::from("."));
    }

    #[test]
    fn layout_covers_all_problems_in_order() {
        let layout = InputLayout::new(Path::new("/data"));
        let dirs: Vec<_> = layout.problem_dirs().collect();

        assert_eq!(dirs.len(), 4);
        assert_eq!(dirs[0].0, Problem::ALL[0]);
        assert_eq!(dirs[0].1, Path::new("/data/html_files_1"));
        assert_eq!(dirs[3].1, Path::new("/data/html_files_4"));
    }
}
