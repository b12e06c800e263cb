use anyhow::{Context, Result};
use matrixgraph_core::generate::GeneratorConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "matrixgraph.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub generator: GeneratorSection,
    #[serde(default)]
    pub output: OutputSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorSection {
    #[serde(default = "default_vertex_count")]
    pub vertex_count: usize,
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default = "default_coefficient")]
    pub coefficient: f64,
    /// Seed for the weight matrix; `seed` when absent.
    #[serde(default)]
    pub weight_seed: Option<u64>,
}

impl Default for GeneratorSection {
    fn default() -> Self {
        Self {
            vertex_count: default_vertex_count(),
            seed: default_seed(),
            coefficient: default_coefficient(),
            weight_seed: None,
        }
    }
}

impl GeneratorSection {
    pub const fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            vertex_count: self.vertex_count,
            seed: self.seed,
            coefficient: self.coefficient,
        }
    }

    pub fn effective_weight_seed(&self) -> u64 {
        self.weight_seed.unwrap_or(self.seed)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSection {
    #[serde(default)]
    pub format: Option<String>,
}

/// Read and parse one config file.
pub fn load_config_file(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    toml::from_str::<Config>(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Candidate config paths in lookup order, explicit path first.
fn candidate_paths(explicit: Option<&Path>, working_dir: &Path) -> Vec<PathBuf> {
    if let Some(path) = explicit {
        return vec![path.to_path_buf()];
    }
    let mut paths = vec![working_dir.join(LOCAL_CONFIG_FILE)];
    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("matrixgraph/config.toml"));
    }
    paths
}

/// Resolve the effective config.
///
/// An explicit `--config` path must exist. Otherwise the first existing
/// file among `./matrixgraph.toml` and the user config directory wins, and
/// defaults apply when neither exists.
pub fn resolve_config(explicit: Option<&Path>, working_dir: &Path) -> Result<Config> {
    for path in candidate_paths(explicit, working_dir) {
        if explicit.is_some() || path.exists() {
            debug!(path = %path.display(), "loading config");
            return load_config_file(&path);
        }
    }
    Ok(Config::default())
}

const fn default_vertex_count() -> usize {
    11
}

const fn default_seed() -> u64 {
    4310
}

const fn default_coefficient() -> f64 {
    0.69
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_generator_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.generator.generator_config(), GeneratorConfig::default());
        assert_eq!(cfg.generator.effective_weight_seed(), 4310);
        assert_eq!(cfg.output.format, None);
    }

    #[test]
    fn missing_files_use_defaults() {
        let dir = TempDir::new().unwrap();
        // The user config dir may hold a real file; only assert when it doesn't.
        let user_file = dirs::config_dir().map(|d| d.join("matrixgraph/config.toml"));
        if user_file.is_some_and(|p| p.exists()) {
            return;
        }
        let cfg = resolve_config(None, dir.path()).expect("load should succeed");
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn local_file_overrides_some_fields() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(LOCAL_CONFIG_FILE),
            r#"
[generator]
vertex_count = 6
weight_seed = 99

[output]
format = "json"
"#,
        )
        .unwrap();

        let cfg = resolve_config(None, dir.path()).expect("load should succeed");
        assert_eq!(cfg.generator.vertex_count, 6);
        assert_eq!(cfg.generator.seed, 4310);
        assert_eq!(cfg.generator.effective_weight_seed(), 99);
        assert_eq!(cfg.output.format.as_deref(), Some("json"));
    }

    #[test]
    fn explicit_path_must_exist() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = resolve_config(Some(&missing), dir.path()).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to read"));
    }

    #[test]
    fn invalid_toml_names_the_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[generator\nseed = ").unwrap();
        let err = resolve_config(Some(&path), dir.path()).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("Failed to parse"));
        assert!(msg.contains("bad.toml"));
    }
}
