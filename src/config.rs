use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::catalog::LookupField;

pub const CONFIG_ENV: &str = "BOOKREC_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "bookrec.yaml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub recommenders: Vec<RecommenderConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommenderConfig {
    pub mode: String,
    pub label: String,
    pub prompt: String,
    pub model: PathBuf,
    pub catalog: PathBuf,
    #[serde(default)]
    pub resolve_by: LookupField,
}

impl Config {
    /// Reads and validates the registry file. Relative model and catalog paths
    /// are resolved against the file's directory.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let yaml = std::fs::read_to_string(path)
            .with_context(|| format!("read config: {}", path.display()))?;
        let mut config: Config = serde_yaml::from_str(&yaml)
            .with_context(|| format!("parse config: {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("validate config: {}", path.display()))?;

        let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
        for rec in &mut config.recommenders {
            rec.model = base_dir.join(&rec.model);
            rec.catalog = base_dir.join(&rec.catalog);
        }

        Ok(config)
    }

    pub fn recommender(&self, mode: &str) -> anyhow::Result<&RecommenderConfig> {
        self.recommenders
            .iter()
            .find(|rec| rec.mode == mode)
            .ok_or_else(|| {
                let known: Vec<&str> = self.recommenders.iter().map(|r| r.mode.as_str()).collect();
                anyhow::anyhow!("unknown mode {mode:?} (known: {})", known.join(", "))
            })
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.recommenders.is_empty() {
            anyhow::bail!("config must define at least one recommender");
        }
        let mut seen = HashSet::new();
        for rec in &self.recommenders {
            if rec.mode.trim().is_empty() {
                anyhow::bail!("recommender mode must not be empty");
            }
            if !seen.insert(rec.mode.as_str()) {
                anyhow::bail!("duplicate recommender mode: {}", rec.mode);
            }
        }
        Ok(())
    }
}

/// `--config`, then `BOOKREC_CONFIG`, then `bookrec.yaml`.
pub fn resolve_path(flag: Option<&Path>) -> PathBuf {
    if let Some(path) = flag {
        return path.to_path_buf();
    }
    std::env::var(CONFIG_ENV)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

#[cfg(test)]
mod tests {
    use super::*;

    const YAML: &str = r#"
recommenders:
  - mode: fiction
    label: Fiction
    prompt: "Please enter a description of a possible book (Fiction): "
    model: models/fiction.json
    catalog: data/fiction.csv
  - mode: most-reviewed
    label: Most Reviewed
    prompt: "Please enter a description of a possible book: "
    model: /abs/reviews.json
    catalog: data/reviews.csv
    resolve_by: author
"#;

    #[test]
    fn loads_and_resolves_relative_paths() -> anyhow::Result<()> {
        let temp = tempfile::TempDir::new()?;
        let path = temp.path().join("bookrec.yaml");
        std::fs::write(&path, YAML)?;

        let config = Config::load(&path)?;
        let fiction = &config.recommenders[0];
        assert_eq!(fiction.resolve_by, LookupField::Title);
        assert_eq!(fiction.model, temp.path().join("models/fiction.json"));
        let reviews = &config.recommenders[1];
        assert_eq!(reviews.resolve_by, LookupField::Author);
        assert_eq!(reviews.model, PathBuf::from("/abs/reviews.json"));
        Ok(())
    }

    #[test]
    fn rejects_duplicate_modes() {
        let mut config: Config = serde_yaml::from_str(YAML).unwrap();
        config.recommenders[1].mode = "fiction".to_owned();
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("duplicate recommender mode: fiction"));
    }

    #[test]
    fn rejects_empty_registry() {
        let config = Config {
            recommenders: Vec::new(),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn looks_up_one_recommender() {
        let config: Config = serde_yaml::from_str(YAML).unwrap();
        assert_eq!(config.recommender("most-reviewed").unwrap().label, "Most Reviewed");
        let err = config.recommender("poetry").unwrap_err().to_string();
        assert!(err.contains("known: fiction, most-reviewed"));
    }

    #[test]
    fn flag_wins_over_default() {
        assert_eq!(
            resolve_path(Some(Path::new("x.yaml"))),
            PathBuf::from("x.yaml")
        );
    }
}
