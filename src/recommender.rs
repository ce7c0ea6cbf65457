use std::path::Path;
use std::sync::Arc;

use anyhow::Context as _;
use serde::Serialize;

use crate::catalog::{Catalog, LookupField};
use crate::classifier::{Classifier, LinearTextClassifier};
use crate::cli::{ModesArgs, RecommendArgs};
use crate::config::{self, Config, RecommenderConfig};
use crate::lookup::{Recommendation, predict_and_resolve};
use crate::render;

pub const MAX_QUERY_CHARS: usize = 500;

/// One classifier/catalog pair with the prompt shown to the user.
#[derive(Clone)]
pub struct Recommender {
    pub mode: String,
    pub label: String,
    pub prompt: String,
    pub resolve_by: LookupField,
    classifier: Arc<dyn Classifier>,
    catalog: Arc<Catalog>,
}

impl std::fmt::Debug for Recommender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Recommender")
            .field("mode", &self.mode)
            .field("resolve_by", &self.resolve_by)
            .field("catalog_rows", &self.catalog.len())
            .finish_non_exhaustive()
    }
}

impl Recommender {
    pub fn new(
        mode: impl Into<String>,
        label: impl Into<String>,
        prompt: impl Into<String>,
        resolve_by: LookupField,
        classifier: Arc<dyn Classifier>,
        catalog: Arc<Catalog>,
    ) -> Self {
        Self {
            mode: mode.into(),
            label: label.into(),
            prompt: prompt.into(),
            resolve_by,
            classifier,
            catalog,
        }
    }

    pub fn load(config: &RecommenderConfig) -> anyhow::Result<Self> {
        let classifier = LinearTextClassifier::load(&config.model)
            .with_context(|| format!("load model for mode {}", config.mode))?;
        let catalog = Catalog::load(&config.catalog)
            .with_context(|| format!("load catalog for mode {}", config.mode))?;
        Ok(Self::new(
            config.mode.clone(),
            config.label.clone(),
            config.prompt.clone(),
            config.resolve_by,
            Arc::new(classifier),
            Arc::new(catalog),
        ))
    }

    /// `Ok(None)` for an empty query; over-long queries are rejected.
    pub fn recommend(&self, query: &str) -> anyhow::Result<Option<Recommendation>> {
        check_query(query)?;
        predict_and_resolve(
            query,
            self.classifier.as_ref(),
            &self.catalog,
            self.resolve_by,
        )
        .with_context(|| format!("{} recommender", self.mode))
    }
}

pub fn check_query(query: &str) -> anyhow::Result<()> {
    let chars = query.chars().count();
    if chars > MAX_QUERY_CHARS {
        anyhow::bail!("query is {chars} characters; the limit is {MAX_QUERY_CHARS}");
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize)]
pub struct ModeInfo {
    pub mode: String,
    pub label: String,
    pub prompt: String,
    pub resolve_by: LookupField,
}

/// Every configured recommender, loaded once and shared read-only.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    recommenders: Vec<Recommender>,
}

impl Registry {
    pub fn new(recommenders: Vec<Recommender>) -> Self {
        Self { recommenders }
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let recommenders = config
            .recommenders
            .iter()
            .map(Recommender::load)
            .collect::<anyhow::Result<Vec<_>>>()?;
        tracing::info!(count = recommenders.len(), "loaded recommenders");
        Ok(Self { recommenders })
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let config = Config::load(path)?;
        Self::from_config(&config)
    }

    pub fn get(&self, mode: &str) -> Option<&Recommender> {
        self.recommenders.iter().find(|r| r.mode == mode)
    }

    pub fn modes(&self) -> Vec<ModeInfo> {
        self.recommenders
            .iter()
            .map(|r| ModeInfo {
                mode: r.mode.clone(),
                label: r.label.clone(),
                prompt: r.prompt.clone(),
                resolve_by: r.resolve_by,
            })
            .collect()
    }
}

pub fn modes(args: ModesArgs) -> anyhow::Result<()> {
    let path = config::resolve_path(args.config.as_deref());
    let config = Config::load(&path)?;

    for rec in &config.recommenders {
        println!("{}\t{}\t{}", rec.mode, rec.label, rec.prompt.trim_end());
    }

    Ok(())
}

pub fn run(args: RecommendArgs) -> anyhow::Result<()> {
    let path = config::resolve_path(args.config.as_deref());
    let config = Config::load(&path)?;
    let rec_config = config.recommender(&args.mode)?;
    check_query(&args.query)?;

    // Only this mode's artifacts are loaded.
    let rec = match Recommender::load(rec_config).and_then(|r| r.recommend(&args.query)) {
        Ok(rec) => rec,
        Err(err) => {
            tracing::warn!(mode = %args.mode, error = %format!("{err:#}"), "recommendation failed");
            println!("{}", render::FAILURE_MESSAGE);
            return Err(err);
        }
    };

    let Some(rec) = rec else {
        tracing::debug!("empty query; nothing to recommend");
        return Ok(());
    };

    if args.json {
        let json = serde_json::to_string_pretty(&rec).context("serialize recommendation")?;
        println!("{json}");
    } else {
        print!("{}", render::to_text(&rec));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::BookRecord;

    struct Echo;

    impl Classifier for Echo {
        fn predict(&self, batch: &[&str]) -> anyhow::Result<Vec<String>> {
            Ok(batch.iter().map(|s| (*s).to_owned()).collect())
        }
    }

    fn registry() -> Registry {
        let catalog = Arc::new(Catalog::new(vec![BookRecord {
            title: "Dune".to_owned(),
            authors: "['Frank Herbert']".to_owned(),
            description: "Desert politics.".to_owned(),
            image: "dune.jpg".to_owned(),
        }]));
        Registry::new(vec![
            Recommender::new(
                "fiction",
                "Fiction",
                "Describe:",
                LookupField::Title,
                Arc::new(Echo),
                Arc::clone(&catalog),
            ),
            Recommender::new(
                "overall",
                "Overall",
                "Describe:",
                LookupField::Author,
                Arc::new(Echo),
                catalog,
            ),
        ])
    }

    #[test]
    fn each_mode_resolves_by_its_own_field() {
        let registry = registry();
        let fiction = registry.get("fiction").unwrap();
        let by_title = fiction.recommend("Dune").unwrap().unwrap();
        assert!(by_title.book().is_some());

        let overall = registry.get("overall").unwrap();
        let by_author = overall.recommend("Dune").unwrap().unwrap();
        assert!(by_author.book().is_none());
    }

    #[test]
    fn query_length_is_capped() {
        let registry = registry();
        let fiction = registry.get("fiction").unwrap();
        assert!(fiction.recommend(&"a".repeat(MAX_QUERY_CHARS)).is_ok());
        let err = fiction.recommend(&"a".repeat(MAX_QUERY_CHARS + 1)).unwrap_err();
        assert!(err.to_string().contains("limit is 500"));
    }

    #[test]
    fn unknown_mode_is_absent() {
        assert!(registry().get("poetry").is_none());
    }

    #[test]
    fn modes_describe_registry() {
        let modes = registry().modes();
        assert_eq!(modes.len(), 2);
        assert_eq!(modes[1].resolve_by, LookupField::Author);
    }
}
