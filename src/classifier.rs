use std::path::Path;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::vectorize::Vectorizer;

/// A trained text classifier: one label per input document.
pub trait Classifier: Send + Sync {
    fn predict(&self, batch: &[&str]) -> anyhow::Result<Vec<String>>;
}

/// Linear model over bag-of-words features.
///
/// Scores are `coef[k] . x + intercept[k]` and the highest-scoring class wins
/// (the first one on ties). Logistic regression, linear SVM and multinomial
/// naive Bayes (log probabilities as `coef`, log priors as `intercept`) all
/// export to this shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearTextClassifier {
    pub vectorizer: Vectorizer,
    pub classes: Vec<String>,
    pub coef: Vec<Vec<f64>>,
    pub intercept: Vec<f64>,
}

impl LinearTextClassifier {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read model artifact: {}", path.display()))?;
        let model: Self = serde_json::from_str(&json)
            .with_context(|| format!("parse model artifact: {}", path.display()))?;
        model
            .validate()
            .with_context(|| format!("validate model artifact: {}", path.display()))?;
        tracing::debug!(
            path = %path.display(),
            classes = model.classes.len(),
            features = model.vectorizer.n_features(),
            "loaded model artifact"
        );
        Ok(model)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        self.vectorizer.validate()?;
        if self.classes.is_empty() {
            anyhow::bail!("model has no classes");
        }
        if self.coef.len() != self.classes.len() {
            anyhow::bail!(
                "model has {} classes but {} coefficient rows",
                self.classes.len(),
                self.coef.len()
            );
        }
        if self.intercept.len() != self.classes.len() {
            anyhow::bail!(
                "model has {} classes but {} intercepts",
                self.classes.len(),
                self.intercept.len()
            );
        }
        let n_features = self.vectorizer.n_features();
        if let Some(row) = self.coef.iter().position(|row| row.len() != n_features) {
            anyhow::bail!(
                "coefficient row {row} has {} weights, expected {n_features}",
                self.coef[row].len()
            );
        }
        Ok(())
    }

    fn predict_one(&self, text: &str) -> anyhow::Result<&str> {
        let features = self.vectorizer.transform(text);

        let mut best: Option<(usize, f64)> = None;
        for (k, (weights, bias)) in self.coef.iter().zip(&self.intercept).enumerate() {
            let score = features
                .iter()
                .map(|(index, value)| weights.get(*index).copied().unwrap_or(0.0) * value)
                .sum::<f64>()
                + bias;
            if score.is_nan() {
                anyhow::bail!("class {k} scored NaN");
            }
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((k, score));
            }
        }

        let (k, _) = best.ok_or_else(|| anyhow::anyhow!("model has no classes"))?;
        Ok(&self.classes[k])
    }
}

impl Classifier for LinearTextClassifier {
    fn predict(&self, batch: &[&str]) -> anyhow::Result<Vec<String>> {
        batch
            .iter()
            .map(|text| self.predict_one(text).map(str::to_owned))
            .collect()
    }
}
