use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::normalize::normalize;
use crate::stopwords::ExclusionSet;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Norm {
    L1,
    L2,
}

fn default_true() -> bool {
    true
}

/// Bag-of-words feature extraction, as fit at training time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vectorizer {
    #[serde(default = "default_true")]
    pub lowercase: bool,
    #[serde(default = "default_true")]
    pub stop_words: bool,
    pub vocabulary: HashMap<String, usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idf: Option<Vec<f64>>,
    #[serde(default)]
    pub sublinear_tf: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub norm: Option<Norm>,
}

impl Vectorizer {
    pub fn n_features(&self) -> usize {
        self.vocabulary.values().max().map_or(0, |max| max + 1)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if let Some(idf) = &self.idf
            && idf.len() != self.n_features()
        {
            anyhow::bail!(
                "idf has {} weights but vocabulary spans {} features",
                idf.len(),
                self.n_features()
            );
        }
        Ok(())
    }

    /// Terms as the vocabulary sees them.
    pub fn analyze(&self, text: &str) -> Vec<String> {
        let text = if self.lowercase {
            text.to_lowercase()
        } else {
            text.to_owned()
        };
        let exclusions = ExclusionSet::english();
        normalize(&text)
            .into_iter()
            .filter(|term| !self.stop_words || !exclusions.contains(term))
            .collect()
    }

    /// Sparse feature row as `(index, weight)` pairs sorted by index.
    pub fn transform(&self, text: &str) -> Vec<(usize, f64)> {
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for term in self.analyze(text) {
            if let Some(&index) = self.vocabulary.get(&term) {
                *counts.entry(index).or_insert(0.0) += 1.0;
            }
        }

        let mut row: Vec<(usize, f64)> = counts.into_iter().collect();
        row.sort_by_key(|(index, _)| *index);

        for (index, weight) in &mut row {
            if self.sublinear_tf {
                *weight = weight.ln() + 1.0;
            }
            if let Some(idf) = &self.idf {
                *weight *= idf.get(*index).copied().unwrap_or(1.0);
            }
        }

        let scale = match self.norm {
            Some(Norm::L1) => row.iter().map(|(_, w)| w.abs()).sum::<f64>(),
            Some(Norm::L2) => row.iter().map(|(_, w)| w * w).sum::<f64>().sqrt(),
            None => 1.0,
        };
        if scale > 0.0 && scale != 1.0 {
            for (_, weight) in &mut row {
                *weight /= scale;
            }
        }

        row
    }
}
