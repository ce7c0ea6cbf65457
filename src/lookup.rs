use serde::Serialize;

use crate::catalog::{BookRecord, Catalog, LookupField};
use crate::classifier::Classifier;

/// Outcome of matching a predicted label against the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Resolution {
    Found { book: BookRecord },
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub label: String,
    #[serde(flatten)]
    pub resolution: Resolution,
}

impl Recommendation {
    pub fn book(&self) -> Option<&BookRecord> {
        match &self.resolution {
            Resolution::Found { book } => Some(book),
            Resolution::NotFound => None,
        }
    }
}

/// Classifies `query` and resolves the label against `catalog`.
///
/// An empty query returns `Ok(None)` without touching the classifier. A label
/// missing from the catalog is `Resolution::NotFound`; only classifier
/// failures are errors.
pub fn predict_and_resolve(
    query: &str,
    classifier: &dyn Classifier,
    catalog: &Catalog,
    field: LookupField,
) -> anyhow::Result<Option<Recommendation>> {
    if query.is_empty() {
        return Ok(None);
    }

    let labels = classifier.predict(&[query])?;
    let label = labels
        .into_iter()
        .next()
        .ok_or_else(|| anyhow::anyhow!("classifier returned no label"))?;
    tracing::debug!(%label, ?field, "predicted label");

    let resolution = match catalog.find(field, &label) {
        Some(book) => Resolution::Found { book: book.clone() },
        None => Resolution::NotFound,
    };
    tracing::debug!(found = matches!(resolution, Resolution::Found { .. }), "resolved label");

    Ok(Some(Recommendation { label, resolution }))
}
