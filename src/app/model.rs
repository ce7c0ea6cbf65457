use serde::{Deserialize, Serialize};

use crate::lookup::Recommendation;
use crate::recommender::ModeInfo;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendRequest {
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecommendResponse {
    pub mode: String,
    pub message: String,
    #[serde(flatten)]
    pub recommendation: Recommendation,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModesResponse {
    pub modes: Vec<ModeInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
