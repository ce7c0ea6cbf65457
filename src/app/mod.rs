//! HTTP surface over the recommender registry.

pub mod model;

use std::sync::Arc;

use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::recommender::{Registry, check_query};
use crate::render::{self, title_case};
use model::{ErrorResponse, ModesResponse, RecommendRequest, RecommendResponse};

#[derive(Debug, Clone)]
pub struct AppState {
    pub registry: Arc<Registry>,
}

impl AppState {
    pub fn new(registry: Registry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(|| async { "ok\n" }))
        .route("/modes", get(list_modes))
        .route("/recommend/:mode", post(recommend))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn list_modes(State(state): State<AppState>) -> Json<ModesResponse> {
    Json(ModesResponse {
        modes: state.registry.modes(),
    })
}

fn error(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorResponse::new(message))).into_response()
}

async fn recommend(
    State(state): State<AppState>,
    Path(mode): Path<String>,
    Json(req): Json<RecommendRequest>,
) -> Response {
    let Some(recommender) = state.registry.get(&mode) else {
        return error(StatusCode::NOT_FOUND, format!("unknown mode: {mode}"));
    };
    if let Err(err) = check_query(&req.query) {
        return error(StatusCode::BAD_REQUEST, err.to_string());
    }

    match recommender.recommend(&req.query) {
        Ok(Some(rec)) => {
            let message = format!("You should read {}.", title_case(&rec.label));
            Json(RecommendResponse {
                mode,
                message,
                recommendation: rec,
            })
            .into_response()
        }
        Ok(None) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => {
            tracing::warn!(%mode, error = %format!("{err:#}"), "recommendation failed");
            error(StatusCode::INTERNAL_SERVER_ERROR, render::FAILURE_MESSAGE)
        }
    }
}
