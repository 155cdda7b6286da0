use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use ns_core::ComparativeAnalysis;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::error;

use crate::AppState;

#[derive(Deserialize)]
pub struct NewsQuery {
    #[serde(default)]
    company: Option<String>,
}

/// `GET /news?company=X` — run the full pipeline and return the report.
pub async fn get_news(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NewsQuery>,
) -> Response {
    let company = match query.company.filter(|c| !c.trim().is_empty()) {
        Some(company) => company,
        None => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": "Company name is required"})),
            )
                .into_response()
        }
    };

    match state.pipeline.analyze(&company).await {
        Ok(report) => Json(report).into_response(),
        Err(e) => {
            error!(%company, error = %e, "news analysis failed");
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({"error": e.to_string()})),
            )
                .into_response()
        }
    }
}

#[derive(Deserialize)]
pub struct TtsRequest {
    #[serde(default)]
    analysis: Option<ComparativeAnalysis>,
}

/// `POST /tts-final` — speak the final sentiment analysis of the posted
/// comparative record and stream back the mp3.
pub async fn tts_final(
    State(state): State<Arc<AppState>>,
    Json(request): Json<TtsRequest>,
) -> Response {
    let analysis = match request.analysis.filter(|a| !a.is_empty()) {
        Some(analysis) => analysis,
        None => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": "Analysis data is required"})),
            )
                .into_response()
        }
    };

    match state.speech.verdict_audio(&analysis).await {
        Ok(audio) => (
            [
                (header::CONTENT_TYPE, "audio/mpeg"),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=\"final_analysis.mp3\"",
                ),
            ],
            audio,
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "speech generation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Failed to generate speech"})),
            )
                .into_response()
        }
    }
}
