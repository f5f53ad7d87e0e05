use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use chrono::NaiveDate;
use serde::Deserialize;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::ProviderConfig;
use crate::models::{ApiResponse, Forecast, ForecastList, League};
use crate::services::{league_registry, ForecastEngine, MatchDataProvider};
use crate::utils::{date_window, resolve_window, today};

const TODAY_LIMIT: usize = 10;
const DEFAULT_WINDOW_DAYS: i64 = 7;
const LEAGUE_WINDOW_DAYS: i64 = 14;

pub struct AppState {
    pub provider: MatchDataProvider,
    pub engine: ForecastEngine,
}

pub type SharedState = Arc<AppState>;

pub async fn serve(port: u16, config: ProviderConfig) -> anyhow::Result<()> {
    let state = Arc::new(AppState {
        provider: MatchDataProvider::new(config)?,
        engine: ForecastEngine::new(),
    });

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    tracing::info!("Matchday API server listening on port {}", port);

    axum::serve(listener, app).await?;
    Ok(())
}

pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/leagues", get(list_leagues_handler))
        .route("/api/leagues/{code}/predictions", get(league_predictions_handler))
        .route("/api/predictions", get(predictions_handler))
        .route("/api/predictions/today", get(todays_predictions_handler))
        .route("/api/match/{id}", get(match_prediction_handler))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
        )
        .with_state(state)
}

// Health check endpoint
async fn health_check() -> Json<ApiResponse<&'static str>> {
    Json(ApiResponse::success("Matchday API is running"))
}

// GET /api/leagues
async fn list_leagues_handler() -> Json<ApiResponse<Vec<League>>> {
    Json(ApiResponse::success(league_registry::all().to_vec()))
}

// GET /api/predictions/today - first few fixtures between today and tomorrow
async fn todays_predictions_handler(
    State(state): State<SharedState>,
) -> Json<ApiResponse<ForecastList>> {
    let (from, to) = date_window(today(), 1);
    let fixtures = state.provider.fetch(None, Some(from), Some(to)).await;
    let take = fixtures.len().min(TODAY_LIMIT);
    let forecasts = state.engine.forecast_all(&fixtures[..take]);

    Json(ApiResponse::success(forecasts.into()))
}

// GET /api/predictions?league=PL&date_from=2026-10-18&date_to=2026-10-25
#[derive(Deserialize)]
struct PredictionsQuery {
    league: Option<String>,
    date_from: Option<NaiveDate>,
    date_to: Option<NaiveDate>,
}

async fn predictions_handler(
    State(state): State<SharedState>,
    Query(params): Query<PredictionsQuery>,
) -> Json<ApiResponse<ForecastList>> {
    let (from, to) = resolve_window(params.date_from, params.date_to, DEFAULT_WINDOW_DAYS);
    let fixtures = state
        .provider
        .fetch(params.league.as_deref(), Some(from), Some(to))
        .await;

    Json(ApiResponse::success(state.engine.forecast_all(&fixtures).into()))
}

// GET /api/leagues/{code}/predictions - two weeks of fixtures for one league
async fn league_predictions_handler(
    State(state): State<SharedState>,
    Path(code): Path<String>,
) -> Result<Json<ApiResponse<ForecastList>>, StatusCode> {
    let Some(league) = league_registry::lookup(&code) else {
        tracing::debug!("Unknown league code requested: {}", code);
        return Err(StatusCode::NOT_FOUND);
    };

    let (from, to) = date_window(today(), LEAGUE_WINDOW_DAYS);
    let fixtures = state.provider.fetch(Some(league.code), Some(from), Some(to)).await;

    Ok(Json(ApiResponse::success(state.engine.forecast_all(&fixtures).into())))
}

// GET /api/match/{id}
async fn match_prediction_handler(
    State(state): State<SharedState>,
    Path(match_id): Path<u64>,
) -> Result<Json<ApiResponse<Forecast>>, (StatusCode, Json<ApiResponse<Forecast>>)> {
    let fixtures = state.provider.fetch(None, None, None).await;

    match fixtures.iter().find(|f| f.id == match_id) {
        Some(fixture) => Ok(Json(ApiResponse::success(state.engine.forecast(fixture)))),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error("Match not found".to_string())),
        )),
    }
}
