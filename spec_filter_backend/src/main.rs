//! Exact-match recommendation service: filters the curated dataset to the
//! rows whose specification values equal the submitted form values.

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{extract::State, Form};
use thiserror::Error;

use moto_core::features::supplied_features;
use moto_core::{dataset, filter, FeatureError, MotorcycleRecord, SpecForm};

mod pages;

#[derive(Clone)]
struct AppState {
    dataset: Arc<Vec<MotorcycleRecord>>,
}

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Input(#[from] FeatureError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Failures render as their plain-text description, no error page.
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}

async fn home() -> Html<String> {
    Html(pages::form_page())
}

async fn recommend(
    State(state): State<AppState>,
    Form(form): Form<SpecForm>,
) -> Result<Html<String>, AppError> {
    let features = supplied_features(&form)?;
    let names = filter::recommend(&state.dataset, &features, form.category());
    tracing::info!(
        "spec filter: {} supplied features, category={:?}, {} matches",
        features.len(),
        form.category(),
        names.len()
    );
    Ok(Html(pages::results_page(&names)))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let dataset_path = std::env::var("DATASET_PATH")
        .unwrap_or_else(|_| "data/all_bikez_curated_without_columns.csv".to_string());
    let port: u16 = std::env::var("PORT").ok().and_then(|s| s.parse().ok()).unwrap_or(8080);

    let records = dataset::load(dataset_path.as_ref())?;
    let state = AppState {
        dataset: Arc::new(records),
    };

    let app = axum::Router::new()
        .route("/", get(home))
        .route("/recommend", post(recommend))
        .with_state(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("spec filter backend listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
