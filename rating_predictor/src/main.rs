//! Predicted-rating recommendation service: runs the submitted
//! specification through the pre-trained regressor and returns the
//! dataset rows whose recorded rating sits closest to the prediction.

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{extract::State, Form};
use thiserror::Error;

use moto_core::features::{full_feature_map, ordered_values};
use moto_core::{dataset, similar, FeatureError, MotorcycleRecord, SpecForm};

mod model;
mod pages;

#[derive(Clone)]
struct AppState {
    mdl: Arc<model::Model>,
    feat_list: Arc<Vec<String>>, // authoritative input order
    dataset: Arc<Vec<MotorcycleRecord>>,
}

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Input(#[from] FeatureError),
    #[error("prediction failed: {0}")]
    Model(anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Every failure renders as its plain-text description.
        let status = match self {
            AppError::Input(_) => StatusCode::BAD_REQUEST,
            AppError::Model(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, self.to_string()).into_response()
    }
}

async fn home() -> Html<String> {
    Html(pages::form_page())
}

async fn recommend(
    State(state): State<AppState>,
    Form(form): Form<SpecForm>,
) -> Result<Html<String>, AppError> {
    let features = full_feature_map(&form)?;
    let vec = ordered_values(&features, &state.feat_list);

    let nonzero = vec.iter().filter(|x| **x != 0.0).count();
    tracing::debug!("input vector: dim={} nonzero={}", vec.len(), nonzero);

    let predicted = state.mdl.predict(&vec).map_err(AppError::Model)?;
    let picks = similar::similar_by_rating(&state.dataset, predicted);
    tracing::info!(
        "predicted rating {:.3}; {} rows within tolerance",
        predicted,
        picks.len()
    );

    Ok(Html(pages::results_page(predicted, &picks)))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let model_path = std::env::var("MODEL_PATH")
        .unwrap_or_else(|_| "models/rating_regressor.pt".to_string());
    let meta_path =
        std::env::var("META_PATH").unwrap_or_else(|_| "models/meta.json".to_string());
    let dataset_path = std::env::var("DATASET_PATH")
        .unwrap_or_else(|_| "data/all_bikez_curated_imputed.csv".to_string());
    let port: u16 = std::env::var("PORT").ok().and_then(|s| s.parse().ok()).unwrap_or(8081);

    let (mdl, feat_list) = model::Model::new(&model_path, &meta_path)?;
    // Warmup to ensure the scripted module is usable before serving.
    let warmup = mdl.predict(&vec![0.0; feat_list.len()])?;
    tracing::info!(
        "loaded model; feat_list[{}], warmup prediction {:.3}",
        feat_list.len(),
        warmup
    );

    let records = dataset::load(dataset_path.as_ref())?;

    let state = AppState {
        mdl: Arc::new(mdl),
        feat_list: Arc::new(feat_list),
        dataset: Arc::new(records),
    };

    let app = axum::Router::new()
        .route("/", get(home))
        .route("/recommend", post(recommend))
        .with_state(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("rating predictor listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
