use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use urf_core_db::{Deployment, UnitOfWorkFactory};

use crate::controller::products;

/// Shared state handed to every handler
pub struct AppState<F> {
    pub factory: Arc<F>,
    pub deployment: Deployment,
}

impl<F> Clone for AppState<F> {
    fn clone(&self) -> Self {
        Self {
            factory: self.factory.clone(),
            deployment: self.deployment,
        }
    }
}

impl<F> AppState<F> {
    pub fn new(factory: Arc<F>, deployment: Deployment) -> Self {
        Self {
            factory,
            deployment,
        }
    }

    /// `/api/products` for demo, `/api/product` for sample
    pub fn base_path(&self) -> String {
        format!("/api/{}", entity_segment(self.deployment))
    }
}

/// Path segment of the product controller in each deployment
pub fn entity_segment(deployment: Deployment) -> &'static str {
    match deployment {
        Deployment::Demo => "products",
        Deployment::Sample => "product",
    }
}

async fn health<F>(State(state): State<AppState<F>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "deployment": state.deployment.to_string(),
    }))
}

/// Build the HTTP surface of a deployment over the given unit-of-work factory
pub fn build_router<F: UnitOfWorkFactory>(state: AppState<F>) -> Router {
    let base = state.base_path();

    Router::new()
        .route(&base, get(products::list::<F>).post(products::create::<F>))
        .route(
            &format!("{base}/:id"),
            get(products::get::<F>)
                .put(products::update::<F>)
                .delete(products::delete::<F>),
        )
        .route("/health", get(health::<F>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
