use axum::{Router, routing::get};
use std::sync::Arc;

use crate::db::VisitStore;
use crate::handlers::visits::visits_handler;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn VisitStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn VisitStore>) -> Self {
        Self { store }
    }
}

pub fn visit_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(visits_handler))
        .with_state(state)
}
