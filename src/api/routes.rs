use axum::{routing::get, Router};
use std::sync::Arc;

use crate::storage::Storage;

use super::handlers::{show_reversed_ip, AppState};

pub fn create_router(storage: Arc<dyn Storage>) -> Router {
    let state = Arc::new(AppState { storage });

    Router::new()
        .route("/", get(show_reversed_ip))
        .with_state(state)
}
