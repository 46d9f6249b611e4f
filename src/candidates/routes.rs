// src/candidates/routes.rs

use crate::candidates::handlers;
use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, post},
    Router,
};

pub fn candidates_routes() -> Router {
    Router::new()
        .route(
            "/api/candidatos",
            post(handlers::register_candidate).get(handlers::list_candidates),
        )
        .route("/api/candidatos/:id", delete(handlers::delete_candidate))
        // resumes come in as a single body; no artificial size cap
        .layer(DefaultBodyLimit::disable())
}
