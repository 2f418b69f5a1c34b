// src/routes/mod.rs
pub mod chat;
pub mod estimate;
pub mod pages;

use crate::state::SharedState;
use axum::{
    Router,
    routing::{get, post},
};
use chat::{chat_handler, home_handler};
use estimate::estimate_handler;
use pages::debug_handler;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/get", post(chat_handler))
        .route("/estimate", post(estimate_handler))
        .route_service("/services", ServeFile::new("public/services.html"))
        .route_service("/pricing", ServeFile::new("public/pricing.html"))
        .route_service("/contact", ServeFile::new("public/contact.html"))
        .route("/debug", get(debug_handler))
        .route("/health", get(|| async { "OK" }))
        .fallback_service(ServeDir::new("public"))
        .layer(TraceLayer::new_for_http())
}
