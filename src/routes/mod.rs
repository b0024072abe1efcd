use axum::{
    Router,
    response::IntoResponse,
    routing::{get, post},
};

use crate::template::{NotFoundTemplate, Template};

mod contact;
mod health;
mod index;
mod plan;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    template.render_with_status(axum::http::StatusCode::NOT_FOUND, NotFoundTemplate)
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(index::page))
        .route("/plan", get(plan::page).post(plan::action))
        .route("/api/plan", post(plan::api))
        .route("/contact", get(contact::page).post(contact::action))
        .route("/api/contact", post(contact::api))
        .fallback(fallback)
        .with_state(app_state)
}
