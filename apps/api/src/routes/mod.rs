pub mod health;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::portfolio::handlers as portfolio_handlers;
use crate::state::AppState;
use crate::wizard::handlers as wizard_handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Wizard API
        .route("/api/v1/wizard", post(wizard_handlers::create_session))
        .route("/api/v1/wizard/:id", get(wizard_handlers::get_session))
        .route(
            "/api/v1/wizard/:id/next",
            post(wizard_handlers::next_section),
        )
        .route(
            "/api/v1/wizard/:id/previous",
            post(wizard_handlers::previous_section),
        )
        .route(
            "/api/v1/wizard/:id/goto",
            post(wizard_handlers::goto_section),
        )
        .route(
            "/api/v1/wizard/:id/draft",
            patch(wizard_handlers::patch_draft),
        )
        .route(
            "/api/v1/wizard/:id/skills",
            post(wizard_handlers::add_skill).delete(wizard_handlers::remove_skill),
        )
        .route(
            "/api/v1/wizard/:id/submit",
            post(wizard_handlers::submit_session),
        )
        // Template catalog
        .route("/api/v1/templates", get(portfolio_handlers::list_templates))
        .route(
            "/api/v1/templates/:id",
            get(portfolio_handlers::get_template),
        )
        // Published portfolios
        .route(
            "/api/v1/portfolios/:slug",
            get(portfolio_handlers::get_portfolio),
        )
        .route(
            "/api/v1/portfolios/:slug/resume/layout",
            get(portfolio_handlers::get_resume_layout),
        )
        .route(
            "/api/v1/portfolios/:slug/resume",
            get(portfolio_handlers::download_resume),
        )
        .with_state(state)
}
