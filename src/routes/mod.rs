//! Route definitions for the news API.

pub mod api;
pub mod articles;
pub mod comments;
pub mod health;
pub mod topics;
pub mod users;

use axum::{
    http::HeaderValue,
    routing::{get, patch},
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::AppState;

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origin = match config.cors_allow_origin.as_deref().map(HeaderValue::from_str) {
        Some(Ok(origin)) => AllowOrigin::exact(origin),
        Some(Err(e)) => {
            tracing::warn!(error = %e, "Invalid CORS_ALLOW_ORIGIN, allowing any origin");
            AllowOrigin::any()
        }
        None => AllowOrigin::any(),
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Build the full application router.
pub fn router(state: AppState) -> Router {
    let article_routes = Router::new()
        .route("/articles", get(articles::list).post(articles::create))
        .route(
            "/articles/{article_id}",
            get(articles::get_by_id)
                .patch(articles::update_votes)
                .delete(articles::delete),
        )
        .route(
            "/articles/{article_id}/comments",
            get(articles::list_comments).post(articles::add_comment),
        );

    let comment_routes = Router::new().route(
        "/comments/{comment_id}",
        patch(comments::update_votes).delete(comments::delete),
    );

    let topic_routes = Router::new().route("/topics", get(topics::list).post(topics::create));

    let user_routes = Router::new()
        .route("/users", get(users::list))
        .route("/users/{username}", get(users::get_by_username));

    let api_routes = Router::new()
        .merge(article_routes)
        .merge(comment_routes)
        .merge(topic_routes)
        .merge(user_routes);

    Router::new()
        .route("/health/live", get(health::live))
        .route("/health/ready", get(health::ready))
        .route("/api", get(api::describe))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&state.config))
        .with_state(state)
}
