// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{pages, posts};
use crate::presentation::http::error::HttpError;
use crate::presentation::http::middleware::rate_limit::{RateLimit, rate_limit_layer};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json, Router,
    http::{Method, StatusCode, Uri, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use std::time::Duration;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: HttpState) -> Router {
    build_router_with_rate_limiter(state, None)
}

pub fn build_router_with_rate_limiter(state: HttpState, rate_limit: Option<RateLimit>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    let mut router = Router::new()
        .route("/", get(posts::index))
        .route("/created_by/{author_id}/", get(posts::created_by))
        .route("/category/{slug}/", get(posts::category))
        .route("/tag/{slug}/", get(posts::tag))
        .route("/search/", get(posts::search))
        .route("/page/{slug}/", get(pages::page_detail))
        .route("/post/{slug}/", get(posts::post_detail))
        .route("/health", get(health))
        .fallback(fallback);

    if let Some(limit) = rate_limit {
        match rate_limit_layer(limit) {
            Some(layer) => router = router.layer(layer),
            None => tracing::warn!(?limit, "invalid rate limit, limiter disabled"),
        }
    }

    router
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}

async fn fallback(method: Method, uri: Uri) -> Response {
    let redirect = (method == Method::GET || method == Method::HEAD)
        .then(|| slash_redirect(&uri))
        .flatten();
    match redirect {
        Some(location) => {
            (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response()
        }
        None => HttpError::not_found("no route matches this path").into_response(),
    }
}

/// Target for a path that only lacks its trailing slash, query preserved.
fn slash_redirect(uri: &Uri) -> Option<String> {
    let path = uri.path();
    if path.ends_with('/') {
        return None;
    }
    let segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();
    let routable = match segments.as_slice() {
        ["search"] => true,
        ["created_by" | "category" | "tag" | "page" | "post", param] => !param.is_empty(),
        _ => false,
    };
    if !routable {
        return None;
    }
    Some(match uri.query() {
        Some(query) => format!("{path}/?{query}"),
        None => format!("{path}/"),
    })
}
