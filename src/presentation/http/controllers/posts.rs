// src/presentation/http/controllers/posts.rs
use crate::application::queries::posts::{
    GetPostBySlugQuery, ListPostsQuery, ListingScope, SearchOutcome, SearchPostsQuery,
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use crate::presentation::http::views;
use axum::{
    Extension,
    extract::{Path, Query},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct ListingParams {
    #[serde(default)]
    pub page: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub page: Option<String>,
}

async fn render_listing(
    state: &HttpState,
    scope: ListingScope,
    page: Option<String>,
) -> HttpResult<Html<String>> {
    let listing = state
        .services
        .post_queries
        .list_posts(ListPostsQuery { scope, page })
        .await
        .into_http()?;

    Ok(views::render(views::posts::index(&state.site, &listing)))
}

pub async fn index(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ListingParams>,
) -> HttpResult<Html<String>> {
    render_listing(&state, ListingScope::Home, params.page).await
}

pub async fn created_by(
    Extension(state): Extension<HttpState>,
    Path(author_id): Path<String>,
    Query(params): Query<ListingParams>,
) -> HttpResult<Html<String>> {
    let author_id = parse_author_id(&author_id)
        .ok_or_else(|| HttpError::not_found("author not found"))?;
    render_listing(&state, ListingScope::Author(author_id), params.page).await
}

/// Route segment is digits only; signs and whitespace do not match.
fn parse_author_id(raw: &str) -> Option<i64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

pub async fn category(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    Query(params): Query<ListingParams>,
) -> HttpResult<Html<String>> {
    render_listing(&state, ListingScope::Category(slug), params.page).await
}

pub async fn tag(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    Query(params): Query<ListingParams>,
) -> HttpResult<Html<String>> {
    render_listing(&state, ListingScope::Tag(slug), params.page).await
}

pub async fn search(
    Extension(state): Extension<HttpState>,
    Query(params): Query<SearchParams>,
) -> HttpResult<Response> {
    let outcome = state
        .services
        .post_queries
        .search_posts(SearchPostsQuery {
            search: params.search,
            page: params.page,
        })
        .await
        .into_http()?;

    match outcome {
        SearchOutcome::RedirectToIndex => {
            Ok((StatusCode::FOUND, [(header::LOCATION, "/")]).into_response())
        }
        SearchOutcome::Results(listing) => {
            Ok(views::render(views::posts::index(&state.site, &listing)).into_response())
        }
    }
}

pub async fn post_detail(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Html<String>> {
    let detail = state
        .services
        .post_queries
        .get_post_by_slug(GetPostBySlugQuery { slug })
        .await
        .into_http()?;

    Ok(views::render(views::posts::post(&state.site, &detail)))
}
