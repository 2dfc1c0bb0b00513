// src/presentation/http/controllers/pages.rs
use crate::application::queries::pages::GetPageBySlugQuery;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use crate::presentation::http::views;
use axum::{Extension, extract::Path, response::Html};

pub async fn page_detail(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Html<String>> {
    let detail = state
        .services
        .page_queries
        .get_page_by_slug(GetPageBySlugQuery { slug })
        .await
        .into_http()?;

    Ok(views::render(views::pages::page(&state.site, &detail)))
}
