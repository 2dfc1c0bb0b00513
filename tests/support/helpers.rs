// tests/support/helpers.rs
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{HeaderMap, Request, StatusCode};
use tower::util::ServiceExt as _;

use quill_blog::application::services::ApplicationServices;
use quill_blog::domain::author::Author;
use quill_blog::domain::page::Page;
use quill_blog::domain::post::Post;
use quill_blog::domain::taxonomy::{Category, Tag};
use quill_blog::presentation::http::routes::build_router;
use quill_blog::presentation::http::state::{HttpState, SiteSettings};

use super::mocks::{InMemoryAuthorRepo, InMemoryPageRepo, InMemoryPostRepo, InMemoryTaxonomyRepo};

pub const SITE_TITLE: &str = "Blog";

/// Content for one test run. Build services or a full router from it.
#[derive(Default)]
pub struct BlogFixture {
    pub posts: Vec<Post>,
    pub pages: Vec<Page>,
    pub authors: Vec<Author>,
    pub categories: Vec<Category>,
    pub tags: Vec<Tag>,
}

pub struct BuiltBlog {
    pub services: Arc<ApplicationServices>,
    pub post_repo: Arc<InMemoryPostRepo>,
}

impl BlogFixture {
    pub fn build(self) -> BuiltBlog {
        let post_repo = Arc::new(InMemoryPostRepo::new(self.posts));
        let services = Arc::new(ApplicationServices::new(
            post_repo.clone(),
            Arc::new(InMemoryPageRepo::new(self.pages)),
            Arc::new(InMemoryAuthorRepo::new(self.authors)),
            Arc::new(InMemoryTaxonomyRepo::new(self.categories, self.tags)),
        ));
        BuiltBlog {
            services,
            post_repo,
        }
    }
}

impl BuiltBlog {
    pub fn router(&self) -> axum::Router {
        let state = HttpState {
            services: Arc::clone(&self.services),
            site: Arc::new(SiteSettings {
                title: SITE_TITLE.into(),
            }),
        };
        build_router(state)
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

pub async fn get(app: axum::Router, uri: &str) -> TestResponse {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let (parts, body_stream) = resp.into_parts();
    let bytes = body::to_bytes(body_stream, 1024 * 1024).await.expect("read body");
    TestResponse {
        status,
        headers: parts.headers,
        body: String::from_utf8_lossy(&bytes).into_owned(),
    }
}

/// Assert an HTML response with the given status.
pub fn assert_html(resp: &TestResponse, expected: StatusCode) {
    assert_eq!(resp.status, expected, "unexpected status, body: {}", resp.body);
    let ct = resp
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("text/html"), "unexpected content-type: {ct}");
}
