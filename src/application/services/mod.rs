// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::queries::{pages::PageQueryService, posts::PostQueryService},
    domain::{
        author::AuthorRepository, page::PageReadRepository, post::PostReadRepository,
        taxonomy::TaxonomyRepository,
    },
};

pub struct ApplicationServices {
    pub post_queries: Arc<PostQueryService>,
    pub page_queries: Arc<PageQueryService>,
}

impl ApplicationServices {
    pub fn new(
        post_repo: Arc<dyn PostReadRepository>,
        page_repo: Arc<dyn PageReadRepository>,
        author_repo: Arc<dyn AuthorRepository>,
        taxonomy_repo: Arc<dyn TaxonomyRepository>,
    ) -> Self {
        let post_queries = Arc::new(PostQueryService::new(
            Arc::clone(&post_repo),
            Arc::clone(&author_repo),
            Arc::clone(&taxonomy_repo),
        ));
        let page_queries = Arc::new(PageQueryService::new(Arc::clone(&page_repo)));

        Self {
            post_queries,
            page_queries,
        }
    }
}
