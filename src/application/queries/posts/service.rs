use std::sync::Arc;

use crate::domain::{
    author::AuthorRepository, post::PostReadRepository, taxonomy::TaxonomyRepository,
};

pub struct PostQueryService {
    pub(super) post_repo: Arc<dyn PostReadRepository>,
    pub(super) author_repo: Arc<dyn AuthorRepository>,
    pub(super) taxonomy_repo: Arc<dyn TaxonomyRepository>,
}

impl PostQueryService {
    pub fn new(
        post_repo: Arc<dyn PostReadRepository>,
        author_repo: Arc<dyn AuthorRepository>,
        taxonomy_repo: Arc<dyn TaxonomyRepository>,
    ) -> Self {
        Self {
            post_repo,
            author_repo,
            taxonomy_repo,
        }
    }
}
