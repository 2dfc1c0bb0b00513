// tests/support/mocks/page_repo.rs
use async_trait::async_trait;
use quill_blog::domain::errors::DomainResult;
use quill_blog::domain::page::{Page, PageReadRepository};
use quill_blog::domain::slug::Slug;

#[derive(Default)]
pub struct InMemoryPageRepo {
    pages: Vec<Page>,
}

impl InMemoryPageRepo {
    pub fn new(pages: Vec<Page>) -> Self {
        Self { pages }
    }
}

#[async_trait]
impl PageReadRepository for InMemoryPageRepo {
    async fn find_published_by_slug(&self, slug: &Slug) -> DomainResult<Option<Page>> {
        Ok(self
            .pages
            .iter()
            .find(|page| page.is_published && &page.slug == slug)
            .cloned())
    }
}
