use crate::domain::errors::DomainResult;
use crate::domain::page::entity::Page;
use crate::domain::slug::Slug;
use async_trait::async_trait;

#[async_trait]
pub trait PageReadRepository: Send + Sync {
    /// Returns the page only when it is published.
    async fn find_published_by_slug(&self, slug: &Slug) -> DomainResult<Option<Page>>;
}
