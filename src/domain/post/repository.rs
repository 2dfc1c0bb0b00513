use crate::domain::errors::DomainResult;
use crate::domain::post::{entity::Post, filter::PostFilter};
use crate::domain::slug::Slug;
use async_trait::async_trait;

/// Read side of the post store. Every method only ever sees published posts,
/// ordered newest first.
#[async_trait]
pub trait PostReadRepository: Send + Sync {
    async fn count_published(&self, filter: &PostFilter) -> DomainResult<u64>;

    async fn list_published(
        &self,
        filter: &PostFilter,
        offset: u64,
        limit: u64,
    ) -> DomainResult<Vec<Post>>;

    async fn find_published_by_slug(&self, slug: &Slug) -> DomainResult<Option<Post>>;
}
