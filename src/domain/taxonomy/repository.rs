use crate::domain::errors::DomainResult;
use crate::domain::slug::Slug;
use crate::domain::taxonomy::entity::{Category, Tag};
use async_trait::async_trait;

#[async_trait]
pub trait TaxonomyRepository: Send + Sync {
    async fn find_category_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>>;
    async fn find_tag_by_slug(&self, slug: &Slug) -> DomainResult<Option<Tag>>;
}
