// tests/support/mocks/taxonomy_repo.rs
use async_trait::async_trait;
use quill_blog::domain::errors::DomainResult;
use quill_blog::domain::slug::Slug;
use quill_blog::domain::taxonomy::{Category, Tag, TaxonomyRepository};

#[derive(Default)]
pub struct InMemoryTaxonomyRepo {
    categories: Vec<Category>,
    tags: Vec<Tag>,
}

impl InMemoryTaxonomyRepo {
    pub fn new(categories: Vec<Category>, tags: Vec<Tag>) -> Self {
        Self { categories, tags }
    }
}

#[async_trait]
impl TaxonomyRepository for InMemoryTaxonomyRepo {
    async fn find_category_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>> {
        Ok(self.categories.iter().find(|c| &c.slug == slug).cloned())
    }

    async fn find_tag_by_slug(&self, slug: &Slug) -> DomainResult<Option<Tag>> {
        Ok(self.tags.iter().find(|t| &t.slug == slug).cloned())
    }
}
