// src/infrastructure/repositories/postgres_taxonomy.rs
use super::map_sqlx;
use crate::domain::errors::DomainResult;
use crate::domain::slug::Slug;
use crate::domain::taxonomy::{Category, Tag, TaxonomyRepository};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresTaxonomyRepository {
    pool: PgPool,
}

impl PostgresTaxonomyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Categories and tags share the same column layout.
#[derive(Debug, FromRow)]
struct TermRow {
    id: i64,
    name: String,
    slug: String,
}

impl TermRow {
    fn into_category(self) -> Category {
        Category {
            id: self.id,
            name: self.name,
            slug: Slug::from_stored(self.slug),
        }
    }

    fn into_tag(self) -> Tag {
        Tag {
            id: self.id,
            name: self.name,
            slug: Slug::from_stored(self.slug),
        }
    }
}

#[async_trait]
impl TaxonomyRepository for PostgresTaxonomyRepository {
    async fn find_category_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>> {
        let row = sqlx::query_as::<_, TermRow>(
            "SELECT id, name, slug FROM categories WHERE slug = $1",
        )
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(row.map(TermRow::into_category))
    }

    async fn find_tag_by_slug(&self, slug: &Slug) -> DomainResult<Option<Tag>> {
        let row = sqlx::query_as::<_, TermRow>("SELECT id, name, slug FROM tags WHERE slug = $1")
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(row.map(TermRow::into_tag))
    }
}
