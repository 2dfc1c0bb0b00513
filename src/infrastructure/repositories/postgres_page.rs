// src/infrastructure/repositories/postgres_page.rs
use super::{invalid_row, map_sqlx};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::page::{Page, PageId, PageReadRepository};
use crate::domain::slug::Slug;
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresPageReadRepository {
    pool: PgPool,
}

impl PostgresPageReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PageRow {
    id: i64,
    title: String,
    slug: String,
    content: String,
    is_published: bool,
}

impl TryFrom<PageRow> for Page {
    type Error = DomainError;

    fn try_from(row: PageRow) -> Result<Self, Self::Error> {
        Ok(Page {
            id: PageId::new(row.id).map_err(invalid_row)?,
            title: row.title,
            slug: Slug::from_stored(row.slug),
            content: row.content,
            is_published: row.is_published,
        })
    }
}

#[async_trait]
impl PageReadRepository for PostgresPageReadRepository {
    async fn find_published_by_slug(&self, slug: &Slug) -> DomainResult<Option<Page>> {
        let row = sqlx::query_as::<_, PageRow>(
            "SELECT id, title, slug, content, is_published
             FROM pages WHERE slug = $1 AND is_published = TRUE",
        )
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Page::try_from).transpose()
    }
}
