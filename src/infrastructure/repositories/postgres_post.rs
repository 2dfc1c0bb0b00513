// src/infrastructure/repositories/postgres_post.rs
use super::{invalid_row, map_sqlx};
use crate::domain::author::{Author, AuthorId};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{Post, PostFilter, PostId, PostReadRepository};
use crate::domain::slug::Slug;
use crate::domain::taxonomy::{Category, Tag};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use std::collections::HashMap;

const SELECT_POSTS: &str = "SELECT p.id, p.title, p.slug, p.excerpt, p.content, p.is_published, p.created_at,
        u.id AS author_id, u.username AS author_username,
        u.first_name AS author_first_name, u.last_name AS author_last_name,
        c.id AS category_id, c.name AS category_name, c.slug AS category_slug
 FROM posts p
 LEFT JOIN users u ON u.id = p.created_by
 LEFT JOIN categories c ON c.id = p.category_id
 WHERE p.is_published = TRUE";

const COUNT_POSTS: &str = "SELECT COUNT(*) FROM posts p
 LEFT JOIN categories c ON c.id = p.category_id
 WHERE p.is_published = TRUE";

#[derive(Clone)]
pub struct PostgresPostReadRepository {
    pool: PgPool,
}

impl PostgresPostReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PostRow {
    id: i64,
    title: String,
    slug: String,
    excerpt: String,
    content: String,
    is_published: bool,
    created_at: DateTime<Utc>,
    author_id: Option<i64>,
    author_username: Option<String>,
    author_first_name: Option<String>,
    author_last_name: Option<String>,
    category_id: Option<i64>,
    category_name: Option<String>,
    category_slug: Option<String>,
}

#[derive(Debug, FromRow)]
struct PostTagRow {
    post_id: i64,
    id: i64,
    name: String,
    slug: String,
}

impl PostRow {
    fn into_post(self, tags: Vec<Tag>) -> DomainResult<Post> {
        let author = match (self.author_id, self.author_username) {
            (Some(id), Some(username)) => Some(Author {
                id: AuthorId::new(id).map_err(invalid_row)?,
                username,
                first_name: self.author_first_name.unwrap_or_default(),
                last_name: self.author_last_name.unwrap_or_default(),
            }),
            _ => None,
        };

        let category = match (self.category_id, self.category_name, self.category_slug) {
            (Some(id), Some(name), Some(slug)) => Some(Category {
                id,
                name,
                slug: Slug::from_stored(slug),
            }),
            _ => None,
        };

        Ok(Post {
            id: PostId::new(self.id).map_err(invalid_row)?,
            title: self.title,
            slug: Slug::from_stored(self.slug),
            excerpt: self.excerpt,
            content: self.content,
            is_published: self.is_published,
            created_at: self.created_at,
            author,
            category,
            tags,
        })
    }
}

fn to_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

impl PostgresPostReadRepository {
    fn count_query(filter: &PostFilter) -> QueryBuilder<'static, Postgres> {
        let mut builder = QueryBuilder::new(COUNT_POSTS);
        Self::apply_filter(&mut builder, filter);
        builder
    }

    fn list_query(
        filter: &PostFilter,
        offset: u64,
        limit: u64,
    ) -> QueryBuilder<'static, Postgres> {
        let mut builder = QueryBuilder::new(SELECT_POSTS);
        Self::apply_filter(&mut builder, filter);
        builder.push(" ORDER BY p.created_at DESC, p.id DESC LIMIT ");
        builder.push_bind(to_i64(limit));
        builder.push(" OFFSET ");
        builder.push_bind(to_i64(offset));
        builder
    }

    fn apply_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &PostFilter) {
        match filter {
            PostFilter::None => {}
            PostFilter::Author(id) => {
                builder.push(" AND p.created_by = ");
                builder.push_bind(i64::from(*id));
            }
            PostFilter::Category(slug) => {
                builder.push(" AND c.slug = ");
                builder.push_bind(slug.as_str().to_owned());
            }
            PostFilter::Tag(slug) => {
                builder.push(
                    " AND EXISTS (SELECT 1 FROM post_tags pt JOIN tags t ON t.id = pt.tag_id
                     WHERE pt.post_id = p.id AND t.slug = ",
                );
                builder.push_bind(slug.as_str().to_owned());
                builder.push(")");
            }
            PostFilter::Search(term) => {
                let pattern = term.like_pattern();
                builder.push(" AND (p.title ILIKE ");
                builder.push_bind(pattern.clone());
                builder.push(" OR p.excerpt ILIKE ");
                builder.push_bind(pattern.clone());
                builder.push(" OR p.content ILIKE ");
                builder.push_bind(pattern);
                builder.push(")");
            }
        }
    }

    async fn load_tags(&self, post_ids: Vec<i64>) -> DomainResult<HashMap<i64, Vec<Tag>>> {
        if post_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = sqlx::query_as::<_, PostTagRow>(
            "SELECT pt.post_id, t.id, t.name, t.slug
             FROM post_tags pt JOIN tags t ON t.id = pt.tag_id
             WHERE pt.post_id = ANY($1)
             ORDER BY t.name",
        )
        .bind(post_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let mut tags: HashMap<i64, Vec<Tag>> = HashMap::new();
        for row in rows {
            tags.entry(row.post_id).or_default().push(Tag {
                id: row.id,
                name: row.name,
                slug: Slug::from_stored(row.slug),
            });
        }
        Ok(tags)
    }

    async fn hydrate(&self, rows: Vec<PostRow>) -> DomainResult<Vec<Post>> {
        let mut tags = self.load_tags(rows.iter().map(|row| row.id).collect()).await?;
        rows.into_iter()
            .map(|row| {
                let post_tags = tags.remove(&row.id).unwrap_or_default();
                row.into_post(post_tags)
            })
            .collect()
    }
}

#[async_trait]
impl PostReadRepository for PostgresPostReadRepository {
    async fn count_published(&self, filter: &PostFilter) -> DomainResult<u64> {
        let mut builder = Self::count_query(filter);
        let count = builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        u64::try_from(count)
            .map_err(|_| DomainError::Persistence(format!("negative row count: {count}")))
    }

    async fn list_published(
        &self,
        filter: &PostFilter,
        offset: u64,
        limit: u64,
    ) -> DomainResult<Vec<Post>> {
        let mut builder = Self::list_query(filter, offset, limit);
        let rows = builder
            .build_query_as::<PostRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        self.hydrate(rows).await
    }

    async fn find_published_by_slug(&self, slug: &Slug) -> DomainResult<Option<Post>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(SELECT_POSTS);
        builder.push(" AND p.slug = ");
        builder.push_bind(slug.as_str().to_owned());

        let row = builder
            .build_query_as::<PostRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        match row {
            Some(row) => Ok(self.hydrate(vec![row]).await?.pop()),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::post::SearchTerm;

    fn slug(value: &str) -> Slug {
        Slug::new(value).unwrap()
    }

    fn row(id: i64, slug: &str) -> PostRow {
        PostRow {
            id,
            title: "Intro to Rust".into(),
            slug: slug.into(),
            excerpt: String::new(),
            content: String::new(),
            is_published: true,
            created_at: Utc::now(),
            author_id: None,
            author_username: None,
            author_first_name: None,
            author_last_name: None,
            category_id: Some(4),
            category_name: Some("C++".into()),
            category_slug: Some("c++".into()),
        }
    }

    #[test]
    fn every_query_is_restricted_to_published_posts() {
        let filters = [
            PostFilter::None,
            PostFilter::Author(AuthorId::new(3).unwrap()),
            PostFilter::Category(slug("languages")),
            PostFilter::Tag(slug("rust")),
            PostFilter::Search(SearchTerm::capture(Some("intro")).unwrap()),
        ];
        for filter in &filters {
            let count = PostgresPostReadRepository::count_query(filter);
            let list = PostgresPostReadRepository::list_query(filter, 0, 9);
            assert!(count.sql().contains("WHERE p.is_published = TRUE"), "{filter:?}");
            assert!(list.sql().contains("WHERE p.is_published = TRUE"), "{filter:?}");
        }
    }

    #[test]
    fn unfiltered_listing_orders_newest_first_and_pages() {
        let query = PostgresPostReadRepository::list_query(&PostFilter::None, 18, 9);
        assert!(
            query
                .sql()
                .ends_with(" ORDER BY p.created_at DESC, p.id DESC LIMIT $1 OFFSET $2")
        );
    }

    #[test]
    fn author_and_category_filters_bind_a_single_value() {
        let author = PostgresPostReadRepository::count_query(&PostFilter::Author(
            AuthorId::new(3).unwrap(),
        ));
        assert!(author.sql().ends_with(" AND p.created_by = $1"));

        let category =
            PostgresPostReadRepository::count_query(&PostFilter::Category(slug("languages")));
        assert!(category.sql().ends_with(" AND c.slug = $1"));
    }

    #[test]
    fn tag_filter_uses_an_exists_subquery() {
        let query = PostgresPostReadRepository::list_query(&PostFilter::Tag(slug("rust")), 0, 9);
        let sql = query.sql();
        assert!(
            sql.contains(" AND EXISTS (SELECT 1 FROM post_tags pt JOIN tags t ON t.id = pt.tag_id")
        );
        assert!(sql.contains("WHERE pt.post_id = p.id AND t.slug = $1)"));
        assert!(sql.contains("LIMIT $2 OFFSET $3"));
    }

    #[test]
    fn search_filter_ors_title_excerpt_and_content() {
        let term = SearchTerm::capture(Some("100%")).unwrap();
        let query = PostgresPostReadRepository::count_query(&PostFilter::Search(term));
        assert!(
            query
                .sql()
                .ends_with(" AND (p.title ILIKE $1 OR p.excerpt ILIKE $2 OR p.content ILIKE $3)")
        );
    }

    #[test]
    fn stored_slugs_are_kept_as_is() {
        let post = row(1, "rust-1.80").into_post(Vec::new()).unwrap();
        assert_eq!(post.slug.as_str(), "rust-1.80");
        assert_eq!(post.category.unwrap().slug.as_str(), "c++");
    }

    #[test]
    fn invalid_stored_id_is_a_persistence_fault() {
        let err = row(0, "zero").into_post(Vec::new()).unwrap_err();
        assert!(matches!(err, DomainError::Persistence(_)), "{err:?}");
    }
}
