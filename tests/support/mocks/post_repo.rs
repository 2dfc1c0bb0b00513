// tests/support/mocks/post_repo.rs
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use quill_blog::domain::errors::DomainResult;
use quill_blog::domain::post::{Post, PostFilter, PostReadRepository};
use quill_blog::domain::slug::Slug;

/// Mirrors the SQL filter of the Postgres repository over an in-memory post.
fn matches(filter: &PostFilter, post: &Post) -> bool {
    let contains = |haystack: &str, needle: &str| {
        haystack.to_lowercase().contains(&needle.to_lowercase())
    };
    match filter {
        PostFilter::None => true,
        PostFilter::Author(id) => post.author.as_ref().is_some_and(|a| a.id == *id),
        PostFilter::Category(slug) => post.category.as_ref().is_some_and(|c| &c.slug == slug),
        PostFilter::Tag(slug) => post.tags.iter().any(|tag| &tag.slug == slug),
        PostFilter::Search(term) => [&post.title, &post.excerpt, &post.content]
            .into_iter()
            .any(|field| contains(field, term.as_str())),
    }
}

/// Post store that evaluates filters in memory and counts how often it is hit.
#[derive(Default)]
pub struct InMemoryPostRepo {
    posts: Vec<Post>,
    calls: AtomicUsize,
}

impl InMemoryPostRepo {
    pub fn new(posts: Vec<Post>) -> Self {
        Self {
            posts,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of repository calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn published(&self, filter: &PostFilter) -> Vec<&Post> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut posts: Vec<&Post> = self
            .posts
            .iter()
            .filter(|post| post.is_published && matches(filter, post))
            .collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.0.cmp(&a.id.0)));
        posts
    }
}

#[async_trait]
impl PostReadRepository for InMemoryPostRepo {
    async fn count_published(&self, filter: &PostFilter) -> DomainResult<u64> {
        Ok(self.published(filter).len() as u64)
    }

    async fn list_published(
        &self,
        filter: &PostFilter,
        offset: u64,
        limit: u64,
    ) -> DomainResult<Vec<Post>> {
        Ok(self
            .published(filter)
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn find_published_by_slug(&self, slug: &Slug) -> DomainResult<Option<Post>> {
        Ok(self
            .published(&PostFilter::None)
            .into_iter()
            .find(|post| &post.slug == slug)
            .cloned())
    }
}
