// tests/support/builders.rs
use chrono::{DateTime, Duration, TimeZone, Utc};

use quill_blog::domain::author::{Author, AuthorId};
use quill_blog::domain::page::{Page, PageId};
use quill_blog::domain::post::{Post, PostId};
use quill_blog::domain::slug::Slug;
use quill_blog::domain::taxonomy::{Category, Tag};

fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap()
}

pub fn author(id: i64, username: &str, first_name: &str, last_name: &str) -> Author {
    Author {
        id: AuthorId::new(id).unwrap(),
        username: username.into(),
        first_name: first_name.into(),
        last_name: last_name.into(),
    }
}

pub fn category(id: i64, name: &str) -> Category {
    Category {
        id,
        name: name.into(),
        slug: Slug::new(slug::slugify(name)).unwrap(),
    }
}

pub fn tag(id: i64, name: &str) -> Tag {
    Tag {
        id,
        name: name.into(),
        slug: Slug::new(slug::slugify(name)).unwrap(),
    }
}

/// Posts default to unpublished and get a creation time that grows with the
/// id, so higher ids are newer.
pub struct PostBuilder {
    id: i64,
    title: String,
    excerpt: String,
    content: String,
    published: bool,
    author: Option<Author>,
    category: Option<Category>,
    tags: Vec<Tag>,
}

impl PostBuilder {
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            excerpt: "Test excerpt".into(),
            content: "<p>Test content</p>".into(),
            published: false,
            author: None,
            category: None,
            tags: Vec::new(),
        }
    }

    pub fn published(mut self) -> Self {
        self.published = true;
        self
    }

    pub fn excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = excerpt.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn author(mut self, author: Author) -> Self {
        self.author = Some(author);
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn tag(mut self, tag: Tag) -> Self {
        self.tags.push(tag);
        self
    }

    pub fn build(self) -> Post {
        Post {
            id: PostId::new(self.id).unwrap(),
            slug: Slug::new(slug::slugify(&self.title)).unwrap(),
            title: self.title,
            excerpt: self.excerpt,
            content: self.content,
            is_published: self.published,
            created_at: epoch() + Duration::minutes(self.id),
            author: self.author,
            category: self.category,
            tags: self.tags,
        }
    }
}

pub fn page(id: i64, title: &str, published: bool) -> Page {
    Page {
        id: PageId::new(id).unwrap(),
        title: title.into(),
        slug: Slug::new(slug::slugify(title)).unwrap(),
        content: format!("<p>{title} body</p>"),
        is_published: published,
    }
}
