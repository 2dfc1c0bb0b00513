// src/domain/post/entity.rs
use crate::domain::author::Author;
use crate::domain::post::value_objects::PostId;
use crate::domain::slug::Slug;
use crate::domain::taxonomy::{Category, Tag};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub slug: Slug,
    pub excerpt: String,
    pub content: String,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub author: Option<Author>,
    pub category: Option<Category>,
    pub tags: Vec<Tag>,
}
