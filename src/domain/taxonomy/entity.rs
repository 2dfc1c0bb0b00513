// src/domain/taxonomy/entity.rs
use crate::domain::slug::Slug;

/// A post belongs to at most one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub slug: Slug,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: i64,
    pub name: String,
    pub slug: Slug,
}
