// src/domain/page/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::Slug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageId(pub i64);

impl PageId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("page id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<PageId> for i64 {
    fn from(value: PageId) -> Self {
        value.0
    }
}

/// A standalone page (about, contact, ...). Not part of any listing.
#[derive(Debug, Clone)]
pub struct Page {
    pub id: PageId,
    pub title: String,
    pub slug: Slug,
    pub content: String,
    pub is_published: bool,
}
