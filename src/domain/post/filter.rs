// src/domain/post/filter.rs
use crate::domain::author::AuthorId;
use crate::domain::post::value_objects::SearchTerm;
use crate::domain::slug::Slug;

/// Narrowing applied on top of the published-post listing. Publication status
/// is not part of the filter; repositories always restrict to published posts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostFilter {
    None,
    Author(AuthorId),
    Category(Slug),
    Tag(Slug),
    /// Title, excerpt or content contains the term, ignoring case.
    Search(SearchTerm),
}
