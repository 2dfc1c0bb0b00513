//! `page_title` strings. Each ends with a separator; the layout appends the
//! site name.
use crate::domain::author::Author;
use crate::domain::post::SearchTerm;
use crate::domain::taxonomy::{Category, Tag};

pub(crate) fn home() -> String {
    "Home - ".to_string()
}

pub(crate) fn author(author: &Author) -> String {
    format!("Posts by {} - ", author.display_name())
}

pub(crate) fn category(category: &Category) -> String {
    format!("{} - Categoria - ", category.name)
}

pub(crate) fn tag(tag: &Tag) -> String {
    format!("{} - Tag - ", tag.name)
}

pub(crate) fn search(term: &SearchTerm) -> String {
    format!("{} - Search - ", term.preview())
}

pub(crate) fn post(title: &str) -> String {
    format!("{title} - Post - ")
}

pub(crate) fn page(title: &str) -> String {
    format!("{title} - Página - ")
}
