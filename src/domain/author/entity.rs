// src/domain/author/entity.rs
use crate::domain::author::value_objects::AuthorId;

/// A user account as seen by the public site. Only used to attribute posts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: AuthorId,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

impl Author {
    /// `"{first} {last}"` when a first name is set, the username otherwise.
    pub fn display_name(&self) -> String {
        if self.first_name.is_empty() {
            self.username.clone()
        } else {
            format!("{} {}", self.first_name, self.last_name)
        }
    }
}
