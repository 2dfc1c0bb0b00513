// src/domain/mod.rs
pub mod author;
pub mod errors;
pub mod page;
pub mod post;
pub mod slug;
pub mod taxonomy;
