// src/domain/page/mod.rs
pub mod entity;
pub mod repository;

pub use entity::{Page, PageId};
pub use repository::PageReadRepository;
