// src/domain/taxonomy/mod.rs
pub mod entity;
pub mod repository;

pub use entity::{Category, Tag};
pub use repository::TaxonomyRepository;
