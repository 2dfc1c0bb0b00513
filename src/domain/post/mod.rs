// src/domain/post/mod.rs
pub mod entity;
pub mod filter;
pub mod repository;
pub mod value_objects;

pub use entity::Post;
pub use filter::PostFilter;
pub use repository::PostReadRepository;
pub use value_objects::{PostId, SearchTerm};
