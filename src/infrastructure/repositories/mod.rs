// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_author;
mod postgres_page;
mod postgres_post;
mod postgres_taxonomy;

use error::{invalid_row, map_sqlx};

pub use postgres_author::PostgresAuthorRepository;
pub use postgres_page::PostgresPageReadRepository;
pub use postgres_post::PostgresPostReadRepository;
pub use postgres_taxonomy::PostgresTaxonomyRepository;
