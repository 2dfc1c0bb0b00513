// tests/support/mocks/mod.rs
//! In-memory repositories backing the integration tests.
pub mod page_repo;
pub mod post_repo;
pub mod user_repo;
pub mod taxonomy_repo;

pub use page_repo::InMemoryPageRepo;
pub use post_repo::InMemoryPostRepo;
pub use taxonomy_repo::InMemoryTaxonomyRepo;
pub use user_repo::InMemoryAuthorRepo;
