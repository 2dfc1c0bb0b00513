// tests/support/mocks/user_repo.rs
use async_trait::async_trait;
use quill_blog::domain::author::{Author, AuthorId, AuthorRepository};
use quill_blog::domain::errors::DomainResult;

#[derive(Default)]
pub struct InMemoryAuthorRepo {
    authors: Vec<Author>,
}

impl InMemoryAuthorRepo {
    pub fn new(authors: Vec<Author>) -> Self {
        Self { authors }
    }
}

#[async_trait]
impl AuthorRepository for InMemoryAuthorRepo {
    async fn find_by_id(&self, id: AuthorId) -> DomainResult<Option<Author>> {
        Ok(self.authors.iter().find(|author| author.id == id).cloned())
    }
}
