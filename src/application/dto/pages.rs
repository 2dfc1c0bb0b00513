use crate::domain::page::Page;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct PageDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub content: String,
}

impl From<Page> for PageDto {
    fn from(page: Page) -> Self {
        Self {
            id: page.id.into(),
            title: page.title,
            slug: page.slug.into_inner(),
            content: page.content,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PageDetail {
    pub page_title: String,
    pub page: PageDto,
}
