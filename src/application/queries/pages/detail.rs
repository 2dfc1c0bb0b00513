use super::PageQueryService;
use crate::{
    application::{
        dto::PageDetail,
        error::{ApplicationError, ApplicationResult},
        queries::titles,
    },
    domain::slug::Slug,
};

pub struct GetPageBySlugQuery {
    pub slug: String,
}

impl PageQueryService {
    pub async fn get_page_by_slug(&self, query: GetPageBySlugQuery) -> ApplicationResult<PageDetail> {
        let slug =
            Slug::new(query.slug).map_err(|_| ApplicationError::not_found("page not found"))?;
        let page = self
            .page_repo
            .find_published_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("page not found"))?;

        Ok(PageDetail {
            page_title: titles::page(&page.title),
            page: page.into(),
        })
    }
}
