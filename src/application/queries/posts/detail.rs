use super::{PostQueryService, list::route_slug};
use crate::application::{
    dto::PostDetail,
    error::{ApplicationError, ApplicationResult},
    queries::titles,
};

pub struct GetPostBySlugQuery {
    pub slug: String,
}

impl PostQueryService {
    pub async fn get_post_by_slug(&self, query: GetPostBySlugQuery) -> ApplicationResult<PostDetail> {
        let slug = route_slug(query.slug, "post not found")?;
        let post = self
            .post_repo
            .find_published_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        Ok(PostDetail {
            page_title: titles::post(&post.title),
            post: post.into(),
        })
    }
}
