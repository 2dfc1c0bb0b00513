use super::{
    PostQueryService,
    list::{ListPostsQuery, ListingScope},
};
use crate::{
    application::{dto::PostListing, error::ApplicationResult},
    domain::post::SearchTerm,
};

pub struct SearchPostsQuery {
    /// Raw `search` query parameter, untrimmed.
    pub search: Option<String>,
    pub page: Option<String>,
}

#[derive(Debug)]
pub enum SearchOutcome {
    /// Blank search input; nothing was queried.
    RedirectToIndex,
    Results(PostListing),
}

impl PostQueryService {
    pub async fn search_posts(&self, query: SearchPostsQuery) -> ApplicationResult<SearchOutcome> {
        let Some(term) = SearchTerm::capture(query.search.as_deref()) else {
            return Ok(SearchOutcome::RedirectToIndex);
        };

        let listing = self
            .list_posts(ListPostsQuery {
                scope: ListingScope::Search(term),
                page: query.page,
            })
            .await?;
        Ok(SearchOutcome::Results(listing))
    }
}
