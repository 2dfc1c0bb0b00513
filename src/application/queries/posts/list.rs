use super::PostQueryService;
use crate::{
    application::{
        dto::{PER_PAGE, Paginated, Paginator, PostDto, PostListing},
        error::{ApplicationError, ApplicationResult},
        queries::titles,
    },
    domain::{
        author::{Author, AuthorId},
        post::{PostFilter, SearchTerm},
        slug::Slug,
    },
};

/// Which slice of the published posts a listing request asks for.
#[derive(Debug, Clone)]
pub enum ListingScope {
    Home,
    Author(i64),
    Category(String),
    Tag(String),
    Search(SearchTerm),
}

pub struct ListPostsQuery {
    pub scope: ListingScope,
    /// Raw `page` query parameter.
    pub page: Option<String>,
}

#[derive(Debug, Clone, Copy)]
struct ListingPolicy {
    allow_empty: bool,
    cap: Option<u64>,
}

impl ListingPolicy {
    const BASE: Self = Self {
        allow_empty: true,
        cap: None,
    };
    const NON_EMPTY: Self = Self {
        allow_empty: false,
        cap: None,
    };
    // Search results are limited to a single page of matches.
    const SEARCH: Self = Self {
        allow_empty: true,
        cap: Some(PER_PAGE),
    };
}

impl PostQueryService {
    pub async fn list_posts(&self, query: ListPostsQuery) -> ApplicationResult<PostListing> {
        let ListPostsQuery { scope, page } = query;
        let page = page.as_deref();

        match scope {
            ListingScope::Home => {
                let posts = self
                    .paginate(&PostFilter::None, ListingPolicy::BASE, page)
                    .await?;
                Ok(PostListing {
                    page_title: titles::home(),
                    search_value: None,
                    posts,
                })
            }
            ListingScope::Author(raw_id) => {
                let author = self.find_author(raw_id).await?;
                let posts = self
                    .paginate(&PostFilter::Author(author.id), ListingPolicy::BASE, page)
                    .await?;
                Ok(PostListing {
                    page_title: titles::author(&author),
                    search_value: None,
                    posts,
                })
            }
            ListingScope::Category(raw_slug) => {
                let slug = route_slug(raw_slug, "category not found")?;
                let posts = self
                    .paginate(
                        &PostFilter::Category(slug.clone()),
                        ListingPolicy::NON_EMPTY,
                        page,
                    )
                    .await?;
                let category = self
                    .taxonomy_repo
                    .find_category_by_slug(&slug)
                    .await?
                    .ok_or_else(|| ApplicationError::not_found("category not found"))?;
                Ok(PostListing {
                    page_title: titles::category(&category),
                    search_value: None,
                    posts,
                })
            }
            ListingScope::Tag(raw_slug) => {
                let slug = route_slug(raw_slug, "tag not found")?;
                let posts = self
                    .paginate(&PostFilter::Tag(slug.clone()), ListingPolicy::NON_EMPTY, page)
                    .await?;
                let tag = self
                    .taxonomy_repo
                    .find_tag_by_slug(&slug)
                    .await?
                    .ok_or_else(|| ApplicationError::not_found("tag not found"))?;
                Ok(PostListing {
                    page_title: titles::tag(&tag),
                    search_value: None,
                    posts,
                })
            }
            ListingScope::Search(term) => {
                let page_title = titles::search(&term);
                let search_value = Some(term.as_str().to_string());
                let posts = self
                    .paginate(&PostFilter::Search(term), ListingPolicy::SEARCH, page)
                    .await?;
                Ok(PostListing {
                    page_title,
                    search_value,
                    posts,
                })
            }
        }
    }

    async fn find_author(&self, raw_id: i64) -> ApplicationResult<Author> {
        let id = AuthorId::new(raw_id).map_err(|_| ApplicationError::not_found("author not found"))?;
        self.author_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("author not found"))
    }

    async fn paginate(
        &self,
        filter: &PostFilter,
        policy: ListingPolicy,
        page: Option<&str>,
    ) -> ApplicationResult<Paginated<PostDto>> {
        let mut count = self.post_repo.count_published(filter).await?;
        if let Some(cap) = policy.cap {
            count = count.min(cap);
        }
        if count == 0 && !policy.allow_empty {
            return Err(ApplicationError::not_found("no published posts match"));
        }

        let paginator = Paginator::new(PER_PAGE, policy.allow_empty);
        let number = paginator.resolve(page, count)?;
        let offset = paginator.offset(number);
        let limit = paginator.per_page().min(count.saturating_sub(offset));
        tracing::debug!(?filter, number, count, "listing published posts");

        let records = if limit == 0 {
            Vec::new()
        } else {
            self.post_repo.list_published(filter, offset, limit).await?
        };

        Ok(Paginated::new(records, number, count, &paginator).map(PostDto::from))
    }
}

/// Malformed slugs cannot name anything, so they are reported as missing.
pub(super) fn route_slug(raw: String, missing: &'static str) -> ApplicationResult<Slug> {
    Slug::new(raw).map_err(|_| ApplicationError::not_found(missing))
}
