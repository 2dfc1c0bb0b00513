mod detail;
mod list;
mod search;
mod service;

pub use detail::GetPostBySlugQuery;
pub use list::{ListPostsQuery, ListingScope};
pub use search::{SearchOutcome, SearchPostsQuery};
pub use service::PostQueryService;
