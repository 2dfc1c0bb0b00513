mod detail;
mod service;

pub use detail::GetPageBySlugQuery;
pub use service::PageQueryService;
