pub mod pages;
pub mod pagination;
pub mod posts;

pub use pages::{PageDetail, PageDto};
pub use pagination::{PER_PAGE, Paginated, Paginator};
pub use posts::{AuthorDto, CategoryDto, PostDetail, PostDto, PostListing, TagDto};
