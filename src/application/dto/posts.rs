use crate::application::dto::pagination::Paginated;
use crate::domain::author::Author;
use crate::domain::post::Post;
use crate::domain::taxonomy::{Category, Tag};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct AuthorDto {
    pub id: i64,
    pub display_name: String,
}

impl From<Author> for AuthorDto {
    fn from(author: Author) -> Self {
        Self {
            display_name: author.display_name(),
            id: author.id.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryDto {
    pub name: String,
    pub slug: String,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            name: category.name,
            slug: category.slug.into_inner(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TagDto {
    pub name: String,
    pub slug: String,
}

impl From<Tag> for TagDto {
    fn from(tag: Tag) -> Self {
        Self {
            name: tag.name,
            slug: tag.slug.into_inner(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PostDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub author: Option<AuthorDto>,
    pub category: Option<CategoryDto>,
    pub tags: Vec<TagDto>,
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.into(),
            title: post.title,
            slug: post.slug.into_inner(),
            excerpt: post.excerpt,
            content: post.content,
            created_at: post.created_at,
            author: post.author.map(Into::into),
            category: post.category.map(Into::into),
            tags: post.tags.into_iter().map(Into::into).collect(),
        }
    }
}

/// Everything the listing template needs for one page of posts.
#[derive(Debug, Clone, Serialize)]
pub struct PostListing {
    pub page_title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_value: Option<String>,
    pub posts: Paginated<PostDto>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PostDetail {
    pub page_title: String,
    pub post: PostDto,
}
