use crate::application::dto::{Paginated, PostDetail, PostDto, PostListing};
use crate::presentation::http::state::SiteSettings;
use crate::presentation::http::views::layout::layout;
use maud::{Markup, PreEscaped, html};

const DATE_FORMAT: &str = "%d/%m/%Y %H:%M";

pub fn index(site: &SiteSettings, listing: &PostListing) -> Markup {
    let search_value = listing.search_value.as_deref();
    layout(
        site,
        &listing.page_title,
        search_value,
        html! {
            section.post-list {
                @if listing.posts.items.is_empty() {
                    p.empty { "No posts found." }
                }
                @for post in &listing.posts.items {
                    (card(post))
                }
            }
            (pagination(&listing.posts, search_value))
        },
    )
}

pub fn post(site: &SiteSettings, detail: &PostDetail) -> Markup {
    let post = &detail.post;
    layout(
        site,
        &detail.page_title,
        None,
        html! {
            article.single-post {
                h1 { (post.title) }
                (meta(post))
                @if !post.excerpt.is_empty() {
                    p.excerpt { (post.excerpt) }
                }
                div.post-content { (PreEscaped(&post.content)) }
                @if !post.tags.is_empty() {
                    ul.tags {
                        @for tag in &post.tags {
                            li { a href={ "/tag/" (tag.slug) "/" } { (tag.name) } }
                        }
                    }
                }
            }
        },
    )
}

fn card(post: &PostDto) -> Markup {
    html! {
        article.post-card {
            h2 { a href={ "/post/" (post.slug) "/" } { (post.title) } }
            (meta(post))
            p.excerpt { (post.excerpt) }
        }
    }
}

fn meta(post: &PostDto) -> Markup {
    html! {
        p.post-meta {
            time datetime=(post.created_at.to_rfc3339()) {
                (post.created_at.format(DATE_FORMAT).to_string())
            }
            @if let Some(author) = &post.author {
                " | "
                a href={ "/created_by/" (author.id) "/" } { (author.display_name) }
            }
            @if let Some(category) = &post.category {
                " | "
                a href={ "/category/" (category.slug) "/" } { (category.name) }
            }
        }
    }
}

fn pagination<T>(page: &Paginated<T>, search_value: Option<&str>) -> Markup {
    html! {
        @if page.num_pages > 1 {
            nav.pagination {
                @if let Some(previous) = page.previous_page_number {
                    a href=(page_href(previous, search_value)) { "Previous" }
                }
                span.current { (page.number) " / " (page.num_pages) }
                @if let Some(next) = page.next_page_number {
                    a href=(page_href(next, search_value)) { "Next" }
                }
            }
        }
    }
}

/// Relative link to another page of the same listing.
fn page_href(number: u64, search_value: Option<&str>) -> String {
    let number = number.to_string();
    let mut params = Vec::with_capacity(2);
    if let Some(search) = search_value {
        params.push(("search", search));
    }
    params.push(("page", number.as_str()));
    let query = serde_urlencoded::to_string(&params).unwrap_or_else(|_| format!("page={number}"));
    format!("?{query}")
}
