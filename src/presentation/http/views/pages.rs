use crate::application::dto::PageDetail;
use crate::presentation::http::state::SiteSettings;
use crate::presentation::http::views::layout::layout;
use maud::{Markup, PreEscaped, html};

pub fn page(site: &SiteSettings, detail: &PageDetail) -> Markup {
    let page = &detail.page;
    layout(
        site,
        &detail.page_title,
        None,
        html! {
            article.single-page {
                h1 { (page.title) }
                div.page-content { (PreEscaped(&page.content)) }
            }
        },
    )
}
