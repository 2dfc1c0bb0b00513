use crate::presentation::http::state::SiteSettings;
use maud::{DOCTYPE, Markup, html};

/// Page chrome shared by every template. The document title is the
/// `page_title` followed by the site name.
pub fn layout(
    site: &SiteSettings,
    page_title: &str,
    search_value: Option<&str>,
    content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="pt-br" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (page_title) (site.title) }
            }
            body {
                header.site-header {
                    a.site-title href="/" { (site.title) }
                    form.search-form action="/search/" method="get" {
                        input type="search" name="search" placeholder="Search"
                            value=[search_value];
                        button type="submit" { "Search" }
                    }
                }
                main.content { (content) }
            }
        }
    }
}
