//! Server-side HTML, rendered with maud. Every template takes its context as
//! typed values; post and page bodies are trusted admin HTML and are emitted
//! unescaped.
pub mod errors;
pub mod layout;
pub mod pages;
pub mod posts;

use axum::response::Html;
use maud::Markup;

pub fn render(markup: Markup) -> Html<String> {
    Html(markup.into_string())
}
