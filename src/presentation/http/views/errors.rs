use axum::http::StatusCode;
use maud::{DOCTYPE, Markup, html};

pub fn error_page(status: StatusCode, message: &str) -> Markup {
    let reason = status.canonical_reason().unwrap_or("Error");
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="UTF-8";
                title { (status.as_u16()) " " (reason) }
            }
            body {
                main.error {
                    h1 { (status.as_u16()) " " (reason) }
                    p { (message) }
                    a href="/" { "Back to home" }
                }
            }
        }
    }
}
