use maud::{html, Markup};

use super::{layout, styles};

pub fn error_page(message: &str) -> Markup {
    layout(
        "Error - GitHub Dashboard",
        styles::ERROR,
        html! {
            div.error-card {
                div.error-icon { "❌" }
                h1 { "Error" }
                p { (message) }
            }
        },
    )
}
