//! HTML pages, rendered with maud. Inputs are fully precomputed; the views
//! only lay them out.

pub mod dashboard;
pub mod error;
mod styles;

use maud::{html, Markup, PreEscaped, DOCTYPE};

pub use dashboard::dashboard_page;
pub use error::error_page;

fn layout(title: &str, styles: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(styles)) }
            }
            body { (body) }
        }
    }
}
