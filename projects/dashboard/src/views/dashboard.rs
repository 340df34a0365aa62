use maud::{html, Markup};

use super::{layout, styles};
use crate::domain::display::{DashboardView, RepositoryCard};

pub fn dashboard_page(view: &DashboardView) -> Markup {
    layout(
        "GitHub Repositories Dashboard",
        styles::DASHBOARD,
        html! {
            div.container {
                div.header {
                    h1 { "📚 GitHub Repositories" }
                    p { "Repositories for " strong { (view.username) } }
                }

                div.stats {
                    (stat_card(view.stats.total, "Total Repositories"))
                    (stat_card(view.stats.public, "Public Repos"))
                    (stat_card(view.stats.private, "Private Repos"))
                }

                @if view.cards.is_empty() {
                    div.empty-state {
                        p { "No repositories found." }
                    }
                } @else {
                    div.repo-grid {
                        @for card in &view.cards {
                            (repo_card(card))
                        }
                    }
                }
            }
        },
    )
}

fn stat_card(value: usize, label: &str) -> Markup {
    html! {
        div.stat-card {
            div.number { (value) }
            div.label { (label) }
        }
    }
}

fn info_item(label: &str, value: Markup) -> Markup {
    html! {
        div.info-item {
            span.info-label { (label) }
            span.info-value { (value) }
        }
    }
}

fn repo_card(card: &RepositoryCard) -> Markup {
    html! {
        div.repo-card {
            div.repo-header {
                div.repo-icon { "📁" }
                div {
                    div.repo-name { (card.name) }
                    div.repo-full-name { (card.full_name) }
                }
            }

            @if let Some(description) = &card.description {
                p.repo-description { (description) }
            }

            div.repo-info {
                (info_item("Last Push:", html! { (card.pushed) }))
                (info_item("Created:", html! { (card.created) }))
                (info_item("Stars:", html! { "⭐ " (card.stars) }))
                (info_item("Forks:", html! { "🍴 " (card.forks) }))
                (info_item("Visibility:", html! { (card.visibility_icon) " " (card.visibility_label) }))
            }

            @if let Some(language) = &card.language {
                span.language-badge { (language) }
            }

            a.repo-link href=(card.html_url) target="_blank" { "View on GitHub →" }
        }
    }
}
