//! The documentation viewer.

use maud::{html, Markup, PreEscaped};

use crate::config::DocEntry;

/// Sidebar navigation plus the rendered document.
pub fn doc_body(nav: &[DocEntry], current: &DocEntry, content_html: &str) -> Markup {
    html! {
        div.docs {
            aside.docs-nav {
                a.back href="/" { "← Back to Site" }
                h2 { "Documentation" }
                nav {
                    @for doc in nav {
                        a href={ "/docs/" (doc.slug) }
                            class=(if doc.slug == current.slug { "current" } else { "" })
                            aria-current=[(doc.slug == current.slug).then_some("page")] {
                            (doc.title)
                        }
                    }
                }
            }
            main.docs-content {
                h1 { (current.title) }
                article.doc-prose { (PreEscaped(content_html)) }
            }
        }
    }
}
