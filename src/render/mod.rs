//! Page rendering subsystem.
//!
//! # Data Flow
//! ```text
//! handler / export
//!     → Pages (loads source via ContentLoader, picks the bundle)
//!     → content pipeline (segments or HTML)
//!     → story.rs / notes.rs / docs.rs (page bodies)
//!     → layout.rs (document shell, head metadata, switcher, client script)
//!     → Markup
//! ```
//!
//! # Design Decisions
//! - Templates are compiled maud macros; no template files at runtime
//! - The same `Pages` value serves HTTP requests and static export
//! - Sources are read on every render, so edits show up without a restart

pub mod docs;
pub mod layout;
pub mod notes;
pub mod sitemap;
pub mod story;

use std::sync::Arc;
use std::time::Instant;

use maud::{html, Markup};

use crate::config::{DocsConfig, SiteConfig};
use crate::content::{markdown_to_html, render_doc, segment_markdown, ContentLoader, MarkdownOptions};
use crate::error::{Result, SiteError};
use crate::i18n::{Bundles, Locale};
use crate::observability::metrics;

use layout::LocalizedHead;

/// Renders every page of the site.
#[derive(Debug, Clone)]
pub struct Pages {
    bundles: Arc<Bundles>,
    loader: ContentLoader,
    options: MarkdownOptions,
    site_url: String,
    docs: DocsConfig,
    default_locale: Locale,
}

impl Pages {
    pub fn new(config: &SiteConfig, bundles: Arc<Bundles>) -> Self {
        Self {
            bundles,
            loader: ContentLoader::new(&config.content),
            options: MarkdownOptions {
                allow_raw_html: config.content.allow_raw_html,
            },
            site_url: config.site.url.trim_end_matches('/').to_string(),
            docs: config.docs.clone(),
            default_locale: Locale::from_code(&config.site.default_locale).unwrap_or_default(),
        }
    }

    pub fn docs_config(&self) -> &DocsConfig {
        &self.docs
    }

    /// The story page for `locale`.
    pub async fn story(&self, locale: Locale) -> Result<Markup> {
        let start = Instant::now();
        let source = self.loader.story(locale).await?;
        let segments = segment_markdown(&source, self.options);
        let bundle = self.bundles.get(locale);

        let page = layout::localized(
            LocalizedHead {
                site_url: &self.site_url,
                locale,
                suffix: "",
                title: &bundle.site.title,
            },
            &self.bundles,
            story::story_main(&segments, locale, bundle),
        );
        metrics::record_render("story", start);
        Ok(page)
    }

    /// The notes page for `locale`. The markdown appendix is optional.
    pub async fn notes(&self, locale: Locale) -> Result<Markup> {
        let start = Instant::now();
        let appendix = self
            .loader
            .notes(locale)
            .await?
            .map(|source| markdown_to_html(&source, self.options));
        let bundle = self.bundles.get(locale);

        let page = layout::localized(
            LocalizedHead {
                site_url: &self.site_url,
                locale,
                suffix: "/notes",
                title: &bundle.notes.title,
            },
            &self.bundles,
            notes::notes_main(locale, bundle, appendix.as_deref()),
        );
        metrics::record_render("notes", start);
        Ok(page)
    }

    /// A documentation page. Only slugs listed in the nav are served.
    pub async fn doc(&self, slug: &str) -> Result<Markup> {
        let start = Instant::now();
        let entry = self
            .docs
            .entry(slug)
            .ok_or_else(|| SiteError::DocNotFound(slug.to_string()))?;
        let source = self.loader.doc(&entry.slug).await?;
        let content = render_doc(&source, self.options);

        let title = format!("{} | Documentation", entry.title);
        let page = layout::plain(
            &title,
            "Project documentation",
            docs::doc_body(&self.docs.nav, entry, &content),
        );
        metrics::record_render("doc", start);
        Ok(page)
    }

    /// `sitemap.xml`, stamped with today's date.
    pub fn sitemap(&self) -> Result<String> {
        let today = chrono::Utc::now().format("%Y-%m-%d").to_string();
        sitemap::sitemap_xml(&self.site_url, &today)
    }

    /// Static stand-in for the `/` redirect: points at the default locale.
    pub fn root_redirect(&self) -> Markup {
        layout::redirect(&self.site_url, &self.default_locale.root_path())
    }

    /// Localized not-found page.
    pub fn not_found(&self, locale: Locale) -> Markup {
        let bundle = self.bundles.get(locale);
        layout::plain(
            &bundle.not_found.title,
            &bundle.site.description,
            layout::not_found_body(locale, bundle),
        )
    }

    /// Bare page for server errors. Carries no detail about the failure.
    pub fn error_page(&self) -> Markup {
        layout::plain(
            "Something went wrong",
            "",
            html! {
                main.not-found {
                    h1 { "Something went wrong" }
                    a href="/" { "Home" }
                }
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn site(dir: &Path) -> Pages {
        let mut config = SiteConfig::default();
        config.site.url = "https://example.com/".into();
        config.content.content_dir = dir.join("content");
        config.content.docs_dir = dir.join("docs");
        Pages::new(&config, Arc::new(Bundles::load().unwrap()))
    }

    #[tokio::test]
    async fn story_page_composes_segments() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("content")).unwrap();
        std::fs::write(
            dir.path().join("content/story.en.md"),
            "Opening.\n\n[[TRANSITION_IMAGE]]\n\nMiddle.\n\n[[ENDING_IMAGE]]\n\nCoda.\n",
        )
        .unwrap();

        let html = site(dir.path()).story(Locale::En).await.unwrap().into_string();
        assert!(html.contains(r#"<link rel="canonical" href="https://example.com/en">"#));
        assert!(html.contains(r#"id="story""#));
        assert!(html.contains(r#"class="story""#));
        assert!(!html.contains("TRANSITION_IMAGE"));
        assert!(!html.contains("ENDING_IMAGE"));
        let middle = html.find("Middle.").unwrap();
        let ending = html.find(story::ENDING_IMAGE).unwrap();
        let coda = html.find("Coda.").unwrap();
        assert!(middle < ending && ending < coda);
    }

    #[tokio::test]
    async fn missing_story_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = site(dir.path()).story(Locale::Es).await.unwrap_err();
        assert!(matches!(err, SiteError::ContentLoad { .. }));
    }

    #[tokio::test]
    async fn docs_outside_nav_are_not_found() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("docs")).unwrap();
        std::fs::write(dir.path().join("docs/SECRET.md"), "# hidden").unwrap();

        let err = site(dir.path()).doc("SECRET").await.unwrap_err();
        assert!(matches!(err, SiteError::DocNotFound(_)));
        let err = site(dir.path()).doc("../Cargo").await.unwrap_err();
        assert!(matches!(err, SiteError::DocNotFound(_)));
    }

    #[tokio::test]
    async fn doc_page_rewrites_links() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("docs")).unwrap();
        std::fs::write(
            dir.path().join("docs/INDEX.md"),
            "See [the design system](DESIGN_SYSTEM.md).\n",
        )
        .unwrap();

        let html = site(dir.path()).doc("INDEX").await.unwrap().into_string();
        assert!(html.contains(r#"href="/docs/DESIGN_SYSTEM""#));
        assert!(html.contains("<title>Documentation Index | Documentation</title>"));
    }

    #[test]
    fn root_redirect_targets_default_locale() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = SiteConfig::default();
        config.site.url = "https://example.com".into();
        config.site.default_locale = "es".into();
        config.content.content_dir = dir.path().join("content");
        let pages = Pages::new(&config, Arc::new(Bundles::load().unwrap()));

        let html = pages.root_redirect().into_string();
        assert!(html.contains(r#"<meta http-equiv="refresh" content="0; url=/es">"#));
        assert!(html.contains(r#"<link rel="canonical" href="https://example.com/es">"#));
        assert!(html.contains(r#"<a href="/es">"#));
    }

    #[test]
    fn sitemap_uses_trimmed_site_url() {
        let dir = tempfile::tempdir().unwrap();
        let xml = site(dir.path()).sitemap().unwrap();
        assert!(xml.contains("<loc>https://example.com/en</loc>"));
    }
}
