//! Shared utilities for integration tests.

use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use marble_site::config::{DocEntry, SiteConfig};
use marble_site::http::{build_router, AppState};
use marble_site::i18n::Bundles;
use tempfile::TempDir;
use tower::ServiceExt;

pub const STORY_EN: &str = "\
Opening paragraph.

[[TRANSITION_IMAGE]]

Middle paragraph.

[[ENDING_IMAGE]]

Closing paragraph.
";

pub const STORY_ES: &str = "Párrafo único.\n";

/// A throwaway site tree: content, docs and a public directory.
pub struct TestSite {
    pub dir: TempDir,
    pub config: SiteConfig,
}

impl TestSite {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();

        write(root, "content/story.en.md", STORY_EN);
        write(root, "content/story.es.md", STORY_ES);
        write(root, "content/notes.en.md", "- Day 1: swelling\n");
        write(
            root,
            "docs/INDEX.md",
            "# Index\n\n**File:** docs/INDEX.md\n**Purpose:** Entry point\n\n---\n\nSee [design](DESIGN_SYSTEM.md).\n",
        );
        write(root, "docs/DESIGN_SYSTEM.md", "Motion is one-shot.\n");
        write(root, "public/robots.txt", "User-agent: *\n");
        write(root, "public/favicon.ico", "icon");
        write(root, "public/static/site.css", "body {}\n");

        let mut config = SiteConfig::default();
        config.site.url = "https://example.com".into();
        config.content.content_dir = root.join("content");
        config.content.docs_dir = root.join("docs");
        config.content.public_dir = root.join("public");
        config.docs.nav = vec![
            DocEntry { title: "Index".into(), slug: "INDEX".into() },
            DocEntry { title: "Design System".into(), slug: "DESIGN_SYSTEM".into() },
        ];

        Self { dir, config }
    }

    #[allow(dead_code)]
    pub fn router(&self) -> Router {
        let bundles = Arc::new(Bundles::load().unwrap());
        build_router(&self.config, Arc::new(AppState::new(&self.config, bundles)))
    }

    #[allow(dead_code)]
    pub fn remove(&self, relative: &str) {
        std::fs::remove_file(self.dir.path().join(relative)).unwrap();
    }
}

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, contents).unwrap();
}

/// Send a GET through the full middleware stack.
#[allow(dead_code)]
pub async fn get(router: Router, uri: &str, accept_language: Option<&str>) -> Response<Body> {
    let mut request = Request::builder().uri(uri);
    if let Some(value) = accept_language {
        request = request.header("accept-language", value);
    }
    router.oneshot(request.body(Body::empty()).unwrap()).await.unwrap()
}

#[allow(dead_code)]
pub async fn body_string(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[allow(dead_code)]
pub fn location(response: &Response<Body>) -> &str {
    response.headers()["location"].to_str().unwrap()
}
