//! End-to-end routing through the full middleware stack, in process.

use axum::http::StatusCode;

mod common;

use common::{body_string, get, location, TestSite};

#[tokio::test]
async fn root_redirects_to_negotiated_locale() {
    let site = TestSite::new();

    let response = get(site.router(), "/", Some("es-MX,es;q=0.9,en;q=0.8")).await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/es");

    let response = get(site.router(), "/", None).await;
    assert_eq!(location(&response), "/en");

    let response = get(site.router(), "/", Some("fr-FR,de;q=0.5")).await;
    assert_eq!(location(&response), "/en");
}

#[tokio::test]
async fn unlocalized_paths_are_redirected() {
    let site = TestSite::new();

    let response = get(site.router(), "/about", Some("es")).await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/es/about");

    let response = get(site.router(), "/notes?from=email", None).await;
    assert_eq!(location(&response), "/en/notes?from=email");

    // Unsupported codes are just another path at this level.
    let response = get(site.router(), "/fr", Some("es")).await;
    assert_eq!(location(&response), "/es/fr");
}

#[tokio::test]
async fn excluded_paths_pass_through() {
    let site = TestSite::new();

    let response = get(site.router(), "/robots.txt", Some("es")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "User-agent: *\n");

    let response = get(site.router(), "/static/site.css", Some("es")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(site.router(), "/images/missing.jpg", Some("es")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get(site.router(), "/health", Some("es")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "ok");
}

#[tokio::test]
async fn single_segment_files_reach_the_public_directory() {
    let site = TestSite::new();

    let response = get(site.router(), "/favicon.ico", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "icon");

    let response = get(site.router(), "/apple-touch-icon.png", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_string(response).await.contains("Page not found"));
}

#[tokio::test]
async fn localized_paths_are_not_redirected() {
    let site = TestSite::new();

    let response = get(site.router(), "/en/foo", Some("es")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_string(response).await;
    assert!(body.contains("Page not found"));
}

#[tokio::test]
async fn story_renders_segments_in_order() {
    let site = TestSite::new();

    let response = get(site.router(), "/en", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;

    assert!(!body.contains("[[TRANSITION_IMAGE]]"));
    assert!(!body.contains("[[ENDING_IMAGE]]"));
    let opening = body.find("Opening paragraph.").unwrap();
    let middle = body.find("Middle paragraph.").unwrap();
    let ending = body.find("/images/ending.jpg").unwrap();
    let closing = body.find("Closing paragraph.").unwrap();
    assert!(opening < middle && middle < ending && ending < closing);
    assert!(body.contains(r#"href="/en/notes""#));
    assert!(body.contains(r#"hreflang="es" href="https://example.com/es""#));
}

#[tokio::test]
async fn story_without_marker_still_ends() {
    let site = TestSite::new();

    let body = body_string(get(site.router(), "/es", None).await).await;
    assert_eq!(body.matches(r#"class="reveal""#).count(), 1);
    assert_eq!(body.matches(r#"class="scroll-fade""#).count(), 1);
    assert!(body.find("Párrafo único.").unwrap() < body.find("/images/ending.jpg").unwrap());
}

#[tokio::test]
async fn missing_story_is_a_server_error() {
    let site = TestSite::new();
    site.remove("content/story.en.md");

    let response = get(site.router(), "/en", None).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_string(response).await;
    assert!(!body.contains("story.en.md"));
}

#[tokio::test]
async fn notes_appendix_is_optional() {
    let site = TestSite::new();

    let body = body_string(get(site.router(), "/en/notes", None).await).await;
    assert!(body.contains("Day 1: swelling"));

    let response = get(site.router(), "/es/notes", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Apéndice clínico"));
    assert!(!body.contains(r#"class="appendix""#));
}

#[tokio::test]
async fn docs_index_redirects_and_pages_render() {
    let site = TestSite::new();

    let response = get(site.router(), "/docs", Some("es")).await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/docs/INDEX");

    let response = get(site.router(), "/docs/INDEX", Some("es")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains(r#"href="/docs/DESIGN_SYSTEM""#));
    assert!(!body.contains("**File:**"));
    assert!(!body.contains("Purpose:"));
    assert!(body.contains(r#"class="current" aria-current="page">Index</a>"#));

    let response = get(site.router(), "/docs/NOPE", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn sitemap_lists_both_locales() {
    let site = TestSite::new();

    let response = get(site.router(), "/sitemap.xml", Some("es")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()["content-type"]
        .to_str()
        .unwrap()
        .starts_with("application/xml"));

    let body = body_string(response).await;
    assert!(body.contains("<loc>https://example.com/en</loc>"));
    assert!(body.contains("<loc>https://example.com/es</loc>"));
    assert!(body.contains(r#"hreflang="en""#));
}

#[tokio::test]
async fn security_headers_can_be_disabled() {
    let mut site = TestSite::new();
    let response = get(site.router(), "/health", None).await;
    assert_eq!(response.headers()["x-frame-options"], "DENY");

    site.config.security.enable_headers = false;
    let response = get(site.router(), "/health", None).await;
    assert!(!response.headers().contains_key("x-frame-options"));
}
