//! Page shells shared by every HTML response.

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::i18n::{Bundle, Bundles, Locale};

const REVEAL_JS: &str = include_str!("../../assets/reveal.js");
const OG_IMAGE: &str = "/images/og-image.jpg";

/// Head metadata for a localized page.
pub struct LocalizedHead<'a> {
    pub site_url: &'a str,
    pub locale: Locale,
    /// Path below the locale prefix, e.g. `""` or `"/notes"`.
    pub suffix: &'a str,
    pub title: &'a str,
}

/// A localized page: metadata, hreflang alternates, language switcher and
/// the client script for scroll effects.
pub fn localized(head: LocalizedHead<'_>, bundles: &Bundles, body: Markup) -> Markup {
    let bundle = bundles.get(head.locale);
    let canonical = format!("{}/{}{}", head.site_url, head.locale.code(), head.suffix);
    let og_image = format!("{}{}", head.site_url, OG_IMAGE);

    html! {
        (DOCTYPE)
        html lang=(head.locale.code()) {
            head {
                (common_head(head.title, &bundle.site.description))
                link rel="canonical" href=(canonical);
                @for locale in Locale::ALL {
                    link rel="alternate" hreflang=(locale.code())
                        href={ (head.site_url) "/" (locale.code()) (head.suffix) };
                }
                meta property="og:title" content=(bundle.meta.og_title);
                meta property="og:description" content=(bundle.meta.og_description);
                meta property="og:type" content="article";
                meta property="og:locale" content=(bundle.meta.og_locale);
                meta property="og:url" content=(canonical);
                meta property="og:image" content=(og_image);
                meta property="og:image:width" content="1200";
                meta property="og:image:height" content="630";
                meta property="og:image:alt" content=(bundle.site.title);
                meta name="twitter:card" content="summary_large_image";
                meta name="twitter:title" content=(bundle.meta.og_title);
                meta name="twitter:description" content=(bundle.meta.og_description);
                meta name="twitter:image" content=(og_image);
            }
            body {
                (switcher(head.locale, head.suffix, bundles))
                (body)
                script { (PreEscaped(REVEAL_JS)) }
            }
        }
    }
}

/// A page outside the localized tree (docs viewer, bare error pages).
pub fn plain(title: &str, description: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                (common_head(title, description))
            }
            body { (body) }
        }
    }
}

/// A document that sends the browser on to `target`, for static hosts that
/// cannot issue a redirect for `/`.
pub fn redirect(site_url: &str, target: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Redirecting" }
                meta name="robots" content="noindex";
                meta http-equiv="refresh" content={ "0; url=" (target) };
                link rel="canonical" href={ (site_url) (target) };
            }
            body {
                a href=(target) { (target) }
            }
        }
    }
}

fn common_head(title: &str, description: &str) -> Markup {
    html! {
        meta charset="utf-8";
        meta name="viewport" content="width=device-width, initial-scale=1";
        title { (title) }
        meta name="description" content=(description);
        meta name="robots" content="index, follow";
        link rel="icon" href="/favicon.ico" sizes="any";
        link rel="icon" href="/favicon.svg" type="image/svg+xml";
        link rel="apple-touch-icon" href="/apple-touch-icon.png";
        link rel="stylesheet" href="/static/site.css";
    }
}

/// Links to the current page in every locale.
fn switcher(current: Locale, suffix: &str, bundles: &Bundles) -> Markup {
    let label = &bundles.get(current).switcher.nav_label;

    html! {
        nav.language-switcher aria-label=(label) {
            @for (i, locale) in Locale::ALL.into_iter().enumerate() {
                @if i > 0 {
                    span aria-hidden="true" { "/" }
                }
                a href={ "/" (locale.code()) (suffix) }
                    hreflang=(locale.code())
                    aria-label=(bundles.get(locale).switcher.self_label)
                    aria-current=[(locale == current).then_some("page")] {
                    (locale.code().to_uppercase())
                }
            }
        }
    }
}

/// Localized not-found body.
pub fn not_found_body(locale: Locale, bundle: &Bundle) -> Markup {
    html! {
        main.not-found {
            h1 { (bundle.not_found.title) }
            p { (bundle.not_found.message) }
            a href=(locale.root_path()) { (bundle.not_found.home_link) }
        }
    }
}
