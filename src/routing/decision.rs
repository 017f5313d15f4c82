//! The locale redirect decision.
//!
//! Pure function of the request path, query and Accept-Language header, so
//! the middleware, the tests and anything else can share it.

use crate::i18n::{detect_locale, Locale};
use crate::routing::matcher::ExclusionList;

/// What the locale middleware should do with a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// The path matches an exclusion pattern; pass through untouched.
    Excluded,
    /// The path already carries a supported locale prefix.
    Localized(Locale),
    /// The site root; its handler negotiates and redirects by itself.
    Root,
    /// Redirect to `location`, the same path under `locale`.
    Redirect { locale: Locale, location: String },
}

/// Returns the locale whose prefix `path` starts with (`/es` or `/es/...`).
pub fn locale_prefix(path: &str) -> Option<Locale> {
    let rest = path.strip_prefix('/')?;
    let segment = rest.split('/').next().unwrap_or(rest);
    Locale::from_code(segment)
}

/// Decide between pass-through and redirect for one request.
pub fn decide(
    path: &str,
    query: Option<&str>,
    accept_language: Option<&str>,
    exclusions: &ExclusionList,
    default: Locale,
) -> RouteDecision {
    if exclusions.is_excluded(path) {
        return RouteDecision::Excluded;
    }

    if let Some(locale) = locale_prefix(path) {
        return RouteDecision::Localized(locale);
    }

    if path == "/" {
        return RouteDecision::Root;
    }

    let locale = detect_locale(accept_language, default);
    let mut location = format!("/{}{}", locale.code(), path);
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        location.push('?');
        location.push_str(query);
    }

    RouteDecision::Redirect { locale, location }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::matcher::PathPattern;

    fn exclusions() -> ExclusionList {
        ExclusionList::new(vec![
            PathPattern::Segment("/docs".into()),
            PathPattern::Raw("/_internal".into()),
            PathPattern::Dotted,
        ])
    }

    fn run(path: &str, header: Option<&str>) -> RouteDecision {
        decide(path, None, header, &exclusions(), Locale::En)
    }

    #[test]
    fn docs_are_never_redirected() {
        for path in ["/docs", "/docs/", "/docs/INDEX", "/docs/a/b", "/docs/anything?x"] {
            assert_eq!(run(path, Some("es")), RouteDecision::Excluded, "{path}");
        }
    }

    #[test]
    fn assets_and_internal_paths_pass() {
        assert_eq!(run("/favicon.ico", None), RouteDecision::Excluded);
        assert_eq!(run("/_internal/state", None), RouteDecision::Excluded);
    }

    #[test]
    fn localized_paths_pass() {
        assert_eq!(run("/en", Some("es")), RouteDecision::Localized(Locale::En));
        assert_eq!(run("/en/foo", Some("es")), RouteDecision::Localized(Locale::En));
        assert_eq!(run("/es/foo", None), RouteDecision::Localized(Locale::Es));
        assert_eq!(run("/es/notes", None), RouteDecision::Localized(Locale::Es));
    }

    #[test]
    fn root_is_left_to_its_handler() {
        assert_eq!(run("/", Some("es")), RouteDecision::Root);
    }

    #[test]
    fn other_paths_redirect_with_detected_locale() {
        assert_eq!(
            run("/foo", Some("es-MX,es;q=0.9,en;q=0.8")),
            RouteDecision::Redirect { locale: Locale::Es, location: "/es/foo".into() }
        );
        assert_eq!(
            run("/foo", Some("fr-FR,fr;q=0.9")),
            RouteDecision::Redirect { locale: Locale::En, location: "/en/foo".into() }
        );
        assert_eq!(
            run("/english/notes", None),
            RouteDecision::Redirect { locale: Locale::En, location: "/en/english/notes".into() }
        );
    }

    #[test]
    fn redirect_keeps_query() {
        let decision = decide("/notes", Some("a=1&b=2"), Some("es"), &exclusions(), Locale::En);
        assert_eq!(
            decision,
            RouteDecision::Redirect { locale: Locale::Es, location: "/es/notes?a=1&b=2".into() }
        );
    }

    #[test]
    fn prefix_needs_a_whole_segment() {
        assert_eq!(locale_prefix("/en"), Some(Locale::En));
        assert_eq!(locale_prefix("/es/x/y"), Some(Locale::Es));
        assert_eq!(locale_prefix("/english"), None);
        assert_eq!(locale_prefix("/"), None);
        assert_eq!(locale_prefix(""), None);
    }
}
