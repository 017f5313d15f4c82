//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate addresses, timeouts and the default locale
//! - Check exclusion patterns and docs slugs are well-formed
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: SiteConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;
use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::SiteConfig;
use crate::i18n::Locale;
use crate::routing::matcher::PathPattern;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid {field} address '{value}'")]
    Address { field: &'static str, value: String },

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroTimeout,

    #[error("unsupported default locale '{0}'")]
    DefaultLocale(String),

    #[error("site.url '{0}' must be an absolute http(s) URL without a trailing slash")]
    SiteUrl(String),

    #[error("invalid routing exclusion pattern '{0}'")]
    ExcludePattern(String),

    #[error("invalid docs slug '{0}'")]
    DocSlug(String),

    #[error("duplicate docs slug '{0}'")]
    DuplicateDocSlug(String),

    #[error("docs.index_slug '{0}' is not in docs.nav")]
    MissingIndexSlug(String),
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &SiteConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::Address {
            field: "listener.bind_address",
            value: config.listener.bind_address.clone(),
        });
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::Address {
            field: "observability.metrics_address",
            value: config.observability.metrics_address.clone(),
        });
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if Locale::from_code(&config.site.default_locale).is_none() {
        errors.push(ValidationError::DefaultLocale(config.site.default_locale.clone()));
    }

    if !is_valid_site_url(&config.site.url) {
        errors.push(ValidationError::SiteUrl(config.site.url.clone()));
    }

    for pattern in &config.routing.exclude {
        if PathPattern::parse(pattern).is_none() {
            errors.push(ValidationError::ExcludePattern(pattern.clone()));
        }
    }

    let mut seen = HashSet::new();
    for doc in &config.docs.nav {
        if !is_valid_slug(&doc.slug) {
            errors.push(ValidationError::DocSlug(doc.slug.clone()));
        } else if !seen.insert(doc.slug.as_str()) {
            errors.push(ValidationError::DuplicateDocSlug(doc.slug.clone()));
        }
    }

    if config.docs.entry(&config.docs.index_slug).is_none() {
        errors.push(ValidationError::MissingIndexSlug(config.docs.index_slug.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_valid_site_url(value: &str) -> bool {
    match url::Url::parse(value) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && !value.ends_with('/'),
        Err(_) => false,
    }
}

/// Slugs become file names under the docs directory, so no separators.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('.')
        && slug
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'-' | b'.'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::DocEntry;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(validate_config(&SiteConfig::default()), Ok(()));
    }

    #[test]
    fn reports_every_error() {
        let mut config = SiteConfig::default();
        config.listener.bind_address = "not-an-address".into();
        config.timeouts.request_secs = 0;
        config.site.default_locale = "fr".into();
        config.site.url = "https://example.com/".into();
        config.routing.exclude.push("docs".into());

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 5);
        assert!(errors.contains(&ValidationError::ZeroTimeout));
        assert!(errors.contains(&ValidationError::DefaultLocale("fr".into())));
        assert!(errors.contains(&ValidationError::ExcludePattern("docs".into())));
    }

    #[test]
    fn rejects_bad_and_duplicate_slugs() {
        let mut config = SiteConfig::default();
        config.docs.nav.push(DocEntry { title: "Escape".into(), slug: "../etc/passwd".into() });
        config.docs.nav.push(DocEntry { title: "Again".into(), slug: "INDEX".into() });

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::DocSlug("../etc/passwd".into()),
                ValidationError::DuplicateDocSlug("INDEX".into()),
            ]
        );
    }

    #[test]
    fn slug_rules() {
        assert!(is_valid_slug("RELEASE_NOTES_v2.1.0"));
        assert!(is_valid_slug("SKILL-WORKING-WITH-HUMANS"));
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug(".hidden"));
        assert!(!is_valid_slug("a/b"));
    }
}
