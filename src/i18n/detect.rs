//! Accept-Language negotiation.
//!
//! Quality weights are parsed away but not used for ordering: the first
//! supported tag in header order wins, even over a later tag with a higher
//! `q`. This matches how the site has always negotiated.

use crate::i18n::Locale;

/// Primary language subtags from an Accept-Language value, in header order.
///
/// `"es-MX,es;q=0.9,EN;q=0.8"` becomes `["es", "es", "en"]`.
pub fn preference_list(header: &str) -> Vec<String> {
    header
        .to_lowercase()
        .split(',')
        .filter_map(|entry| {
            let tag = entry.split(';').next().unwrap_or(entry).trim();
            let primary = tag.split('-').next().unwrap_or(tag).trim();
            (!primary.is_empty()).then(|| primary.to_string())
        })
        .collect()
}

/// Resolve a header (possibly absent or malformed) to a supported locale.
pub fn detect_locale(header: Option<&str>, default: Locale) -> Locale {
    let Some(header) = header else {
        return default;
    };

    preference_list(header)
        .iter()
        .find_map(|tag| Locale::from_code(tag))
        .unwrap_or(default)
}
