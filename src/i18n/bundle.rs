//! Translation bundles.
//!
//! One immutable [`Bundle`] per locale, parsed once at startup from JSON
//! compiled into the binary.

use serde::Deserialize;

use crate::error::SiteError;
use crate::i18n::Locale;

const EN_JSON: &str = include_str!("../../i18n/en.json");
const ES_JSON: &str = include_str!("../../i18n/es.json");

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bundle {
    pub site: SiteText,
    pub meta: MetaText,
    pub hero: HeroText,
    pub story: StoryText,
    pub switcher: SwitcherText,
    pub notes: NotesText,
    pub not_found: NotFoundText,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SiteText {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaText {
    pub og_title: String,
    pub og_description: String,
    /// Open Graph locale tag, e.g. `en_US`.
    pub og_locale: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HeroText {
    pub title: String,
    pub byline: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryText {
    pub ending_alt: String,
    pub notes_link: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitcherText {
    pub nav_label: String,
    /// Accessible label for this locale's own entry in the switcher.
    pub self_label: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotesText {
    pub title: String,
    pub back_to_story: String,
    pub authors_note: AuthorsNote,
    pub clinical: ClinicalText,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorsNote {
    pub title: String,
    pub content: String,
    pub author_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClinicalText {
    pub title: String,
    pub subtitle: String,
    pub summary: ClinicalSummary,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClinicalSummary {
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotFoundText {
    pub title: String,
    pub message: String,
    pub home_link: String,
}

/// The full locale → bundle table.
#[derive(Debug, Clone)]
pub struct Bundles {
    en: Bundle,
    es: Bundle,
}

impl Bundles {
    /// Parse the bundles compiled into the binary.
    pub fn load() -> Result<Self, SiteError> {
        Self::from_json(EN_JSON, ES_JSON)
    }

    pub fn from_json(en: &str, es: &str) -> Result<Self, SiteError> {
        Ok(Self {
            en: parse(Locale::En, en)?,
            es: parse(Locale::Es, es)?,
        })
    }

    pub fn get(&self, locale: Locale) -> &Bundle {
        match locale {
            Locale::En => &self.en,
            Locale::Es => &self.es,
        }
    }
}

fn parse(locale: Locale, json: &str) -> Result<Bundle, SiteError> {
    serde_json::from_str(json).map_err(|source| SiteError::Bundle { locale, source })
}
