//! The locale table.

use std::fmt;

/// A supported site language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    /// Every supported locale, in the order alternates are advertised.
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Es];

    /// Look up a locale by its exact lower-case code. Never panics.
    pub fn from_code(code: &str) -> Option<Locale> {
        match code {
            "en" => Some(Locale::En),
            "es" => Some(Locale::Es),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
        }
    }

    /// Path prefix for this locale's pages, e.g. `/es`.
    pub fn root_path(self) -> String {
        format!("/{}", self.code())
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
