//! Reading source documents from disk.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::config::ContentConfig;
use crate::error::{Result, SiteError};
use crate::i18n::Locale;

/// Resolves and reads the markdown documents behind each page.
///
/// Reads are never retried and nothing is cached: every call goes to disk.
#[derive(Debug, Clone)]
pub struct ContentLoader {
    content_dir: PathBuf,
    docs_dir: PathBuf,
}

impl ContentLoader {
    pub fn new(config: &ContentConfig) -> Self {
        Self {
            content_dir: config.content_dir.clone(),
            docs_dir: config.docs_dir.clone(),
        }
    }

    pub fn story_path(&self, locale: Locale) -> PathBuf {
        self.content_dir.join(format!("story.{}.md", locale.code()))
    }

    pub fn notes_path(&self, locale: Locale) -> PathBuf {
        self.content_dir.join(format!("notes.{}.md", locale.code()))
    }

    /// The caller is responsible for only passing validated slugs.
    pub fn doc_path(&self, slug: &str) -> PathBuf {
        self.docs_dir.join(format!("{slug}.md"))
    }

    /// The story for `locale`. A missing file is a load error.
    pub async fn story(&self, locale: Locale) -> Result<String> {
        read(&self.story_path(locale)).await
    }

    /// The notes appendix for `locale`, which is optional.
    pub async fn notes(&self, locale: Locale) -> Result<Option<String>> {
        match read(&self.notes_path(locale)).await {
            Ok(source) => Ok(Some(source)),
            Err(SiteError::ContentLoad { source, .. }) if source.kind() == ErrorKind::NotFound => {
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// A docs page. A missing file is reported as an unknown page.
    pub async fn doc(&self, slug: &str) -> Result<String> {
        match read(&self.doc_path(slug)).await {
            Err(SiteError::ContentLoad { source, .. }) if source.kind() == ErrorKind::NotFound => {
                Err(SiteError::DocNotFound(slug.to_string()))
            }
            other => other,
        }
    }
}

async fn read(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SiteError::ContentLoad {
            path: path.to_path_buf(),
            source,
        })
}
