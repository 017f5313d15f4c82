//! Static export.
//!
//! Writes every page the server would render into a directory tree that a
//! static host can serve as-is:
//!
//! ```text
//! OUT/index.html            redirect to the default locale
//! OUT/en/index.html
//! OUT/en/notes/index.html
//! OUT/es/...
//! OUT/docs/<slug>/index.html
//! OUT/sitemap.xml
//! OUT/...                   copy of the public directory
//! ```
//!
//! Any content error aborts the export.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::i18n::Locale;
use crate::render::Pages;

/// Summary of a finished export.
#[derive(Debug, Default)]
pub struct ExportReport {
    /// Rendered pages and the sitemap.
    pub files: Vec<PathBuf>,
    /// Files copied from the public directory.
    pub copied: usize,
}

/// Render every page into `out` and copy `public_dir` alongside.
pub async fn export_site(pages: &Pages, public_dir: &Path, out: &Path) -> Result<ExportReport> {
    let mut report = ExportReport::default();

    for locale in Locale::ALL {
        let root = out.join(locale.code());
        let story = pages.story(locale).await?;
        report.files.push(write_page(&root, &story.into_string()).await?);

        let notes = pages.notes(locale).await?;
        report
            .files
            .push(write_page(&root.join("notes"), &notes.into_string()).await?);
    }

    for entry in &pages.docs_config().nav {
        let doc = pages.doc(&entry.slug).await?;
        let dir = out.join("docs").join(&entry.slug);
        report.files.push(write_page(&dir, &doc.into_string()).await?);
    }

    report
        .files
        .push(write_page(out, &pages.root_redirect().into_string()).await?);

    let sitemap = out.join("sitemap.xml");
    tokio::fs::write(&sitemap, pages.sitemap()?).await?;
    report.files.push(sitemap);

    report.copied = copy_public(public_dir, out).await?;

    tracing::info!(
        out = %out.display(),
        files = report.files.len(),
        copied = report.copied,
        "Export complete"
    );
    Ok(report)
}

/// Render every page without writing anything.
pub async fn check_site(pages: &Pages) -> Result<usize> {
    let mut rendered = 0;
    for locale in Locale::ALL {
        pages.story(locale).await?;
        pages.notes(locale).await?;
        rendered += 2;
    }
    for entry in &pages.docs_config().nav {
        pages.doc(&entry.slug).await?;
        rendered += 1;
    }
    Ok(rendered)
}

async fn write_page(dir: &Path, html: &str) -> Result<PathBuf> {
    tokio::fs::create_dir_all(dir).await?;
    let path = dir.join("index.html");
    tokio::fs::write(&path, html).await?;
    tracing::debug!(path = %path.display(), "Wrote page");
    Ok(path)
}

/// Copy the public tree into `out`. A missing public directory copies nothing.
async fn copy_public(public_dir: &Path, out: &Path) -> Result<usize> {
    if !tokio::fs::try_exists(public_dir).await? {
        tracing::debug!(dir = %public_dir.display(), "No public directory to copy");
        return Ok(0);
    }

    let mut copied = 0;
    let mut pending = vec![(public_dir.to_path_buf(), out.to_path_buf())];
    while let Some((from, to)) = pending.pop() {
        tokio::fs::create_dir_all(&to).await?;
        let mut entries = tokio::fs::read_dir(&from).await?;
        while let Some(entry) = entries.next_entry().await? {
            let target = to.join(entry.file_name());
            if entry.file_type().await?.is_dir() {
                pending.push((entry.path(), target));
            } else {
                tokio::fs::copy(entry.path(), &target).await?;
                copied += 1;
            }
        }
    }

    Ok(copied)
}
