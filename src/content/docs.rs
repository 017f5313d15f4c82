//! Documentation page preprocessing.
//!
//! Project docs are written to be read on a forge as well as on the site, so
//! they carry a file/purpose header and link to each other as `NAME.md`. Both
//! need adjusting before they render under `/docs`.

use std::borrow::Cow;

use pulldown_cmark::{Event, Tag};

use crate::content::pipeline::{events, render, MarkdownOptions};

/// Render a docs page: drop the header block, rewrite sibling links.
pub fn render_doc(source: &str, options: MarkdownOptions) -> String {
    let source = strip_header_block(source);
    render(events(&source, options).map(rewrite_doc_link))
}

/// Removes the first `# Title` / `**File:**` / `**Purpose:**` / `---` block.
///
/// Blank lines may separate the four lines; anything else between them means
/// the block is not a header and the document is left alone.
pub fn strip_header_block(source: &str) -> Cow<'_, str> {
    let lines: Vec<&str> = source.split_inclusive('\n').collect();
    let Some(start) = lines.iter().position(|l| l.starts_with("# ")) else {
        return Cow::Borrowed(source);
    };

    let mut cursor = start + 1;
    for expected in [HeaderLine::File, HeaderLine::Purpose, HeaderLine::Rule] {
        while lines.get(cursor).is_some_and(|l| l.trim().is_empty()) {
            cursor += 1;
        }

        match lines.get(cursor) {
            Some(line) if expected.matches(line) => cursor += 1,
            _ => return Cow::Borrowed(source),
        }
    }

    let mut output = String::with_capacity(source.len());
    lines[..start].iter().for_each(|l| output.push_str(l));
    lines[cursor..].iter().for_each(|l| output.push_str(l));
    Cow::Owned(output)
}

#[derive(Clone, Copy)]
enum HeaderLine {
    File,
    Purpose,
    Rule,
}

impl HeaderLine {
    fn matches(self, line: &str) -> bool {
        let line = line.trim();
        match self {
            HeaderLine::File => line.starts_with("**File:**"),
            HeaderLine::Purpose => line.starts_with("**Purpose:**"),
            HeaderLine::Rule => line.len() >= 3 && line.bytes().all(|b| b == b'-'),
        }
    }
}

fn rewrite_doc_link(event: Event<'_>) -> Event<'_> {
    match event {
        Event::Start(Tag::Link { link_type, dest_url, title, id }) => {
            let dest_url = match doc_link_target(&dest_url) {
                Some(slug) => format!("/docs/{slug}").into(),
                None => dest_url,
            };
            Event::Start(Tag::Link { link_type, dest_url, title, id })
        }
        event => event,
    }
}

/// `NAME.md` or `./docs/NAME.md`, where NAME is upper-case letters, `_`
/// and `-`, maps to `NAME`.
fn doc_link_target(url: &str) -> Option<&str> {
    let file = url.strip_prefix("./docs/").unwrap_or(url);
    let name = file.strip_suffix(".md")?;
    let valid = !name.is_empty()
        && name.bytes().all(|b| b.is_ascii_uppercase() || b == b'_' || b == b'-');
    valid.then_some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "# DESIGN_SYSTEM\n\n**File:** docs/DESIGN_SYSTEM.md\n**Purpose:** Visual rules\n\n---\n\n## Colors\n";

    #[test]
    fn header_block_is_removed() {
        assert_eq!(strip_header_block(HEADER), "\n## Colors\n");
    }

    #[test]
    fn incomplete_header_is_kept() {
        let source = "# Title\n\n**File:** x.md\n\nSome prose.\n\n---\n";
        assert!(matches!(strip_header_block(source), Cow::Borrowed(_)));

        let no_title = "**File:** x\n**Purpose:** y\n---\n";
        assert_eq!(strip_header_block(no_title), no_title);
    }

    #[test]
    fn text_before_header_survives() {
        let source = "Intro line\n# T\n**File:** a\n**Purpose:** b\n---\nBody\n";
        assert_eq!(strip_header_block(source), "Intro line\nBody\n");
    }

    #[test]
    fn doc_links_are_rewritten() {
        let html = render_doc(
            "See [rules](AI_ENGINEERING_RULES.md), [index](./docs/INDEX.md), \
             [readme](README.md) and [lower](notes.md) and [site](https://example.com/A.md).\n",
            MarkdownOptions::default(),
        );
        assert!(html.contains(r#"<a href="/docs/AI_ENGINEERING_RULES">rules</a>"#));
        assert!(html.contains(r#"<a href="/docs/INDEX">index</a>"#));
        assert!(html.contains(r#"<a href="/docs/README">readme</a>"#));
        assert!(html.contains(r#"<a href="notes.md">lower</a>"#));
        assert!(html.contains(r#"<a href="https://example.com/A.md">site</a>"#));
    }

    #[test]
    fn link_target_rules() {
        assert_eq!(doc_link_target("SKILL-WORKING-WITH-HUMANS.md"), Some("SKILL-WORKING-WITH-HUMANS"));
        assert_eq!(doc_link_target("./docs/CLAUDE.md"), Some("CLAUDE"));
        assert_eq!(doc_link_target(".md"), None);
        assert_eq!(doc_link_target("RELEASE_NOTES_v2.1.0.md"), None);
        assert_eq!(doc_link_target("/docs/INDEX"), None);
    }
}
