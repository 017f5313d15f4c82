//! The notes page: author's note and clinical appendix.

use maud::{html, Markup, PreEscaped};

use crate::i18n::{Bundle, Locale};

const AUTHOR_IMAGE: &str = "/images/author.jpg";

/// `appendix` is the pre-rendered HTML of `notes.<locale>.md`, if present.
pub fn notes_main(locale: Locale, bundle: &Bundle, appendix: Option<&str>) -> Markup {
    let notes = &bundle.notes;
    let back = locale.root_path();

    html! {
        main.notes {
            article {
                a.back-link href=(back) { (notes.back_to_story) }

                section.authors-note {
                    h2 { (notes.authors_note.title) }
                    p { (notes.authors_note.content) }
                    figure {
                        img.author src=(AUTHOR_IMAGE) alt=(notes.authors_note.author_name)
                            width="256" height="256";
                        figcaption { (notes.authors_note.author_name) }
                    }
                }

                section.clinical {
                    h2 { (notes.clinical.title) }
                    h3 { (notes.clinical.subtitle) }
                    @if let Some(appendix) = appendix {
                        div.appendix { (PreEscaped(appendix)) }
                    }
                    aside.summary {
                        h4 { (notes.clinical.summary.title) }
                        p { em { (notes.clinical.summary.text) } }
                    }
                }

                a.back-link href=(back) { (notes.back_to_story) }
            }
        }
    }
}
