//! The story page and the segment composer.

use maud::{html, Markup, PreEscaped};

use crate::content::Segment;
use crate::i18n::{Bundle, Locale};

pub const ENDING_IMAGE: &str = "/images/ending.jpg";
const HERO_DESKTOP: &str = "/images/main-header-desktop.jpg";
const HERO_MOBILE: &str = "/images/main-header-mobile.jpg";

/// Render segments in order.
///
/// Ordinary segments are wrapped in a reveal container whose entrance runs
/// once, on first scroll into view. The ending is a fixed block: the closing
/// image and a quiet link to the notes page.
pub fn compose(segments: &[Segment], locale: Locale, bundle: &Bundle) -> Markup {
    html! {
        article #story .story {
            @for segment in segments {
                @match segment {
                    Segment::Html(payload) => {
                        section.reveal data-reveal {
                            div.story-prose { (PreEscaped(payload)) }
                        }
                    }
                    Segment::Ending => {
                        (ending(locale, bundle))
                    }
                }
            }
        }
    }
}

fn ending(locale: Locale, bundle: &Bundle) -> Markup {
    html! {
        div.ending {
            div.scroll-fade data-scroll-fade {
                img src=(ENDING_IMAGE) alt=(bundle.story.ending_alt)
                    width="1600" height="900" loading="lazy";
            }
            div.ending-link {
                a.quiet-link href={ (locale.root_path()) "/notes" } data-quiet-delay="500" {
                    (bundle.story.notes_link)
                }
            }
        }
    }
}

pub fn hero(bundle: &Bundle) -> Markup {
    html! {
        section.hero {
            picture {
                source media="(min-width: 768px)" srcset=(HERO_DESKTOP);
                img.hero-image src=(HERO_MOBILE) alt="";
            }
            div.hero-title {
                h1 { (bundle.hero.title) }
                p.byline { (bundle.hero.byline) }
                p.description { (bundle.hero.description) }
            }
            div.scroll-indicator aria-hidden="true" { "↓" }
        }
    }
}

/// Main element of the story page: hero followed by the composed story.
pub fn story_main(segments: &[Segment], locale: Locale, bundle: &Bundle) -> Markup {
    html! {
        main {
            (hero(bundle))
            (compose(segments, locale, bundle))
        }
    }
}
