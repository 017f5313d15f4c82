//! Renderable story segments.

/// One unit of story content, in render order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Ordinary markup produced from the document.
    Html(String),
    /// The closing point of the narrative. Rendered from a fixed template,
    /// so it carries no payload.
    Ending,
}

impl Segment {
    pub fn is_ending(&self) -> bool {
        matches!(self, Segment::Ending)
    }

    /// The HTML payload, or `None` for the ending.
    pub fn html(&self) -> Option<&str> {
        match self {
            Segment::Html(html) => Some(html),
            Segment::Ending => None,
        }
    }
}
