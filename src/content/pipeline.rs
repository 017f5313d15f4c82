//! Markdown to segments.
//!
//! Two passes: pulldown-cmark turns the document into an event stream, then
//! a token pass walks that stream looking for marker tokens in text. Splits
//! happen on the event tree, so the markup on each side stays well nested.

use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag, TagEnd, TextMergeStream};

use crate::content::segment::Segment;

/// Stripped wherever it appears.
pub const TRANSITION_TOKEN: &str = "[[TRANSITION_IMAGE]]";

/// The first occurrence splits the story; later ones are stripped.
pub const ENDING_TOKEN: &str = "[[ENDING_IMAGE]]";

#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownOptions {
    /// Emit raw HTML blocks and inline HTML verbatim instead of escaping them.
    pub allow_raw_html: bool,
}

/// GitHub-flavoured extensions: tables, footnotes, strikethrough, task lists.
pub fn parser_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
}

/// Parse `source` into a sanitized event stream with adjacent text merged.
pub fn events<'a>(
    source: &'a str,
    options: MarkdownOptions,
) -> impl Iterator<Item = Event<'a>> + 'a {
    let parser = Parser::new_ext(source, parser_options());
    TextMergeStream::new(parser.map(move |event| sanitize(event, options)))
}

fn sanitize(event: Event<'_>, options: MarkdownOptions) -> Event<'_> {
    if options.allow_raw_html {
        return event;
    }

    match event {
        Event::Start(Tag::HtmlBlock) => Event::Start(Tag::Paragraph),
        Event::End(TagEnd::HtmlBlock) => Event::End(TagEnd::Paragraph),
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        event => event,
    }
}

/// Render events to an HTML string.
pub fn render<'a>(events: impl Iterator<Item = Event<'a>>) -> String {
    let mut output = String::new();
    html::push_html(&mut output, events);
    output
}

/// Convert a whole document to HTML, without segmentation.
pub fn markdown_to_html(source: &str, options: MarkdownOptions) -> String {
    render(events(source, options))
}

/// Convert a story document into segments.
///
/// The result always holds exactly one [`Segment::Ending`]: after the first
/// ending token, or appended last when the document has none.
pub fn segment_markdown(source: &str, options: MarkdownOptions) -> Vec<Segment> {
    let mut splitter = Splitter::default();
    for event in events(source, options) {
        splitter.push(event);
    }

    splitter.finish()
}

#[derive(Default)]
struct Splitter<'a> {
    open: Vec<OpenTag<'a>>,
    current: Vec<Event<'a>>,
    segments: Vec<Segment>,
    ended: bool,
    /// The ending token sat inside a table; split once the table closes.
    pending: bool,
}

/// An element that is still open, with the number of list items already
/// closed under it.
struct OpenTag<'a> {
    tag: Tag<'a>,
    closed_items: u64,
}

impl<'a> Splitter<'a> {
    fn push(&mut self, event: Event<'a>) {
        match event {
            Event::Start(tag) => {
                self.open.push(OpenTag {
                    tag: tag.clone(),
                    closed_items: 0,
                });
                self.emit(Event::Start(tag));
            }
            Event::End(end) => {
                self.open.pop();
                if end == TagEnd::Item {
                    if let Some(list) = self.open.last_mut() {
                        list.closed_items += 1;
                    }
                }
                self.emit(Event::End(end));
                if self.pending && !self.in_table() {
                    self.pending = false;
                    self.split();
                }
            }
            Event::Text(text) if !self.in_code_block() => self.text(text),
            Event::Html(raw) => self.raw_html(raw, Event::Html),
            Event::InlineHtml(raw) => self.raw_html(raw, Event::InlineHtml),
            event => self.emit(event),
        }
    }

    fn in_code_block(&self) -> bool {
        self.open.iter().any(|open| matches!(open.tag, Tag::CodeBlock(_)))
    }

    fn in_table(&self) -> bool {
        self.open.iter().any(|open| matches!(open.tag, Tag::Table(_)))
    }

    fn text(&mut self, text: CowStr<'a>) {
        if !text.contains(TRANSITION_TOKEN) && !text.contains(ENDING_TOKEN) {
            self.emit(Event::Text(text));
            return;
        }

        let cleaned = text.replace(TRANSITION_TOKEN, "");
        if self.ended {
            self.emit_text(cleaned.replace(ENDING_TOKEN, ""));
            return;
        }

        match cleaned.split_once(ENDING_TOKEN) {
            Some((before, after)) if self.in_table() => {
                self.emit_text(format!("{before}{}", after.replace(ENDING_TOKEN, "")));
                self.ended = true;
                self.pending = true;
            }
            Some((before, after)) => {
                self.emit_text(before.to_string());
                self.split();
                self.emit_text(after.replace(ENDING_TOKEN, ""));
            }
            None => self.emit_text(cleaned),
        }
    }

    /// Raw HTML is never cut in two: the token is removed and the split
    /// lands after the whole event.
    fn raw_html(&mut self, raw: CowStr<'a>, wrap: fn(CowStr<'a>) -> Event<'a>) {
        if !raw.contains(TRANSITION_TOKEN) && !raw.contains(ENDING_TOKEN) {
            self.emit(wrap(raw));
            return;
        }

        let has_ending = raw.contains(ENDING_TOKEN);
        let cleaned = raw.replace(TRANSITION_TOKEN, "").replace(ENDING_TOKEN, "");
        if !cleaned.is_empty() {
            self.emit(wrap(cleaned.into()));
        }

        if has_ending && !self.ended {
            if self.in_table() {
                self.ended = true;
                self.pending = true;
            } else {
                self.split();
            }
        }
    }

    fn emit_text(&mut self, text: String) {
        if !text.is_empty() {
            self.emit(Event::Text(text.into()));
        }
    }

    /// Push an event, dropping elements that would render empty.
    fn emit(&mut self, event: Event<'a>) {
        if let Event::End(end) = &event {
            if let Some(Event::Start(tag)) = self.current.last() {
                if is_collapsible(end) && tag.to_end() == *end {
                    self.current.pop();
                    return;
                }
            }
        }

        self.current.push(event);
    }

    /// Close every open element, finish the segment, emit the ending and
    /// reopen the same elements for whatever follows. Ordered lists resume
    /// at the number of the item that was open.
    fn split(&mut self) {
        let closing: Vec<TagEnd> = self.open.iter().rev().map(|open| open.tag.to_end()).collect();
        for end in closing {
            self.emit(Event::End(end));
        }

        let html = render(std::mem::take(&mut self.current).into_iter());
        self.segments.push(Segment::Html(html));
        self.segments.push(Segment::Ending);
        self.ended = true;

        for open in &mut self.open {
            if let Tag::List(Some(start)) = open.tag {
                open.tag = Tag::List(Some(start + open.closed_items));
                open.closed_items = 0;
            }
        }
        let reopening: Vec<Tag<'a>> = self.open.iter().map(|open| open.tag.clone()).collect();
        for tag in reopening {
            self.emit(Event::Start(tag));
        }
    }

    fn finish(mut self) -> Vec<Segment> {
        if self.pending {
            self.pending = false;
            self.split();
        }

        let html = render(std::mem::take(&mut self.current).into_iter());
        if self.ended {
            if !html.trim().is_empty() {
                self.segments.push(Segment::Html(html));
            }
        } else {
            self.segments.push(Segment::Html(html));
            self.segments.push(Segment::Ending);
        }

        self.segments
    }
}

fn is_collapsible(end: &TagEnd) -> bool {
    matches!(
        end,
        TagEnd::Paragraph
            | TagEnd::Emphasis
            | TagEnd::Strong
            | TagEnd::Strikethrough
            | TagEnd::BlockQuote
            | TagEnd::Item
            | TagEnd::List(_)
    )
}
