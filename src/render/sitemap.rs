//! `sitemap.xml` with hreflang alternates.

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::{Result, SiteError};
use crate::i18n::Locale;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";

/// One `<url>` per locale, each listing every locale as an alternate.
pub fn sitemap_xml(site_url: &str, last_modified: &str) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    write(&mut writer, Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    write(
        &mut writer,
        Event::Start(
            BytesStart::new("urlset").with_attributes([("xmlns", SITEMAP_NS), ("xmlns:xhtml", XHTML_NS)]),
        ),
    )?;

    for locale in Locale::ALL {
        write(&mut writer, Event::Start(BytesStart::new("url")))?;
        text_element(&mut writer, "loc", &format!("{site_url}/{}", locale.code()))?;
        text_element(&mut writer, "lastmod", last_modified)?;
        text_element(&mut writer, "changefreq", "monthly")?;
        text_element(&mut writer, "priority", "1.0")?;
        for alternate in Locale::ALL {
            let href = format!("{site_url}/{}", alternate.code());
            write(
                &mut writer,
                Event::Empty(BytesStart::new("xhtml:link").with_attributes([
                    ("rel", "alternate"),
                    ("hreflang", alternate.code()),
                    ("href", href.as_str()),
                ])),
            )?;
        }
        write(&mut writer, Event::End(BytesEnd::new("url")))?;
    }

    write(&mut writer, Event::End(BytesEnd::new("urlset")))?;

    let mut xml = String::from_utf8(writer.into_inner()).map_err(|e| SiteError::Sitemap(e.to_string()))?;
    xml.push('\n');
    Ok(xml)
}

fn text_element(writer: &mut Writer<Vec<u8>>, name: &str, value: &str) -> Result<()> {
    write(writer, Event::Start(BytesStart::new(name)))?;
    write(writer, Event::Text(BytesText::new(value)))?;
    write(writer, Event::End(BytesEnd::new(name)))
}

fn write(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| SiteError::Sitemap(e.to_string()))
}
