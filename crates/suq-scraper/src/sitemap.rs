//! Sitemap `<loc>` extraction.

use quick_xml::events::Event;
use quick_xml::Reader;

/// Collects every `<loc>` entry from a sitemap document, in document order.
///
/// Namespace-agnostic and tolerant: sitemap indexes contribute their child
/// sitemap locations like any other entry, CDATA-wrapped locations are
/// unwrapped, and a malformed document yields whatever was parsed up to the
/// error rather than failing.
#[must_use]
pub fn sitemap_locs(xml: &str) -> Vec<String> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut locs = Vec::new();
    let mut in_loc = false;
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.local_name().as_ref() == b"loc" => in_loc = true,
            Ok(Event::End(e)) if e.local_name().as_ref() == b"loc" => in_loc = false,
            Ok(Event::Text(t)) if in_loc => {
                if let Ok(text) = t.unescape() {
                    let url = text.trim().to_owned();
                    if !url.is_empty() {
                        locs.push(url);
                    }
                }
            }
            Ok(Event::CData(t)) if in_loc => {
                let url = String::from_utf8_lossy(&t).trim().to_owned();
                if !url.is_empty() {
                    locs.push(url);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                tracing::debug!(error = %e, "stopping sitemap parse on malformed XML");
                break;
            }
            _ => {}
        }
    }
    locs
}
