//! VAST video markup decoding.
//!
//! A single streaming pass over the document, tracking the innermost open tag
//! and the active `<Tracking event="...">` name. The media file URL is the one
//! required field; everything else degrades to empty or zero.

use std::collections::HashMap;

use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::warn;

/// Structured ad-break data extracted from a VAST document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VastData {
    pub media_file_url: String,
    pub duration_secs: u32,
    pub click_through_url: Option<String>,
    pub impression_urls: Vec<String>,
    /// Tracking-event name ("start", "complete", ...) to pixel URLs.
    pub tracking_events: HashMap<String, Vec<String>>,
}

/// Cheap containment check used to route markup to the VAST path.
pub fn is_vast(content: &str) -> bool {
    let trimmed = content.trim();
    trimmed.starts_with("<?xml") || trimmed.starts_with("<VAST") || content.contains("<VAST")
}

#[derive(Default)]
struct Scan {
    media_file_url: Option<String>,
    duration_secs: u32,
    click_through_url: Option<String>,
    impression_urls: Vec<String>,
    tracking_events: HashMap<String, Vec<String>>,
}

impl Scan {
    fn text(&mut self, tag: Option<&str>, event: Option<&str>, text: &str) {
        if text.is_empty() {
            return;
        }
        match tag {
            Some("MediaFile") => {
                // First absolute URL wins.
                if self.media_file_url.is_none() && text.starts_with("http") {
                    self.media_file_url = Some(text.to_string());
                }
            }
            Some("Duration") => {
                self.duration_secs = parse_duration(text);
            }
            Some("ClickThrough") => {
                if text.starts_with("http") {
                    self.click_through_url = Some(text.to_string());
                }
            }
            Some("Impression") => {
                if text.starts_with("http") {
                    self.impression_urls.push(text.to_string());
                }
            }
            Some("Tracking") => {
                if let Some(event) = event {
                    if text.starts_with("http") {
                        self.tracking_events
                            .entry(event.to_string())
                            .or_default()
                            .push(text.to_string());
                    }
                }
            }
            _ => {}
        }
    }
}

/// Parses a VAST document.
///
/// Returns `None` on any structural XML error or when no media file URL was
/// found by end of document; such markup is unusable.
pub fn parse(xml: &str) -> Option<VastData> {
    let mut reader = Reader::from_str(xml);
    let mut scan = Scan::default();
    let mut current_tag: Option<String> = None;
    let mut current_event: Option<String> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                if name == "Tracking" {
                    current_event = e
                        .try_get_attribute("event")
                        .ok()
                        .flatten()
                        .and_then(|attr| attr.unescape_value().ok())
                        .map(|v| v.into_owned());
                }
                current_tag = Some(name);
            }
            Ok(Event::Text(t)) => match t.unescape() {
                Ok(text) => scan.text(current_tag.as_deref(), current_event.as_deref(), text.trim()),
                Err(e) => {
                    warn!(error = %e, "malformed text in VAST document");
                    return None;
                }
            },
            Ok(Event::CData(t)) => {
                let text = String::from_utf8_lossy(&t.into_inner()).into_owned();
                scan.text(current_tag.as_deref(), current_event.as_deref(), text.trim());
            }
            Ok(Event::End(e)) => {
                if e.name().as_ref() == b"Tracking" {
                    current_event = None;
                }
                current_tag = None;
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                warn!(error = %e, "failed to parse VAST document");
                return None;
            }
        }
    }

    match scan.media_file_url {
        Some(media_file_url) => Some(VastData {
            media_file_url,
            duration_secs: scan.duration_secs,
            click_through_url: scan.click_through_url,
            impression_urls: scan.impression_urls,
            tracking_events: scan.tracking_events,
        }),
        None => {
            warn!("no MediaFile found in VAST document");
            None
        }
    }
}

/// Parses `HH:MM:SS` or `HH:MM:SS.mmm`; anything malformed is 0 seconds.
fn parse_duration(value: &str) -> u32 {
    let parts: Vec<&str> = value.split(':').collect();
    if parts.len() != 3 {
        return 0;
    }
    let hours: u32 = match parts[0].parse() {
        Ok(v) => v,
        Err(_) => return 0,
    };
    let minutes: u32 = match parts[1].parse() {
        Ok(v) => v,
        Err(_) => return 0,
    };
    let seconds: u32 = match parts[2].split('.').next().unwrap_or("").parse() {
        Ok(v) => v,
        Err(_) => return 0,
    };
    hours * 3600 + minutes * 60 + seconds
}
