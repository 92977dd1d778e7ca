use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{FeedError, Result};

static ITEM_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<item\b[^>]*>(?<body>.*?)</item>").unwrap());
static GUID_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<guid\b[^>]*>(?<text>.*?)</guid>").unwrap());
static LINK_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<link\b[^>]*>(?<text>.*?)</link>").unwrap());
static CDATA_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^<!\[CDATA\[(?<inner>.*)\]\]>$").unwrap());
static ENTITY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"&(?:#(?<dec>[0-9]{1,7})|#[xX](?<hex>[0-9a-fA-F]{1,6})|(?<name>lt|gt|quot|apos|amp));")
        .unwrap()
});

/// Link of the newest item in an RSS document.
///
/// Feeds list items newest first. The item id (`<guid>`) is preferred and
/// `<link>` is the fallback.
pub fn latest_link(xml: &str) -> Result<String> {
    let item = ITEM_REGEX
        .captures(xml)
        .and_then(|c| c.name("body"))
        .ok_or(FeedError::NoItems)?
        .as_str();

    [&*GUID_REGEX, &*LINK_REGEX]
        .into_iter()
        .filter_map(|re| re.captures(item).and_then(|c| c.name("text")))
        .map(|m| element_text(m.as_str()))
        .find(|text| !text.is_empty())
        .ok_or(FeedError::MissingLink)
}

fn element_text(raw: &str) -> String {
    let trimmed = raw.trim();
    match CDATA_REGEX.captures(trimmed).and_then(|c| c.name("inner")) {
        Some(inner) => inner.as_str().trim().to_string(),
        None => decode_entities(trimmed),
    }
}

/// Single pass, so `&amp;lt;` decodes to `&lt;` and not `<`. References to
/// invalid code points are left as written.
fn decode_entities(text: &str) -> String {
    ENTITY_REGEX
        .replace_all(text, |caps: &regex::Captures<'_>| {
            let decoded = if let Some(dec) = caps.name("dec") {
                dec.as_str().parse::<u32>().ok().and_then(char::from_u32)
            } else if let Some(hex) = caps.name("hex") {
                u32::from_str_radix(hex.as_str(), 16).ok().and_then(char::from_u32)
            } else {
                caps.name("name").and_then(|n| match n.as_str() {
                    "lt" => Some('<'),
                    "gt" => Some('>'),
                    "quot" => Some('"'),
                    "apos" => Some('\''),
                    "amp" => Some('&'),
                    _ => None,
                })
            };
            decoded.map_or_else(|| caps[0].to_string(), String::from)
        })
        .into_owned()
}
