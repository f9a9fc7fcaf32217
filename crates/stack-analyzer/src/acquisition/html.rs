//! HTML-to-text normalization.
//!
//! An ordered pipeline of regex passes: drop `<script>` and `<style>`
//! blocks with their content, drop remaining tags, decode the four basic
//! entities, collapse whitespace. Script stripping must happen before
//! matching so inline bundles don't produce false positives.

use std::sync::OnceLock;

use regex::Regex;

fn script_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>").expect("script regex is valid")
    })
}

fn style_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?is)<style\b[^>]*>.*?</style\s*>").expect("style regex is valid")
    })
}

fn tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]+>").expect("tag regex is valid"))
}

fn whitespace_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("whitespace regex is valid"))
}

/// Convert an HTML document to a single line of plain text.
pub fn html_to_text(html: &str) -> String {
    let text = script_re().replace_all(html, " ");
    let text = style_re().replace_all(&text, " ");
    let text = tag_re().replace_all(&text, " ");
    let text = decode_entities(&text);
    whitespace_re().replace_all(&text, " ").trim().to_string()
}

/// Decode `&amp;`, `&lt;`, `&gt;`, `&quot;`, in that order.
fn decode_entities(text: &str) -> String {
    text.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
}
