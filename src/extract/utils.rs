use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html};

/// One-or-more local-part characters, `@`, a domain, a dot, then a TLD of
/// two or more letters.
pub(super) static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("valid regex")
});

/// Elements whose text content never shows up on the rendered page.
const HIDDEN_PARENTS: [&str; 3] = ["script", "style", "noscript"];

/// Collect the text a reader would see, dropping markup along with
/// script/style/noscript content.
pub(super) fn visible_text(doc: &Html) -> String {
    let mut text = String::new();
    for node in doc.root_element().descendants() {
        if let Some(chunk) = node.value().as_text() {
            let hidden = node
                .ancestors()
                .filter_map(ElementRef::wrap)
                .next()
                .map(|el| HIDDEN_PARENTS.contains(&el.value().name()))
                .unwrap_or(false);
            if !hidden {
                text.push_str(chunk);
            }
        }
    }
    text
}
