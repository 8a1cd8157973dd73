mod utils;

use scraper::Html;
use utils::{visible_text, EMAIL_REGEX};

/// Extract email addresses from an HTML page body.
///
/// The document is parsed and reduced to its visible text before matching,
/// so addresses buried in attributes, scripts, or stylesheets do not count.
/// Matches come back in first-occurrence order and duplicates are kept; the
/// output table records one entry per occurrence. Returns an empty vector
/// when nothing matches.
pub fn extract_emails(body: &str) -> Vec<String> {
    let doc = Html::parse_document(body);
    let text = visible_text(&doc);
    EMAIL_REGEX
        .find_iter(&text)
        .map(|m| m.as_str().to_string())
        .collect()
}
