use crate::error::{Result, SiftError};
use std::fs;
use std::path::Path;
use tracing::warn;
use url::Url;

/// Check that a raw string parses as an absolute http(s) URL with a host.
pub fn is_valid_url(raw: &str) -> bool {
    match Url::parse(raw) {
        Ok(u) => {
            matches!(u.scheme(), "http" | "https")
                && u.host_str().map(|h| !h.is_empty()).unwrap_or(false)
        }
        Err(_) => false,
    }
}

/// Load candidate URLs from a text file, one per line.
///
/// Blank and whitespace-only lines are ignored. Syntactically invalid entries
/// are logged and dropped; they never reach the fetch pipeline and are not
/// written to the rejection table. Duplicates are kept and fetched
/// independently.
pub fn load_urls(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|source| SiftError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;

    let mut urls = Vec::new();
    for line in content.lines() {
        let candidate = line.trim();
        if candidate.is_empty() {
            continue;
        }
        if is_valid_url(candidate) {
            urls.push(candidate.to_string());
        } else {
            warn!("Invalid URL skipped: {}", candidate);
        }
    }
    Ok(urls)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_valid_urls() {
        assert!(is_valid_url("https://example.com"));
        assert!(is_valid_url("http://example.com/path?q=1"));
    }

    #[test]
    fn test_invalid_urls() {
        assert!(!is_valid_url(""));
        assert!(!is_valid_url("not a url"));
        assert!(!is_valid_url("ftp://bad"));
        assert!(!is_valid_url("example.com"));
        assert!(!is_valid_url("https://"));
    }

    #[test]
    fn test_load_urls_skips_blank_and_invalid_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "https://ok.example").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "   ").unwrap();
        writeln!(file, "not a url").unwrap();
        writeln!(file, "ftp://bad").unwrap();
        writeln!(file, "https://two.example").unwrap();

        let urls = load_urls(file.path()).unwrap();
        assert_eq!(urls, vec!["https://ok.example", "https://two.example"]);
    }

    #[test]
    fn test_load_urls_keeps_duplicates() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "https://ok.example").unwrap();
        writeln!(file, "https://ok.example").unwrap();

        let urls = load_urls(file.path()).unwrap();
        assert_eq!(urls.len(), 2);
    }

    #[test]
    fn test_load_urls_missing_file() {
        let err = load_urls(Path::new("/nonexistent/urls.txt")).unwrap_err();
        assert!(err.to_string().contains("could not read URL list"));
    }
}
