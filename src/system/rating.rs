//! cpubenchmark.net multithread-rating lookup.
//!
//! Network and parse failures come back as human-readable strings, never
//! `Err`; the popup shows whatever this returns.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

const BASE_URL: &str = "https://www.cpubenchmark.net/cpu.php?cpu=";

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/117.0.0.0 Safari/537.36";

const MARKER: &str = "Multithread Rating";

/// Unreserved characters stay literal, everything else gets %-escaped
const URL_ENCODE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Fetch the multithread rating for `model` from cpubenchmark.net.
/// Returns the rating string, or a readable error string.
pub fn fetch_multithread_rating(model: &str) -> String {
    let url = format!("{}{}", BASE_URL, utf8_percent_encode(model, URL_ENCODE));

    match ureq::get(&url).set("User-Agent", USER_AGENT).call() {
        Ok(response) => match response.into_string() {
            Ok(body) => extract_rating(&body).unwrap_or_else(|| "Rating not found".to_string()),
            Err(e) => format!("Failed to read page body ({})", e),
        },
        Err(ureq::Error::Status(code, _)) => {
            format!("Failed to retrieve page (Status {})", code)
        }
        Err(e) => format!("Failed to retrieve page ({})", e),
    }
}

/// Pull the first number following the "Multithread Rating" marker.
/// The page renders the value in the element right after the label, so the
/// first digit run (with thousands separators) after the marker is it.
fn extract_rating(body: &str) -> Option<String> {
    let idx = body.find(MARKER)?;
    let rest = &body[idx + MARKER.len()..];

    let mut rating = String::new();
    for ch in rest.chars().take(500) {
        if ch.is_ascii_digit() {
            rating.push(ch);
        } else if ch == ',' && !rating.is_empty() {
            rating.push(ch);
        } else if !rating.is_empty() {
            break;
        }
    }

    let rating = rating.trim_end_matches(',').to_string();
    if rating.is_empty() {
        None
    } else {
        Some(rating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_rating_after_marker() {
        let body = r#"<span class="title">Multithread Rating</span><span>28,651</span>"#;
        assert_eq!(extract_rating(body), Some("28,651".to_string()));
    }

    #[test]
    fn extracts_plain_number() {
        let body = "Multithread Rating: 4120 (higher is better)";
        assert_eq!(extract_rating(body), Some("4120".to_string()));
    }

    #[test]
    fn missing_marker_is_none() {
        assert_eq!(extract_rating("<html>no ratings here</html>"), None);
        assert_eq!(extract_rating("Multithread Rating</span><i>n/a</i>"), None);
    }

    #[test]
    fn model_name_is_percent_encoded() {
        let encoded =
            utf8_percent_encode("Intel(R) Core(TM) i7-9700K CPU @ 3.60GHz", URL_ENCODE).to_string();
        assert!(!encoded.contains(' '));
        assert!(!encoded.contains('('));
        assert!(encoded.contains("i7-9700K"));
    }
}
