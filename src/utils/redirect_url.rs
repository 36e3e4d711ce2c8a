//! Tracking-parameter rewriting of destination URLs.

use url::Url;

/// Sets or overwrites the `code` query parameter on a destination URL.
///
/// The existing query string is parsed into ordered key-value pairs with
/// last-value-wins on duplicate keys. An existing `code` key keeps its
/// position and has its value replaced; otherwise `code` is appended. Path
/// and fragment pass through untouched.
///
/// # Errors
///
/// Returns [`url::ParseError`] if the stored URL cannot be parsed. Creation
/// validates destination URLs, so this only fires on corrupted records.
///
/// # Examples
///
/// ```
/// use link_tracker::utils::redirect_url::set_code_param;
///
/// let url = set_code_param("https://example.com/page?foo=1", "AB12").unwrap();
/// assert_eq!(url, "https://example.com/page?foo=1&code=AB12");
/// ```
pub fn set_code_param(redirect_url: &str, code: &str) -> Result<String, url::ParseError> {
    let mut url = Url::parse(redirect_url)?;

    let mut pairs: Vec<(String, String)> = Vec::new();
    for (key, value) in url.query_pairs() {
        let key = key.into_owned();
        let value = value.into_owned();
        match pairs.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = value,
            None => pairs.push((key, value)),
        }
    }

    match pairs.iter_mut().find(|(key, _)| key == "code") {
        Some(entry) => entry.1 = code.to_string(),
        None => pairs.push(("code".to_string(), code.to_string())),
    }

    url.query_pairs_mut()
        .clear()
        .extend_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));

    Ok(url.to_string())
}
