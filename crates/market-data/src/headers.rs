//! Browser-like HTTP headers for NSE India requests

use reqwest::header::{
    HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CONNECTION, REFERER, USER_AGENT,
};

const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 Chrome/120.0.0.0 Safari/537.36";

/// Create the header set sent on every NSE request.
///
/// NSE rejects clients that do not look like a regular browser, so the same
/// headers go out on the priming page visits and the API calls alike.
pub fn nse_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(DEFAULT_USER_AGENT));
    headers.insert(
        ACCEPT,
        HeaderValue::from_static(
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        ),
    );
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
    headers.insert(
        REFERER,
        HeaderValue::from_static("https://www.nseindia.com/get-quotes/equity"),
    );
    headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nse_headers_has_required_fields() {
        let headers = nse_headers();
        assert!(headers.contains_key(USER_AGENT));
        assert!(headers.contains_key(ACCEPT));
        assert!(headers.contains_key(ACCEPT_LANGUAGE));
        assert!(headers.contains_key(REFERER));
        assert!(headers.contains_key(CONNECTION));
    }

    #[test]
    fn test_user_agent_is_browser_like() {
        let headers = nse_headers();
        let user_agent = headers.get(USER_AGENT).unwrap().to_str().unwrap();
        assert!(user_agent.starts_with("Mozilla/5.0"));
    }
}
