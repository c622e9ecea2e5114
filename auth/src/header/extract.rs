use http::header::AUTHORIZATION;
use http::HeaderMap;

use super::errors::HeaderError;

const BEARER_SCHEME: &str = "Bearer";
const API_KEY_SCHEME: &str = "ApiKey";

/// Extract the token from an `Authorization: Bearer <token>` header.
///
/// Pure parsing, deterministic given the header value. The returned token is
/// trimmed of surrounding whitespace.
///
/// # Errors
/// * `MissingHeader` - Header absent or empty
/// * `MissingPrefix` - Header does not start with `"Bearer "`
/// * `EmptyToken` - Nothing left after the prefix
pub fn extract_bearer(headers: &HeaderMap) -> Result<String, HeaderError> {
    extract_scheme(headers, BEARER_SCHEME)
}

/// Extract the key from an `Authorization: ApiKey <key>` header.
///
/// Same contract as [`extract_bearer`] with the `"ApiKey "` prefix. The key
/// is an opaque shared secret the caller compares for exact equality.
pub fn extract_api_key(headers: &HeaderMap) -> Result<String, HeaderError> {
    extract_scheme(headers, API_KEY_SCHEME)
}

fn extract_scheme(headers: &HeaderMap, scheme: &'static str) -> Result<String, HeaderError> {
    let value = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    if value.is_empty() {
        return Err(HeaderError::MissingHeader);
    }

    // The prefix is the scheme plus a single space, matched literally.
    let Some(rest) = value
        .strip_prefix(scheme)
        .and_then(|rest| rest.strip_prefix(' '))
    else {
        return Err(HeaderError::MissingPrefix(scheme));
    };

    let credential = rest.trim();
    if credential.is_empty() {
        return Err(HeaderError::EmptyToken);
    }

    Ok(credential.to_string())
}

#[cfg(test)]
mod tests {
    use http::HeaderValue;

    use super::*;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_bearer_token() {
        let token = extract_bearer(&headers_with("Bearer abc123")).expect("Failed to extract");
        assert_eq!(token, "abc123");
    }

    #[test]
    fn test_bearer_trims_whitespace() {
        let token = extract_bearer(&headers_with("Bearer   abc123  ")).expect("Failed to extract");
        assert_eq!(token, "abc123");
    }

    #[test]
    fn test_bearer_missing_header() {
        let result = extract_bearer(&HeaderMap::new());
        assert!(matches!(result, Err(HeaderError::MissingHeader)));
    }

    #[test]
    fn test_bearer_empty_header() {
        let result = extract_bearer(&headers_with(""));
        assert!(matches!(result, Err(HeaderError::MissingHeader)));
    }

    #[test]
    fn test_bearer_wrong_scheme() {
        let result = extract_bearer(&headers_with("Basic xyz"));
        assert!(matches!(result, Err(HeaderError::MissingPrefix("Bearer"))));
    }

    #[test]
    fn test_bearer_empty_token() {
        let result = extract_bearer(&headers_with("Bearer   "));
        assert!(matches!(result, Err(HeaderError::EmptyToken)));
    }

    #[test]
    fn test_api_key() {
        let key =
            extract_api_key(&headers_with("ApiKey f271c81ff7084")).expect("Failed to extract");
        assert_eq!(key, "f271c81ff7084");
    }

    #[test]
    fn test_api_key_rejects_bearer() {
        let result = extract_api_key(&headers_with("Bearer abc123"));
        assert!(matches!(result, Err(HeaderError::MissingPrefix("ApiKey"))));
    }

    #[test]
    fn test_api_key_empty_key() {
        let result = extract_api_key(&headers_with("ApiKey "));
        assert!(matches!(result, Err(HeaderError::EmptyToken)));
    }
}
