//! Common authentication utility functions

use http::{HeaderMap, header};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// Authorization scheme expected in the `Authorization` header
const API_KEY_SCHEME: &str = "ApiKey";

/// API key extraction failure
///
/// Only the absent-header case is a distinct variant, because it is the
/// one case callers branch on (ask the client to authenticate instead
/// of rejecting the request as broken). All malformed shapes collapse
/// into [`AuthError::MalformedAuthHeader`]; the carried reason is for
/// humans and must not be matched on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No `Authorization` header present in the request
    NoAuthHeaderIncluded,
    /// `Authorization` header present but not `ApiKey <key>`
    MalformedAuthHeader(String),
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::NoAuthHeaderIncluded => write!(f, "no authorization header included"),
            AuthError::MalformedAuthHeader(reason) => {
                write!(f, "malformed authorization header: {}", reason)
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// Extract API key from request headers
///
/// Expects `Authorization: ApiKey <key>`. The scheme is compared
/// case-sensitively and the value is split on the first space, so a key
/// containing spaces is returned whole.
///
/// If the header carries multiple values, only the first is consulted
/// (`HeaderMap::get` contract).
pub fn get_api_key(headers: &HeaderMap) -> Result<String, AuthError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::NoAuthHeaderIncluded)?;

    let value = value
        .to_str()
        .map_err(|_| AuthError::MalformedAuthHeader("value is not valid UTF-8".to_string()))?;

    let (scheme, key) = value.split_once(' ').ok_or_else(|| {
        AuthError::MalformedAuthHeader(format!("expected '{} <key>'", API_KEY_SCHEME))
    })?;

    if scheme != API_KEY_SCHEME {
        return Err(AuthError::MalformedAuthHeader(format!(
            "unsupported scheme '{}'",
            scheme
        )));
    }

    if key.is_empty() {
        return Err(AuthError::MalformedAuthHeader(
            "missing key after scheme".to_string(),
        ));
    }

    Ok(key.to_string())
}

/// Constant-time string comparison to prevent timing attacks
///
/// The comparison time is constant regardless of string content,
/// which prevents attackers from guessing the API Key by measuring response time.
///
/// Uses the security-audited `subtle` crate implementation
pub fn constant_time_eq(a: &str, b: &str) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

/// Short SHA-256 fingerprint of an API key, for log output
///
/// Lets operators correlate a configured key across log lines without
/// ever writing the key itself to the log stream.
pub fn key_fingerprint(key: &str) -> String {
    let digest = Sha256::digest(key.as_bytes());
    hex::encode(&digest[..8])
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    fn headers_with_authorization(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn valid_api_key_extracted() {
        let headers = headers_with_authorization("ApiKey 123456");
        assert_eq!(get_api_key(&headers), Ok("123456".to_string()));
    }

    #[test]
    fn missing_header_returns_sentinel() {
        let headers = HeaderMap::new();
        let err = get_api_key(&headers).unwrap_err();
        assert_eq!(err, AuthError::NoAuthHeaderIncluded);

        // Stable across invocations
        assert_eq!(get_api_key(&headers).unwrap_err(), err);
    }

    #[test]
    fn wrong_scheme_is_malformed_not_sentinel() {
        let headers = headers_with_authorization("Bearer 123456");
        let err = get_api_key(&headers).unwrap_err();
        assert!(matches!(err, AuthError::MalformedAuthHeader(_)));
        assert_ne!(err, AuthError::NoAuthHeaderIncluded);
    }

    #[test]
    fn lowercase_scheme_rejected() {
        let headers = headers_with_authorization("apikey 123456");
        let err = get_api_key(&headers).unwrap_err();
        assert!(matches!(err, AuthError::MalformedAuthHeader(_)));
    }

    #[test]
    fn scheme_without_key_is_malformed() {
        let headers = headers_with_authorization("ApiKey");
        let err = get_api_key(&headers).unwrap_err();
        assert!(matches!(err, AuthError::MalformedAuthHeader(_)));
    }

    #[test]
    fn scheme_with_empty_key_is_malformed() {
        let headers = headers_with_authorization("ApiKey ");
        let err = get_api_key(&headers).unwrap_err();
        assert!(matches!(err, AuthError::MalformedAuthHeader(_)));
    }

    #[test]
    fn key_with_spaces_returned_whole() {
        let headers = headers_with_authorization("ApiKey abc def");
        assert_eq!(get_api_key(&headers), Ok("abc def".to_string()));
    }

    #[test]
    fn undecodable_value_is_malformed() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_bytes(b"ApiKey \xff\xfe").unwrap(),
        );
        let err = get_api_key(&headers).unwrap_err();
        assert!(matches!(err, AuthError::MalformedAuthHeader(_)));
    }

    #[test]
    fn first_of_multiple_values_wins() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("ApiKey first"),
        );
        headers.append(
            header::AUTHORIZATION,
            HeaderValue::from_static("ApiKey second"),
        );
        assert_eq!(get_api_key(&headers), Ok("first".to_string()));
    }

    #[test]
    fn headers_not_mutated() {
        let headers = headers_with_authorization("ApiKey 123456");
        let snapshot = headers.clone();
        let _ = get_api_key(&headers);
        assert_eq!(headers, snapshot);
    }

    #[test]
    fn constant_time_eq_matches() {
        assert!(constant_time_eq("secret", "secret"));
        assert!(!constant_time_eq("secret", "secres"));
        assert!(!constant_time_eq("secret", "secret-longer"));
        assert!(!constant_time_eq("secret", ""));
    }

    #[test]
    fn key_fingerprint_is_short_and_stable() {
        let fp = key_fingerprint("secret");
        assert_eq!(fp.len(), 16);
        assert_eq!(fp, key_fingerprint("secret"));
        assert_ne!(fp, key_fingerprint("other"));
    }
}
