//! Session Context
//!
//! Reads the `token` cookie and shares it with the screens via the Leptos
//! Context API. The token is only ever forwarded as a Bearer header on the
//! current-user lookup; no other cookie handling happens client-side.

use leptos::prelude::*;
use percent_encoding::percent_decode_str;
use wasm_bindgen::JsCast;

/// Name of the session cookie set by the backend on login
const TOKEN_COOKIE: &str = "token";

/// Session signals provided via context
#[derive(Clone, Copy)]
pub struct SessionContext {
    /// Session token from the `token` cookie, `None` when logged out
    pub token: ReadSignal<Option<String>>,
}

impl SessionContext {
    pub fn new(token: ReadSignal<Option<String>>) -> Self {
        Self { token }
    }
}

/// Extract a cookie value from a `document.cookie` string.
///
/// Values are percent-decoded the way they were encoded when the cookie
/// was set; a value that doesn't decode to valid UTF-8 is kept verbatim.
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| {
            percent_decode_str(value)
                .decode_utf8()
                .map(|decoded| decoded.into_owned())
                .unwrap_or_else(|_| value.to_string())
        })
}

/// Read the session token from the browser's cookie jar
pub fn token_from_document() -> Option<String> {
    let cookies = document()
        .dyn_into::<web_sys::HtmlDocument>()
        .ok()?
        .cookie()
        .ok()?;
    cookie_value(&cookies, TOKEN_COOKIE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_cookie() {
        assert_eq!(cookie_value("token=abc123", "token"), Some("abc123".into()));
    }

    #[test]
    fn test_token_among_other_cookies() {
        let cookies = "theme=dark; token=eyJhbGci; _ga=GA1.2";
        assert_eq!(cookie_value(cookies, "token"), Some("eyJhbGci".into()));
    }

    #[test]
    fn test_missing_cookie() {
        assert_eq!(cookie_value("theme=dark; _ga=GA1.2", "token"), None);
        assert_eq!(cookie_value("", "token"), None);
    }

    #[test]
    fn test_name_must_match_exactly() {
        // "token2" or "xtoken" must not satisfy a lookup for "token"
        assert_eq!(cookie_value("token2=nope; xtoken=nope", "token"), None);
    }

    #[test]
    fn test_value_may_contain_equals() {
        assert_eq!(
            cookie_value("token=a=b=c", "token"),
            Some("a=b=c".into())
        );
    }

    #[test]
    fn test_value_is_percent_decoded() {
        // A JWT-style token with encoded padding and separators
        assert_eq!(
            cookie_value("token=abc%3D%3D", "token"),
            Some("abc==".into())
        );
        assert_eq!(
            cookie_value("token=a%20b%2Fc", "token"),
            Some("a b/c".into())
        );
    }

    #[test]
    fn test_plain_value_survives_decoding() {
        // A bare '%' with no valid escape sequence is left as-is
        assert_eq!(cookie_value("token=100%", "token"), Some("100%".into()));
        assert_eq!(cookie_value("token=abc123", "token"), Some("abc123".into()));
    }
}
