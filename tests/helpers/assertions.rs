// Test Assertion Helpers
//
// Common assertions for HTTP responses in integration tests.

use actix_web::http::header::HeaderMap;
use actix_web::http::StatusCode;

/// Assert the response carries the exact status code
///
/// # Panics
/// If status differs, with the expected and actual codes
pub fn assert_status(actual: StatusCode, expected: u16) {
    assert_eq!(
        actual.as_u16(),
        expected,
        "Expected {} response, got {} {}",
        expected,
        actual.as_u16(),
        actual.canonical_reason().unwrap_or("Unknown")
    );
}

/// Assert the three CORS headers of the initiation endpoint are present
pub fn assert_cors_headers(headers: &HeaderMap) {
    let header = |name: &str| {
        headers
            .get(name)
            .unwrap_or_else(|| panic!("Missing {} header", name))
            .to_str()
            .unwrap()
            .to_string()
    };

    assert_eq!(header("access-control-allow-origin"), "*");
    assert_eq!(header("access-control-allow-methods"), "POST, OPTIONS");
    assert_eq!(header("access-control-allow-headers"), "Content-Type");
}

/// Assert an HTML document contains a hidden input with this name and value
pub fn assert_hidden_field(html: &str, name: &str, value: &str) {
    let needle = format!(r#"<input type="hidden" name="{}" value="{}" />"#, name, value);
    assert!(
        html.contains(&needle),
        "Expected hidden field {}={:?} in:\n{}",
        name,
        value,
        html
    );
}
