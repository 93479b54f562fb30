use super::headers::{header_value, vary_values};
use cors_policy::HeaderCollection;
use cors_policy::constants::header;
use std::collections::HashSet;

pub fn assert_header_eq(headers: &HeaderCollection, name: &str, expected: &str) {
    assert_eq!(
        header_value(headers, name),
        Some(expected),
        "header {name} mismatch in {headers:?}"
    );
}

pub fn assert_header_absent(headers: &HeaderCollection, name: &str) {
    assert!(
        header_value(headers, name).is_none(),
        "header {name} should be absent in {headers:?}"
    );
}

pub fn assert_no_cors_headers(headers: &HeaderCollection) {
    for name in header::RESPONSE_HEADERS {
        assert_header_absent(headers, name);
    }
}

pub fn assert_vary_eq<I, S>(headers: &HeaderCollection, expected: I)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let expected: HashSet<String> = expected.into_iter().map(Into::into).collect();
    assert_eq!(vary_values(headers), expected);
}

pub fn assert_vary_is_empty(headers: &HeaderCollection) {
    assert!(vary_values(headers).is_empty(), "unexpected Vary in {headers:?}");
}
