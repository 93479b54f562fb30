use crate::constants::header;
use crate::message::ReadableRequest;

/// Borrowed view of the request fields the evaluator reads.
///
/// Useful for hosts that do not expose an `http::Request`; empty strings
/// stand for absent headers.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub origin: &'a str,
    pub access_control_request_method: &'a str,
    pub access_control_request_headers: &'a str,
}

impl<'a> RequestContext<'a> {
    pub fn new(method: &'a str) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    pub fn with_origin(mut self, origin: &'a str) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_request_method(mut self, method: &'a str) -> Self {
        self.access_control_request_method = method;
        self
    }

    pub fn with_request_headers(mut self, headers: &'a str) -> Self {
        self.access_control_request_headers = headers;
        self
    }

    fn field(&self, name: &str) -> Option<&'a str> {
        let value = if name.eq_ignore_ascii_case(header::ORIGIN) {
            self.origin
        } else if name.eq_ignore_ascii_case(header::ACCESS_CONTROL_REQUEST_METHOD) {
            self.access_control_request_method
        } else if name.eq_ignore_ascii_case(header::ACCESS_CONTROL_REQUEST_HEADERS) {
            self.access_control_request_headers
        } else {
            ""
        };

        (!value.is_empty()).then_some(value)
    }
}

impl ReadableRequest for RequestContext<'_> {
    fn method(&self) -> &str {
        self.method
    }

    fn header_values(&self, name: &str) -> impl Iterator<Item = &str> {
        self.field(name).into_iter()
    }
}

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;
