use crate::configuration::{DEFAULT_HEADERS, DEFAULT_METHODS, PolicyConfiguration};
use crate::constants::{WILDCARD, header};
use crate::message::{ReadableRequest, last_header_value};
use indexmap::IndexSet;

const LIST_SEPARATOR: &str = ", ";

/// Computes the value of each CORS response header for one request.
pub(crate) struct HeaderBuilder<'a> {
    configuration: &'a PolicyConfiguration,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(configuration: &'a PolicyConfiguration) -> Self {
        Self { configuration }
    }

    /// `Access-Control-Allow-Origin`, or `None` when the origin is not allowed.
    pub(crate) fn allow_origin<R: ReadableRequest>(&self, request: &R) -> Option<String> {
        let origin = last_header_value(request, header::ORIGIN).unwrap_or_default();
        let origins = self.configuration.allowed_origins();

        if origins.allows_any() {
            if origin.is_empty() {
                Some(WILDCARD.to_owned())
            } else {
                Some(origin.to_owned())
            }
        } else if origins.matches(origin) {
            Some(origin.to_owned())
        } else {
            None
        }
    }

    pub(crate) fn allow_credentials(&self) -> &'static str {
        if self.configuration.allow_credentials() {
            "true"
        } else {
            "false"
        }
    }

    pub(crate) fn max_age(&self) -> Option<String> {
        match self.configuration.max_age() {
            0 => None,
            seconds => Some(seconds.to_string()),
        }
    }

    /// With `*` configured the requested method is echoed upper-cased; the
    /// static defaults stand in when the request names none.
    pub(crate) fn allow_methods<R: ReadableRequest>(&self, request: &R) -> String {
        let methods = self.configuration.allowed_methods();
        if !methods.contains(WILDCARD) {
            return join(methods);
        }

        match last_header_value(request, header::ACCESS_CONTROL_REQUEST_METHOD) {
            Some(requested) => requested.trim().to_ascii_uppercase(),
            None => DEFAULT_METHODS.join(LIST_SEPARATOR),
        }
    }

    /// With `*` configured the requested headers are echoed lower-cased; the
    /// static defaults stand in when the request names none.
    pub(crate) fn allow_headers<R: ReadableRequest>(&self, request: &R) -> String {
        let headers = self.configuration.allowed_headers();
        if !headers.contains(WILDCARD) {
            return join(headers);
        }

        match last_header_value(request, header::ACCESS_CONTROL_REQUEST_HEADERS) {
            Some(requested) => requested.trim().to_lowercase(),
            None => DEFAULT_HEADERS.join(LIST_SEPARATOR),
        }
    }

    pub(crate) fn expose_headers(&self) -> Option<String> {
        let exposed = self.configuration.exposed_headers();
        (!exposed.is_empty()).then(|| join(exposed))
    }
}

fn join(values: &IndexSet<String>) -> String {
    values
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(LIST_SEPARATOR)
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
