use crate::error::CorsError;
use std::borrow::Cow;

/// Read access to an inbound request.
pub trait ReadableRequest {
    /// The request method as sent by the client.
    fn method(&self) -> &str;

    /// All values of the named header, in arrival order. Name lookup is
    /// case-insensitive; an absent header yields an empty iterator.
    fn header_values(&self, name: &str) -> impl Iterator<Item = &str>;
}

/// A response the evaluator can decorate with headers.
///
/// `with_header` may mutate in place or derive a new message; callers always
/// continue with the returned value.
pub trait MutableResponse: Sized {
    /// Current value of the named header, with repeated fields joined by `", "`.
    fn header(&self, name: &str) -> Option<Cow<'_, str>>;

    /// Set `name` to `value`, replacing any previous value.
    fn with_header(self, name: &str, value: &str) -> Result<Self, CorsError>;
}

/// Last non-empty value of `name`, mirroring how repeated request headers are
/// collapsed by most servers.
pub(crate) fn last_header_value<'a, R>(request: &'a R, name: &str) -> Option<&'a str>
where
    R: ReadableRequest,
{
    request
        .header_values(name)
        .filter(|value| !value.trim().is_empty())
        .last()
}

#[cfg(test)]
#[path = "message_test.rs"]
mod message_test;
