//! [`ReadableRequest`] and [`MutableResponse`] for the `http` crate's message types.

use crate::error::CorsError;
use crate::message::{MutableResponse, ReadableRequest};
use http::header::{HeaderMap, HeaderName, HeaderValue};
use http::{Request, Response};
use std::borrow::Cow;

impl<B> ReadableRequest for Request<B> {
    fn method(&self) -> &str {
        Request::method(self).as_str()
    }

    fn header_values(&self, name: &str) -> impl Iterator<Item = &str> {
        text_values(self.headers(), name)
    }
}

impl<B> MutableResponse for Response<B> {
    fn header(&self, name: &str) -> Option<Cow<'_, str>> {
        joined_value(self.headers(), name)
    }

    fn with_header(mut self, name: &str, value: &str) -> Result<Self, CorsError> {
        set_header(self.headers_mut(), name, value)?;
        Ok(self)
    }
}

impl MutableResponse for HeaderMap {
    fn header(&self, name: &str) -> Option<Cow<'_, str>> {
        joined_value(self, name)
    }

    fn with_header(mut self, name: &str, value: &str) -> Result<Self, CorsError> {
        set_header(&mut self, name, value)?;
        Ok(self)
    }
}

// values that are not visible ASCII are skipped
fn text_values<'a>(headers: &'a HeaderMap, name: &str) -> impl Iterator<Item = &'a str> + use<'a> {
    headers
        .get_all(name)
        .iter()
        .filter_map(|value| value.to_str().ok())
}

fn joined_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<Cow<'a, str>> {
    let values: Vec<&str> = text_values(headers, name).collect();
    match values.as_slice() {
        [] => None,
        [single] => Some(Cow::Borrowed(*single)),
        many => Some(Cow::Owned(many.join(", "))),
    }
}

fn set_header(headers: &mut HeaderMap, name: &str, value: &str) -> Result<(), CorsError> {
    let header_name =
        HeaderName::from_bytes(name.as_bytes()).map_err(|_| CorsError::invalid_name(name))?;
    let header_value =
        HeaderValue::from_str(value).map_err(|_| CorsError::invalid_value(name, value))?;

    headers.insert(header_name, header_value);
    Ok(())
}

#[cfg(test)]
#[path = "adapters_test.rs"]
mod adapters_test;
