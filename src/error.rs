use thiserror::Error;

/// Errors surfaced while applying CORS headers to a response.
///
/// The evaluator itself never fails; these are raised by the
/// [`MutableResponse`](crate::MutableResponse) collaborator and propagated unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CorsError {
    #[error("invalid header name `{name}`")]
    InvalidHeaderName { name: String },
    #[error("invalid value `{value}` for header `{name}`")]
    InvalidHeaderValue { name: String, value: String },
}

impl CorsError {
    pub(crate) fn invalid_name(name: &str) -> Self {
        Self::InvalidHeaderName {
            name: name.to_owned(),
        }
    }

    pub(crate) fn invalid_value(name: &str, value: &str) -> Self {
        Self::InvalidHeaderValue {
            name: name.to_owned(),
            value: value.to_owned(),
        }
    }
}
