use crate::config_map::ConfigMap;
use crate::configuration::PolicyConfiguration;
use crate::constants::{header, method};
use crate::error::CorsError;
use crate::header_builder::HeaderBuilder;
use crate::headers::{HeaderCollection, append_vary};
use crate::message::{MutableResponse, ReadableRequest, last_header_value};
use tracing::{debug, trace};

/// Shape of an inbound request as far as CORS is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    /// No `Origin` header; the response is left alone.
    NotCors,
    /// `OPTIONS` with `Origin` and `Access-Control-Request-Method`.
    Preflight,
    /// Any other request carrying an `Origin`.
    Simple,
}

/// Applies a [`PolicyConfiguration`] to requests and their responses.
///
/// Holds no per-request state; one instance can serve any number of
/// concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct CorsEvaluator {
    configuration: PolicyConfiguration,
}

impl CorsEvaluator {
    pub fn new(configuration: PolicyConfiguration) -> Self {
        Self { configuration }
    }

    pub fn from_map(map: &ConfigMap) -> Self {
        Self::new(PolicyConfiguration::from_map(map))
    }

    pub fn configuration(&self) -> &PolicyConfiguration {
        &self.configuration
    }

    pub fn is_cors_request<R: ReadableRequest>(&self, request: &R) -> bool {
        last_header_value(request, header::ORIGIN).is_some()
    }

    pub fn is_preflight_request<R: ReadableRequest>(&self, request: &R) -> bool {
        self.is_cors_request(request)
            && request.method().eq_ignore_ascii_case(method::OPTIONS)
            && last_header_value(request, header::ACCESS_CONTROL_REQUEST_METHOD).is_some()
    }

    pub fn classify<R: ReadableRequest>(&self, request: &R) -> RequestKind {
        if !self.is_cors_request(request) {
            RequestKind::NotCors
        } else if self.is_preflight_request(request) {
            RequestKind::Preflight
        } else {
            RequestKind::Simple
        }
    }

    /// Decorate `response` according to the kind of `request`.
    ///
    /// Requests from origins outside the allow-list get no CORS headers at
    /// all; the browser enforces the block on its side.
    pub fn handle_request<R, S>(&self, request: &R, response: S) -> Result<S, CorsError>
    where
        R: ReadableRequest,
        S: MutableResponse,
    {
        let kind = self.classify(request);
        trace!(?kind, method = request.method(), "classified cors request");

        match kind {
            RequestKind::NotCors => Ok(response),
            RequestKind::Preflight => self.handle_preflight_request(request, response),
            RequestKind::Simple if self.origin_allowed(request) => {
                self.handle_normal_request(request, response)
            }
            RequestKind::Simple => {
                debug!(origin = self.origin(request), "origin not allowed, skipping cors headers");
                Ok(response)
            }
        }
    }

    pub fn handle_preflight_request<R, S>(&self, request: &R, response: S) -> Result<S, CorsError>
    where
        R: ReadableRequest,
        S: MutableResponse,
    {
        if !self.origin_allowed(request) {
            debug!(origin = self.origin(request), "preflight origin not allowed, skipping cors headers");
            return Ok(response);
        }

        let builder = HeaderBuilder::new(&self.configuration);
        let mut response = self.set_allow_origin(&builder, request, response)?;

        if let Some(max_age) = builder.max_age() {
            response = response.with_header(header::ACCESS_CONTROL_MAX_AGE, &max_age)?;
        }

        response
            .with_header(
                header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
                builder.allow_credentials(),
            )?
            .with_header(
                header::ACCESS_CONTROL_ALLOW_METHODS,
                &builder.allow_methods(request),
            )?
            .with_header(
                header::ACCESS_CONTROL_ALLOW_HEADERS,
                &builder.allow_headers(request),
            )
    }

    pub fn handle_normal_request<R, S>(&self, request: &R, response: S) -> Result<S, CorsError>
    where
        R: ReadableRequest,
        S: MutableResponse,
    {
        let builder = HeaderBuilder::new(&self.configuration);
        let mut response = self.set_allow_origin(&builder, request, response)?;

        if !self.configuration.allowed_origins().allows_any() {
            let vary = append_vary(response.header(header::VARY).as_deref(), header::ORIGIN);
            response = response.with_header(header::VARY, &vary)?;
        }

        response = response.with_header(
            header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
            builder.allow_credentials(),
        )?;

        if let Some(exposed) = builder.expose_headers() {
            response = response.with_header(header::ACCESS_CONTROL_EXPOSE_HEADERS, &exposed)?;
        }

        Ok(response)
    }

    /// Headers [`handle_request`](Self::handle_request) would add to an empty response.
    pub fn headers_for<R: ReadableRequest>(&self, request: &R) -> Result<HeaderCollection, CorsError> {
        self.handle_request(request, HeaderCollection::new())
    }

    fn origin<'r, R: ReadableRequest>(&self, request: &'r R) -> &'r str {
        last_header_value(request, header::ORIGIN).unwrap_or_default()
    }

    fn origin_allowed<R: ReadableRequest>(&self, request: &R) -> bool {
        self.configuration
            .allowed_origins()
            .matches(self.origin(request))
    }

    fn set_allow_origin<R, S>(
        &self,
        builder: &HeaderBuilder<'_>,
        request: &R,
        response: S,
    ) -> Result<S, CorsError>
    where
        R: ReadableRequest,
        S: MutableResponse,
    {
        match builder.allow_origin(request) {
            Some(value) => response.with_header(header::ACCESS_CONTROL_ALLOW_ORIGIN, &value),
            None => Ok(response),
        }
    }
}

impl From<PolicyConfiguration> for CorsEvaluator {
    fn from(configuration: PolicyConfiguration) -> Self {
        Self::new(configuration)
    }
}

#[cfg(test)]
#[path = "evaluator_test.rs"]
mod evaluator_test;
