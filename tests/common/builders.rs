use cors_policy::constants::{header, method};
use cors_policy::{ConfigurationBuilder, CorsEvaluator, HeaderCollection, RequestKind};
use http::Request;

pub fn policy() -> ConfigurationBuilder {
    ConfigurationBuilder::new()
}

pub fn cors(builder: ConfigurationBuilder) -> CorsEvaluator {
    CorsEvaluator::new(builder.build())
}

pub struct SimpleRequestBuilder {
    method: String,
    origin: Option<String>,
}

impl SimpleRequestBuilder {
    pub fn new() -> Self {
        Self {
            method: method::GET.into(),
            origin: None,
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn build(self) -> Request<()> {
        let mut builder = Request::builder().method(self.method.as_str());
        if let Some(origin) = &self.origin {
            builder = builder.header(header::ORIGIN, origin.as_str());
        }
        builder.body(()).expect("valid simple request")
    }

    pub fn kind(self, cors: &CorsEvaluator) -> RequestKind {
        cors.classify(&self.build())
    }

    pub fn evaluate(self, cors: &CorsEvaluator) -> HeaderCollection {
        cors.headers_for(&self.build())
            .expect("simple request evaluation should succeed")
    }
}

#[derive(Default)]
pub struct PreflightRequestBuilder {
    origin: Option<String>,
    request_method: Option<String>,
    request_headers: Option<String>,
}

impl PreflightRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn request_method(mut self, method: impl Into<String>) -> Self {
        self.request_method = Some(method.into());
        self
    }

    pub fn request_headers(mut self, headers: impl Into<String>) -> Self {
        self.request_headers = Some(headers.into());
        self
    }

    pub fn build(self) -> Request<()> {
        let mut builder = Request::builder().method(method::OPTIONS);
        if let Some(origin) = &self.origin {
            builder = builder.header(header::ORIGIN, origin.as_str());
        }
        if let Some(request_method) = &self.request_method {
            builder = builder.header(header::ACCESS_CONTROL_REQUEST_METHOD, request_method.as_str());
        }
        if let Some(request_headers) = &self.request_headers {
            builder = builder.header(header::ACCESS_CONTROL_REQUEST_HEADERS, request_headers.as_str());
        }
        builder.body(()).expect("valid preflight request")
    }

    pub fn kind(self, cors: &CorsEvaluator) -> RequestKind {
        cors.classify(&self.build())
    }

    pub fn evaluate(self, cors: &CorsEvaluator) -> HeaderCollection {
        cors.headers_for(&self.build())
            .expect("preflight request evaluation should succeed")
    }
}

pub fn simple_request() -> SimpleRequestBuilder {
    SimpleRequestBuilder::new()
}

pub fn preflight_request() -> PreflightRequestBuilder {
    PreflightRequestBuilder::new()
}
