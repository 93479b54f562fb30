pub mod header {
    pub const ACCESS_CONTROL_ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
    pub const ACCESS_CONTROL_ALLOW_METHODS: &str = "Access-Control-Allow-Methods";
    pub const ACCESS_CONTROL_ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";
    pub const ACCESS_CONTROL_ALLOW_CREDENTIALS: &str = "Access-Control-Allow-Credentials";
    pub const ACCESS_CONTROL_EXPOSE_HEADERS: &str = "Access-Control-Expose-Headers";
    pub const ACCESS_CONTROL_MAX_AGE: &str = "Access-Control-Max-Age";
    pub const ACCESS_CONTROL_REQUEST_HEADERS: &str = "Access-Control-Request-Headers";
    pub const ACCESS_CONTROL_REQUEST_METHOD: &str = "Access-Control-Request-Method";
    pub const ORIGIN: &str = "Origin";
    pub const VARY: &str = "Vary";

    /// Every header the evaluator may write to a response.
    pub const RESPONSE_HEADERS: [&str; 7] = [
        ACCESS_CONTROL_ALLOW_ORIGIN,
        ACCESS_CONTROL_ALLOW_METHODS,
        ACCESS_CONTROL_ALLOW_HEADERS,
        ACCESS_CONTROL_ALLOW_CREDENTIALS,
        ACCESS_CONTROL_EXPOSE_HEADERS,
        ACCESS_CONTROL_MAX_AGE,
        VARY,
    ];
}

pub mod method {
    pub const DELETE: &str = "DELETE";
    pub const GET: &str = "GET";
    pub const OPTIONS: &str = "OPTIONS";
    pub const POST: &str = "POST";
    pub const PUT: &str = "PUT";
}

/// Keys recognized in a configuration mapping.
pub mod config {
    pub const ALLOWED_HOSTS: &str = "allowed_hosts";
    pub const ALLOWED_METHODS: &str = "allowed_methods";
    pub const ALLOWED_HEADERS: &str = "allowed_headers";
    pub const ALLOWED_CREDENTIALS: &str = "allowed_credentials";
    pub const EXPOSED_HEADERS: &str = "exposed_headers";
    pub const MAX_AGE: &str = "max_age";
}

pub const WILDCARD: &str = "*";
