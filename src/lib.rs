//! CORS policy evaluation for HTTP interceptors.
//!
//! A [`CorsEvaluator`] owns an immutable [`PolicyConfiguration`] and decorates
//! responses with the `Access-Control-*` headers a browser expects. Requests
//! and responses are reached through the [`ReadableRequest`] and
//! [`MutableResponse`] traits, so any host server can plug in.

#[cfg(feature = "http")]
mod adapters;
mod builder;
mod config_map;
mod configuration;
pub mod constants;
mod context;
mod error;
mod evaluator;
mod header_builder;
mod headers;
mod message;
pub mod wildcard;

pub use builder::ConfigurationBuilder;
pub use config_map::{ConfigMap, ConfigValue};
pub use configuration::{DEFAULT_HEADERS, DEFAULT_METHODS, OriginList, PolicyConfiguration};
pub use context::RequestContext;
pub use error::CorsError;
pub use evaluator::{CorsEvaluator, RequestKind};
pub use headers::HeaderCollection;
pub use message::{MutableResponse, ReadableRequest};
pub use wildcard::{OriginPattern, PatternError};
