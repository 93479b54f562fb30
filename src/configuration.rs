use crate::config_map::{ConfigMap, ConfigValue, dedup};
use crate::constants::{WILDCARD, config, method};
use crate::wildcard::OriginPattern;
use indexmap::IndexSet;
use tracing::{debug, warn};

/// Methods announced on preflight when no `allowed_methods` are configured.
pub const DEFAULT_METHODS: [&str; 5] = [
    method::GET,
    method::POST,
    method::PUT,
    method::DELETE,
    method::OPTIONS,
];

/// Headers announced on preflight when no `allowed_headers` are configured.
pub const DEFAULT_HEADERS: [&str; 7] = [
    "X-Requested-With",
    "Content-Type",
    "Accept",
    "Origin",
    "Authorization",
    "Application",
    "Cache-Control",
];

/// Allowed origins, kept in configuration order and precompiled for matching.
///
/// Never empty: an empty input yields the single entry `*`.
#[derive(Clone, Debug)]
pub struct OriginList {
    patterns: Vec<OriginPattern>,
    allows_any: bool,
}

impl OriginList {
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut entries = dedup(values.into_iter().map(Into::into));
        if entries.is_empty() {
            entries.push(WILDCARD.to_owned());
        }

        let allows_any = entries.iter().any(|entry| entry == WILDCARD);
        let patterns = entries
            .into_iter()
            .map(|entry| match OriginPattern::compile(entry.as_str()) {
                Ok(pattern) => pattern,
                Err(err) => {
                    warn!(pattern = %entry, error = %err, "origin pattern falls back to exact matching");
                    OriginPattern::literal(entry)
                }
            })
            .collect();

        Self {
            patterns,
            allows_any,
        }
    }

    pub fn any() -> Self {
        Self::new([WILDCARD])
    }

    /// Whether the literal `*` entry is configured.
    pub fn allows_any(&self) -> bool {
        self.allows_any
    }

    pub fn matches(&self, origin: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.matches(origin))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(OriginPattern::as_str)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl Default for OriginList {
    fn default() -> Self {
        Self::any()
    }
}

impl PartialEq for OriginList {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for OriginList {}

/// Immutable CORS policy shared by every request an evaluator handles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PolicyConfiguration {
    allowed_origins: OriginList,
    allowed_methods: IndexSet<String>,
    allowed_headers: IndexSet<String>,
    exposed_headers: IndexSet<String>,
    allow_credentials: bool,
    max_age: u64,
}

impl Default for PolicyConfiguration {
    fn default() -> Self {
        Self {
            allowed_origins: OriginList::any(),
            allowed_methods: DEFAULT_METHODS.iter().map(|&m| m.to_owned()).collect(),
            allowed_headers: DEFAULT_HEADERS.iter().map(|&h| h.to_owned()).collect(),
            exposed_headers: IndexSet::new(),
            allow_credentials: true,
            max_age: 0,
        }
    }
}

type FieldMerge = fn(&mut PolicyConfiguration, &ConfigValue);

const FIELD_MERGES: [(&str, FieldMerge); 6] = [
    (config::ALLOWED_HOSTS, PolicyConfiguration::merge_allowed_hosts),
    (config::ALLOWED_METHODS, PolicyConfiguration::merge_allowed_methods),
    (config::ALLOWED_HEADERS, PolicyConfiguration::merge_allowed_headers),
    (config::ALLOWED_CREDENTIALS, PolicyConfiguration::merge_allow_credentials),
    (config::EXPOSED_HEADERS, PolicyConfiguration::merge_exposed_headers),
    (config::MAX_AGE, PolicyConfiguration::merge_max_age),
];

impl PolicyConfiguration {
    /// Build a configuration from `map`, starting from the defaults.
    ///
    /// Unknown keys and null values are skipped. A value of the wrong type
    /// leaves the default in place.
    pub fn from_map(map: &ConfigMap) -> Self {
        let mut configuration = Self::default();

        for (key, value) in map.iter() {
            if value.is_null() {
                continue;
            }

            match FIELD_MERGES.iter().find(|(name, _)| *name == key) {
                Some((_, merge)) => merge(&mut configuration, value),
                None => debug!(key, "ignoring unknown cors configuration key"),
            }
        }

        configuration
    }

    pub fn allowed_origins(&self) -> &OriginList {
        &self.allowed_origins
    }

    pub fn allowed_methods(&self) -> &IndexSet<String> {
        &self.allowed_methods
    }

    pub fn allowed_headers(&self) -> &IndexSet<String> {
        &self.allowed_headers
    }

    pub fn exposed_headers(&self) -> &IndexSet<String> {
        &self.exposed_headers
    }

    pub fn allow_credentials(&self) -> bool {
        self.allow_credentials
    }

    /// Preflight cache lifetime in seconds; `0` means the header is omitted.
    pub fn max_age(&self) -> u64 {
        self.max_age
    }

    fn merge_allowed_hosts(&mut self, value: &ConfigValue) {
        match value {
            ConfigValue::Str(host) => self.allowed_origins = OriginList::new([host.as_str()]),
            ConfigValue::List(hosts) => self.allowed_origins = OriginList::new(hosts.iter().cloned()),
            other => ignore_value(config::ALLOWED_HOSTS, other),
        }
    }

    fn merge_allowed_methods(&mut self, value: &ConfigValue) {
        if let Some(methods) = list_value(config::ALLOWED_METHODS, value) {
            self.allowed_methods = methods;
        }
    }

    fn merge_allowed_headers(&mut self, value: &ConfigValue) {
        if let Some(headers) = list_value(config::ALLOWED_HEADERS, value) {
            self.allowed_headers = headers;
        }
    }

    fn merge_exposed_headers(&mut self, value: &ConfigValue) {
        if let Some(headers) = list_value(config::EXPOSED_HEADERS, value) {
            self.exposed_headers = headers;
        }
    }

    fn merge_allow_credentials(&mut self, value: &ConfigValue) {
        match value {
            ConfigValue::Bool(enabled) => self.allow_credentials = *enabled,
            other => ignore_value(config::ALLOWED_CREDENTIALS, other),
        }
    }

    fn merge_max_age(&mut self, value: &ConfigValue) {
        match value {
            ConfigValue::Int(seconds) if *seconds < 0 => {
                warn!(max_age = seconds, "negative max_age, Access-Control-Max-Age will be omitted");
                self.max_age = 0;
            }
            ConfigValue::Int(seconds) => self.max_age = seconds.unsigned_abs(),
            other => ignore_value(config::MAX_AGE, other),
        }
    }
}

impl From<&ConfigMap> for PolicyConfiguration {
    fn from(map: &ConfigMap) -> Self {
        Self::from_map(map)
    }
}

impl From<ConfigMap> for PolicyConfiguration {
    fn from(map: ConfigMap) -> Self {
        Self::from_map(&map)
    }
}

fn list_value(key: &str, value: &ConfigValue) -> Option<IndexSet<String>> {
    match value {
        ConfigValue::List(values) => Some(dedup(values.iter().cloned()).into_iter().collect()),
        other => {
            ignore_value(key, other);
            None
        }
    }
}

fn ignore_value(key: &str, value: &ConfigValue) {
    warn!(key, kind = value.kind(), "ignoring cors configuration value of unexpected type");
}

#[cfg(test)]
#[path = "configuration_test.rs"]
mod configuration_test;
