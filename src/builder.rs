use crate::config_map::{ConfigMap, ConfigValue};
use crate::configuration::PolicyConfiguration;
use crate::constants::{WILDCARD, config};
use indexmap::IndexSet;

/// Fluent construction of a configuration mapping.
///
/// The mapping starts permissive: every list is `*`, credentials are on and
/// `max_age` is 0. The first call to a list setter replaces the seeded `*`;
/// later calls for the same list accumulate, so calling `with_hosts` twice
/// allows both sets of hosts.
///
/// Each call consumes the builder and returns the updated one, so a cloned
/// builder never observes changes made through another clone.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct ConfigurationBuilder {
    pending: ConfigMap,
    // list keys set by the caller rather than seeded
    assigned: IndexSet<&'static str>,
}

impl ConfigurationBuilder {
    pub fn new() -> Self {
        Self {
            pending: seed(),
            assigned: IndexSet::new(),
        }
    }

    pub fn with_hosts<I, S>(self, hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.merge_list(config::ALLOWED_HOSTS, hosts)
    }

    pub fn with_headers<I, S>(self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.merge_list(config::ALLOWED_HEADERS, headers)
    }

    pub fn with_methods<I, S>(self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.merge_list(config::ALLOWED_METHODS, methods)
    }

    pub fn with_exposed_headers<I, S>(self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.merge_list(config::EXPOSED_HEADERS, headers)
    }

    /// Enable credentials. The builder offers no way to turn them back off;
    /// use a [`ConfigMap`] with `allowed_credentials = false` for that.
    pub fn with_credentials(mut self) -> Self {
        self.pending.insert(config::ALLOWED_CREDENTIALS, true);
        self
    }

    pub fn with_max_age(mut self, seconds: u64) -> Self {
        self.pending.insert(config::MAX_AGE, seconds);
        self
    }

    /// The mapping accumulated so far.
    #[must_use]
    pub fn to_map(&self) -> ConfigMap {
        self.pending.clone()
    }

    #[must_use]
    pub fn into_map(self) -> ConfigMap {
        self.pending
    }

    #[must_use]
    pub fn build(self) -> PolicyConfiguration {
        PolicyConfiguration::from_map(&self.pending)
    }

    fn merge_list<I, S>(mut self, key: &'static str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values = ConfigValue::list(values);
        if self.assigned.insert(key) {
            self.pending.insert(key, values);
        } else {
            self.pending.merge(key, values);
        }
        self
    }
}

impl Default for ConfigurationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn seed() -> ConfigMap {
    ConfigMap::from([
        (config::ALLOWED_HOSTS, ConfigValue::list([WILDCARD])),
        (config::ALLOWED_HEADERS, ConfigValue::list([WILDCARD])),
        (config::ALLOWED_CREDENTIALS, ConfigValue::from(true)),
        (config::EXPOSED_HEADERS, ConfigValue::list([WILDCARD])),
        (config::ALLOWED_METHODS, ConfigValue::list([WILDCARD])),
        (config::MAX_AGE, ConfigValue::from(0)),
    ])
}

impl From<ConfigurationBuilder> for ConfigMap {
    fn from(builder: ConfigurationBuilder) -> Self {
        builder.into_map()
    }
}

impl From<ConfigurationBuilder> for PolicyConfiguration {
    fn from(builder: ConfigurationBuilder) -> Self {
        builder.build()
    }
}

#[cfg(test)]
#[path = "builder_test.rs"]
mod builder_test;
