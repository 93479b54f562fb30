use indexmap::{IndexMap, IndexSet};

/// Value stored under a configuration key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValue {
    Null,
    Bool(bool),
    Int(i64),
    Str(String),
    List(Vec<String>),
}

impl ConfigValue {
    pub fn is_null(&self) -> bool {
        matches!(self, ConfigValue::Null)
    }

    /// Build a list value, dropping blank and repeated entries.
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(dedup(values.into_iter().map(Into::into)))
    }

    pub(crate) fn kind(&self) -> &'static str {
        match self {
            ConfigValue::Null => "null",
            ConfigValue::Bool(_) => "bool",
            ConfigValue::Int(_) => "integer",
            ConfigValue::Str(_) => "string",
            ConfigValue::List(_) => "list",
        }
    }
}

/// Trim entries, drop blanks and keep the first occurrence of each value.
pub(crate) fn dedup<I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    values
        .into_iter()
        .filter_map(|value| {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                None
            } else if trimmed.len() == value.len() {
                Some(value)
            } else {
                Some(trimmed.to_owned())
            }
        })
        .collect::<IndexSet<_>>()
        .into_iter()
        .collect()
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ConfigValue {
                fn from(value: $ty) -> Self {
                    Self::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for ConfigValue {
    fn from(value: u64) -> Self {
        Self::Int(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl<S: Into<String>> From<Vec<S>> for ConfigValue {
    fn from(values: Vec<S>) -> Self {
        Self::list(values)
    }
}

impl<S: Into<String> + Clone> From<&[S]> for ConfigValue {
    fn from(values: &[S]) -> Self {
        Self::list(values.iter().cloned())
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for ConfigValue {
    fn from(values: [S; N]) -> Self {
        Self::list(values)
    }
}

impl<T: Into<ConfigValue>> From<Option<T>> for ConfigValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Ordered key/value mapping a [`PolicyConfiguration`](crate::PolicyConfiguration)
/// is built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigMap {
    entries: IndexMap<String, ConfigValue>,
}

impl ConfigMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.entries.get(key)
    }

    /// Store `value` under `key`, replacing anything already there.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ConfigValue>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Fold `value` into the entry for `key`.
    ///
    /// Two lists are concatenated without repeats; any other combination keeps
    /// the incoming value.
    pub fn merge(&mut self, key: impl Into<String>, value: impl Into<ConfigValue>) {
        let key = key.into();
        let value = value.into();

        if let ConfigValue::List(incoming) = &value
            && let Some(ConfigValue::List(existing)) = self.entries.get_mut(&key)
        {
            let merged = dedup(existing.drain(..).chain(incoming.iter().cloned()));
            *existing = merged;
            return;
        }

        self.entries.insert(key, value);
    }

    /// Return a copy of `self` with every entry of `other` merged in.
    #[must_use]
    pub fn merged(&self, other: &ConfigMap) -> Self {
        let mut merged = self.clone();
        for (key, value) in other.iter() {
            merged.merge(key, value.clone());
        }
        merged
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for ConfigMap
where
    K: Into<String>,
    V: Into<ConfigValue>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for ConfigMap
where
    K: Into<String>,
    V: Into<ConfigValue>,
{
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

#[cfg(test)]
#[path = "config_map_test.rs"]
mod config_map_test;
