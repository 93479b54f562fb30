use crate::error::CorsError;
use crate::message::MutableResponse;
use indexmap::IndexMap;
use indexmap::map::Entry;
use std::borrow::Cow;

/// Insertion-ordered header set with case-insensitive names.
///
/// Serves as a host-neutral [`MutableResponse`] and as the result type of
/// [`CorsEvaluator::headers_for`](crate::CorsEvaluator::headers_for).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HeaderCollection {
    // keyed by lower-cased name; value keeps the name as first written
    headers: IndexMap<String, (String, String)>,
}

impl HeaderCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.headers.contains_key(&name.to_ascii_lowercase())
    }

    pub fn insert(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.headers.entry(name.to_ascii_lowercase()) {
            Entry::Occupied(mut entry) => entry.get_mut().1 = value,
            Entry::Vacant(entry) => {
                entry.insert((name.to_owned(), value));
            }
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.headers
            .shift_remove(&name.to_ascii_lowercase())
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Iterate `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers
            .values()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl MutableResponse for HeaderCollection {
    fn header(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(Cow::Borrowed)
    }

    fn with_header(mut self, name: &str, value: &str) -> Result<Self, CorsError> {
        if name.is_empty() || !name.bytes().all(is_token_byte) {
            return Err(CorsError::invalid_name(name));
        }
        if value.bytes().any(|byte| matches!(byte, b'\r' | b'\n' | b'\0')) {
            return Err(CorsError::invalid_value(name, value));
        }
        self.insert(name, value);
        Ok(self)
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for HeaderCollection {
    fn from_iter<T: IntoIterator<Item = (&'a str, &'a str)>>(iter: T) -> Self {
        let mut collection = Self::new();
        for (name, value) in iter {
            collection.insert(name, value);
        }
        collection
    }
}

fn is_token_byte(byte: u8) -> bool {
    matches!(
        byte,
        b'0'..=b'9'
            | b'A'..=b'Z'
            | b'a'..=b'z'
            | b'!'
            | b'#'
            | b'$'
            | b'%'
            | b'&'
            | b'\''
            | b'*'
            | b'+'
            | b'-'
            | b'.'
            | b'^'
            | b'_'
            | b'`'
            | b'|'
            | b'~'
    )
}

/// Append `entry` to an existing `Vary` value.
///
/// Entries are compared case-insensitively; an entry already present is not
/// repeated, so the result is stable under repeated application.
pub(crate) fn append_vary(existing: Option<&str>, entry: &str) -> String {
    let mut entries: Vec<&str> = Vec::new();
    let incoming = existing
        .into_iter()
        .flat_map(|value| value.split(','))
        .chain(std::iter::once(entry));

    for part in incoming.map(str::trim).filter(|part| !part.is_empty()) {
        if entries
            .iter()
            .any(|known| known.eq_ignore_ascii_case(part))
        {
            continue;
        }
        entries.push(part);
    }

    entries.join(", ")
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
