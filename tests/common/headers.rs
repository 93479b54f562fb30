use cors_policy::HeaderCollection;
use cors_policy::constants::header;
use std::collections::HashSet;

pub fn header_value<'a>(headers: &'a HeaderCollection, name: &str) -> Option<&'a str> {
    headers.get(name)
}

pub fn has_header(headers: &HeaderCollection, name: &str) -> bool {
    headers.contains(name)
}

pub fn vary_values(headers: &HeaderCollection) -> HashSet<String> {
    header_value(headers, header::VARY)
        .map(|value| {
            value
                .split(',')
                .map(|part| part.trim().to_string())
                .filter(|part| !part.is_empty())
                .collect::<HashSet<_>>()
        })
        .unwrap_or_default()
}
