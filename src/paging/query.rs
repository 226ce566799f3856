//! Minimal query-string codec.
//!
//! Parameters keep their order of appearance so that updating `page`
//! in `?tab=active&page=2` leaves the rest of the URL recognizable.
//! Values are kept verbatim: the admin API takes plain numeric and
//! word parameters, so nothing here percent-encodes.

/// Split a query string into ordered key/value pairs.
///
/// Accepts the string with or without its leading `?`. A parameter
/// without `=` gets an empty value; empty segments are skipped.
pub fn parse(search: &str) -> Vec<(String, String)> {
    let search = search.strip_prefix('?').unwrap_or(search);
    search
        .split('&')
        .filter(|part| !part.is_empty())
        .map(|part| match part.split_once('=') {
            Some((key, value)) => (key.to_string(), value.to_string()),
            None => (part.to_string(), String::new()),
        })
        .collect()
}

/// Join pairs back into a query string, without a leading `?`.
pub fn serialize(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| {
            if value.is_empty() {
                key.clone()
            } else {
                format!("{}={}", key, value)
            }
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// First value recorded for `key`, if any.
pub fn get<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(existing, _)| existing == key)
        .map(|(_, value)| value.as_str())
}

/// Replace or append `params` in `search`, preserving every other
/// parameter and the overall ordering.
pub fn upsert(search: &str, params: &[(String, String)]) -> String {
    let mut pairs = parse(search);
    for (key, value) in params {
        match pairs.iter_mut().find(|(existing, _)| existing == key) {
            Some(pair) => pair.1 = value.clone(),
            None => pairs.push((key.clone(), value.clone())),
        }
    }
    serialize(&pairs)
}
