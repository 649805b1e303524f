use memchr::memchr;
use serde::Serialize;

use super::parse_query;
use crate::location::{LocationError, LocationResult};
use crate::types::QueryMap;

pub const DEFAULT_SCHEME_PREFIX: &str = "#!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationOptions {
    pub scheme_prefix: String,
}

impl Default for LocationOptions {
    fn default() -> Self {
        Self {
            scheme_prefix: DEFAULT_SCHEME_PREFIX.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedLocation {
    pub raw: String,
    pub segments: Vec<String>,
    /// `None` when the location carried no `?` at all.
    pub query: Option<QueryMap>,
}

#[inline]
#[tracing::instrument(level = "trace", skip(options), fields(raw = %raw))]
pub fn parse_location(raw: &str, options: &LocationOptions) -> LocationResult<ParsedLocation> {
    let (path, querystring) = match memchr(b'?', raw.as_bytes()) {
        Some(pos) => (&raw[..pos], Some(&raw[pos + 1..])),
        None => (raw, None),
    };

    let Some(path) = path.strip_prefix(options.scheme_prefix.as_str()) else {
        return Err(LocationError::MissingScheme {
            raw: raw.to_string(),
            prefix: options.scheme_prefix.clone(),
        });
    };

    let segments = path
        .split('/')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    Ok(ParsedLocation {
        raw: raw.to_string(),
        segments,
        query: querystring.map(parse_query),
    })
}

/// Rebuilds a canonical location string. Query pairs are emitted sorted by key
/// so equal locations serialize identically.
pub fn serialize_location(location: &ParsedLocation, options: &LocationOptions) -> String {
    let mut out = String::with_capacity(location.raw.len().max(16));
    out.push_str(&options.scheme_prefix);
    out.push('/');
    out.push_str(&location.segments.join("/"));

    if let Some(query) = &location.query {
        out.push('?');
        let mut pairs: Vec<(&String, &String)> = query.iter().collect();
        pairs.sort();
        for (idx, (key, value)) in pairs.into_iter().enumerate() {
            if idx > 0 {
                out.push('&');
            }
            out.push_str(key);
            out.push('=');
            out.push_str(value);
        }
    }

    out
}
