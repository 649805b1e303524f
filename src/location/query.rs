use memchr::memchr;

use crate::types::QueryMap;

/// Parses `k=v&k2=v2` into a map. Later keys overwrite earlier ones; a token
/// without `=` maps to an empty value. Tokens without a key are kept under
/// the empty key. An empty querystring has no pairs.
#[tracing::instrument(level = "trace", skip(querystring), fields(len = querystring.len() as u64))]
pub fn parse_query(querystring: &str) -> QueryMap {
    let mut map = QueryMap::new();
    if querystring.is_empty() {
        return map;
    }

    for token in querystring.split('&') {
        let (key, value) = match memchr(b'=', token.as_bytes()) {
            Some(pos) => (&token[..pos], &token[pos + 1..]),
            None => (token, ""),
        };

        if key.is_empty() {
            tracing::trace!(token, "query token without a key");
        }

        map.insert(key.to_string(), value.to_string());
    }

    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_pairs_on_first_equals() {
        let q = parse_query("sort=asc&expr=a=b");
        assert_eq!(q.get("sort").map(String::as_str), Some("asc"));
        assert_eq!(q.get("expr").map(String::as_str), Some("a=b"));
        assert_eq!(q.len(), 2);
    }

    #[test]
    fn last_duplicate_key_wins() {
        let q = parse_query("a=1&a=2");
        assert_eq!(q.len(), 1);
        assert_eq!(q.get("a").map(String::as_str), Some("2"));
    }

    #[test]
    fn bare_key_gets_empty_value() {
        let q = parse_query("flag&x=");
        assert_eq!(q.get("flag").map(String::as_str), Some(""));
        assert_eq!(q.get("x").map(String::as_str), Some(""));
    }

    #[test]
    fn keyless_tokens_land_under_empty_key() {
        let q = parse_query("=x&a=1");
        assert_eq!(q.get("").map(String::as_str), Some("x"));
        assert_eq!(q.get("a").map(String::as_str), Some("1"));

        // empty tokens count as keyless pairs, last one wins
        let q = parse_query("&a=1&&=orphan&");
        assert_eq!(q.len(), 2);
        assert_eq!(q.get("").map(String::as_str), Some(""));
        assert_eq!(q.get("a").map(String::as_str), Some("1"));
    }

    #[test]
    fn empty_querystring_yields_empty_map() {
        assert!(parse_query("").is_empty());
    }
}
