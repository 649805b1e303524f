use std::sync::Arc;

use super::{RouteArgs, extract_params};
use crate::pattern::{RoutePattern, pattern_rank};
use crate::registry::RouteEntry;
use crate::router::MatchOrder;
use crate::types::QueryMap;

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub entry: Arc<RouteEntry>,
    pub args: RouteArgs,
}

/// Picks the single entry that accepts `segments`, ranked by `order`.
///
/// The query mapping is attached by the caller through [`MatchResult::with_query`].
#[tracing::instrument(level = "trace", skip(entries, segments), fields(entries = entries.len() as u64, depth = segments.len() as u64))]
pub fn find_route<S: AsRef<str>>(
    entries: &[Arc<RouteEntry>],
    segments: &[S],
    order: MatchOrder,
) -> Option<MatchResult> {
    let best = entries
        .iter()
        .filter(|entry| entry.pattern().len() == segments.len())
        .filter(|entry| accepts(entry.pattern(), segments))
        .max_by_key(|entry| pattern_rank(entry.pattern(), entry.id(), order))?;

    let params = extract_params(best.pattern(), segments);
    tracing::trace!(
        route = best.definition(),
        id = best.id(),
        params = params.len() as u64,
        "route matched"
    );

    Some(MatchResult {
        entry: best.clone(),
        args: RouteArgs::new(params, QueryMap::new()),
    })
}

fn accepts<S: AsRef<str>>(pattern: &RoutePattern, segments: &[S]) -> bool {
    pattern
        .segments()
        .iter()
        .zip(segments.iter())
        .all(|(seg, value)| seg.accepts(value.as_ref()))
}

impl MatchResult {
    pub fn with_query(mut self, query: Option<QueryMap>) -> Self {
        self.args.set_query(query.unwrap_or_default());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::{DEFAULT_PARAM_MARKER, compile_pattern};
    use crate::registry::{Handler, RouteTable};

    fn table(definitions: &[&str]) -> RouteTable {
        let mut table = RouteTable::new();
        for def in definitions {
            let handler: Handler = Arc::new(|_: &RouteArgs| {});
            table.add(compile_pattern(def, DEFAULT_PARAM_MARKER).unwrap(), handler);
        }
        table
    }

    fn matched(table: &RouteTable, path: &[&str], order: MatchOrder) -> Option<String> {
        find_route(table.all(), path, order).map(|m| m.entry.definition().to_string())
    }

    #[test]
    fn only_patterns_with_equal_arity_match() {
        let t = table(&["a", "a/:x", "a/:x/:y"]);
        assert_eq!(matched(&t, &["a"], MatchOrder::SpecificFirst).as_deref(), Some("a"));
        assert_eq!(matched(&t, &["a", "1"], MatchOrder::SpecificFirst).as_deref(), Some("a/:x"));
        assert_eq!(
            matched(&t, &["a", "1", "2"], MatchOrder::SpecificFirst).as_deref(),
            Some("a/:x/:y")
        );
        assert_eq!(matched(&t, &["a", "1", "2", "3"], MatchOrder::SpecificFirst), None);
    }

    #[test]
    fn fixed_segments_are_case_sensitive() {
        let t = table(&["Item/:id"]);
        assert!(matched(&t, &["item", "1"], MatchOrder::SpecificFirst).is_none());
        assert!(matched(&t, &["Item", "1"], MatchOrder::SpecificFirst).is_some());
    }

    #[test]
    fn specific_first_prefers_more_fixed_segments() {
        let t = table(&["item/:id", ":kind/:id", "item/new"]);
        assert_eq!(
            matched(&t, &["item", "new"], MatchOrder::SpecificFirst).as_deref(),
            Some("item/new")
        );
        assert_eq!(
            matched(&t, &["item", "7"], MatchOrder::SpecificFirst).as_deref(),
            Some("item/:id")
        );
        assert_eq!(
            matched(&t, &["user", "7"], MatchOrder::SpecificFirst).as_deref(),
            Some(":kind/:id")
        );
    }

    #[test]
    fn equal_specificity_falls_back_to_registration_order() {
        let t = table(&["a/:x", "a/:y"]);
        let m = find_route(t.all(), &["a", "1"], MatchOrder::SpecificFirst).unwrap();
        assert_eq!(m.entry.id(), 0);
        assert_eq!(m.args.get("x"), Some("1"));
        assert_eq!(m.args.get("y"), None);
    }

    #[test]
    fn defined_first_ignores_specificity() {
        let t = table(&["item/:id", "item/new"]);
        assert_eq!(
            matched(&t, &["item", "new"], MatchOrder::DefinedFirst).as_deref(),
            Some("item/:id")
        );
    }

    #[test]
    fn extracts_params_in_pattern_order() {
        let t = table(&["org/:org/repo/:repo"]);
        let m = find_route(t.all(), &["org", "acme", "repo", "tools"], MatchOrder::SpecificFirst)
            .unwrap();
        assert_eq!(m.args.values().collect::<Vec<_>>(), vec!["acme", "tools"]);
        assert_eq!(m.args.value(1), Some("tools"));
        assert!(m.args.query().is_empty());
    }

    #[test]
    fn with_query_defaults_to_empty_mapping() {
        let t = table(&["x/:id"]);
        let m = find_route(t.all(), &["x", "1"], MatchOrder::SpecificFirst).unwrap();
        assert!(m.clone().with_query(None).args.query().is_empty());

        let mut query = QueryMap::new();
        query.insert("k".to_string(), "v".to_string());
        let m = m.with_query(Some(query.clone()));
        assert_eq!(m.args.query(), &query);
        assert_eq!(m.args.get("id"), Some("1"));
    }

    #[test]
    fn empty_table_never_matches() {
        let t = table(&[]);
        assert!(find_route(t.all(), &[] as &[&str], MatchOrder::SpecificFirst).is_none());
    }

    #[test]
    fn root_pattern_matches_empty_path() {
        let t = table(&["/", "home"]);
        assert_eq!(
            matched(&t, &[], MatchOrder::SpecificFirst).as_deref(),
            Some("/")
        );
    }
}
