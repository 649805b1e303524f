use serde::Serialize;

use crate::pattern::{RoutePattern, Segment};
use crate::types::{CaptureList, QueryMap};

/// Arguments handed to every route handler: the parameter values in pattern
/// order followed by the query mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RouteArgs {
    params: CaptureList,
    query: QueryMap,
}

impl RouteArgs {
    pub fn new(params: CaptureList, query: QueryMap) -> Self {
        Self { params, query }
    }

    /// Parameter values in pattern order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|(_, v)| v.as_str())
    }

    pub fn value(&self, index: usize) -> Option<&str> {
        self.params.get(index).map(|(_, v)| v.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    pub fn query(&self) -> &QueryMap {
        &self.query
    }

    pub(crate) fn set_query(&mut self, query: QueryMap) {
        self.query = query;
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

/// Pairs each parameter segment with the path segment at the same position.
/// `segments` must already have the pattern's arity.
pub fn extract_params<S: AsRef<str>>(pattern: &RoutePattern, segments: &[S]) -> CaptureList {
    pattern
        .segments()
        .iter()
        .zip(segments.iter())
        .filter_map(|(seg, value)| match seg {
            Segment::Param { name } => Some((name.clone(), value.as_ref().to_string())),
            Segment::Fixed(_) => None,
        })
        .collect()
}
