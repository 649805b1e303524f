use std::cmp::Reverse;

use super::RoutePattern;
use crate::router::MatchOrder;
use crate::types::RouteId;

/// Specificity of a pattern: the number of fixed segments it pins down.
pub fn pattern_score(p: &RoutePattern) -> usize {
    p.fixed_count()
}

/// Ordering key among matching candidates; the greatest rank wins.
///
/// Registration order always breaks remaining ties, so two distinct entries
/// never share a rank.
pub fn pattern_rank(
    p: &RoutePattern,
    id: RouteId,
    order: MatchOrder,
) -> (usize, Reverse<RouteId>) {
    match order {
        MatchOrder::SpecificFirst => (pattern_score(p), Reverse(id)),
        MatchOrder::DefinedFirst => (0, Reverse(id)),
    }
}
