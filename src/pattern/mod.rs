mod compiler;
mod error;
mod scoring;
mod segment;

pub use compiler::{DEFAULT_PARAM_MARKER, compile_pattern};
pub use error::{PatternError, PatternResult};
pub use scoring::{pattern_rank, pattern_score};
pub use segment::{RoutePattern, Segment};
