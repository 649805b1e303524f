mod params;
mod resolver;

pub use params::{RouteArgs, extract_params};
pub use resolver::{MatchResult, find_route};
