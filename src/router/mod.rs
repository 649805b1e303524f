mod errors;
mod events;
mod options;
mod service;
mod stats;

pub use errors::{RouterError, RouterResult};
pub use events::{EventListener, RouteChange, RouterEvent};
pub use options::{MatchOrder, ReadyPolicy, RouterOptions, RouterOptionsBuilder, RouterOptionsError};
pub use service::{Router, ViewOutcome};
pub use stats::{DispatchStats, DispatchStatsSnapshot};
