//! Hash-fragment route matching and dispatch.
//!
//! Routes such as `item/:id` are compiled into segment patterns; locations such
//! as `#!/item/42?sort=asc` are parsed, matched against the registered routes,
//! and dispatched to the matching handler once per distinct location.
//!
//! ```
//! use hash_router_rs::{MemoryLocation, Router};
//! use std::sync::Arc;
//!
//! let location = Arc::new(MemoryLocation::new("#!/"));
//! let router = Router::new(location, None).unwrap();
//! router
//!     .route("item/:id", |args| assert_eq!(args.get("id"), Some("42")))
//!     .unwrap();
//! router.view(Some("#!/item/42"));
//! ```

pub mod location;
pub mod matcher;
pub mod pattern;
pub mod registry;
pub mod router;
pub mod types;

pub use location::{Location, MemoryLocation, ParsedLocation};
pub use matcher::{MatchResult, RouteArgs};
pub use router::{
    MatchOrder, ReadyPolicy, RouteChange, Router, RouterError, RouterEvent, RouterOptions,
    RouterOptionsBuilder, RouterOptionsError, RouterResult, ViewOutcome,
};
pub use types::{QueryMap, RouteId, SubscriptionId};
