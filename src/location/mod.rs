mod error;
mod host;
mod parser;
mod query;

pub use error::{LocationError, LocationResult};
pub use host::{ChangeListener, Location, MemoryLocation};
pub use parser::{
    DEFAULT_SCHEME_PREFIX, LocationOptions, ParsedLocation, parse_location, serialize_location,
};
pub use query::parse_query;
