mod store;

pub use store::{Handler, RouteEntry, RouteTable};
