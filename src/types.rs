use hashbrown::HashMap as FastHashMap;
use smallvec::SmallVec;

pub type RouteId = u32;
pub type SubscriptionId = u64;

pub type QueryMap = FastHashMap<String, String>;

/// (name, value) pairs in pattern order.
pub type CapturedParam = (String, String);
pub type CaptureList = SmallVec<[CapturedParam; 4]>;
