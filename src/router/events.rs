use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use serde::Serialize;

use crate::matcher::RouteArgs;
use crate::types::{RouteId, SubscriptionId};

/// Payload of a completed dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteChange {
    pub route_id: RouteId,
    pub definition: String,
    pub location: String,
    pub args: RouteArgs,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", content = "detail", rename_all = "snake_case")]
pub enum RouterEvent {
    Ready,
    Changed(RouteChange),
}

pub type EventListener = Arc<dyn Fn(&RouterEvent) + Send + Sync>;

#[derive(Default)]
pub(crate) struct Subscribers {
    next_id: AtomicU64,
    listeners: RwLock<Vec<(SubscriptionId, EventListener)>>,
}

impl Subscribers {
    pub(crate) fn subscribe(&self, listener: EventListener) -> SubscriptionId {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.listeners.write().push((id, listener));
        id
    }

    pub(crate) fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.write();
        let before = listeners.len();
        listeners.retain(|(sid, _)| *sid != id);
        listeners.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.listeners.read().len()
    }

    /// Listeners run without the registry lock held, so they may subscribe,
    /// unsubscribe or navigate.
    pub(crate) fn emit(&self, event: &RouterEvent) {
        let snapshot: Vec<EventListener> = self
            .listeners
            .read()
            .iter()
            .map(|(_, l)| l.clone())
            .collect();
        for listener in snapshot {
            listener(event);
        }
    }
}
