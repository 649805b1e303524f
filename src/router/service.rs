use crate::location::{Location, LocationOptions, parse_location};
use crate::matcher::{MatchResult, RouteArgs, find_route};
use crate::pattern::compile_pattern;
use crate::registry::RouteTable;
use crate::router::events::Subscribers;
use crate::router::{
    DispatchStats, DispatchStatsSnapshot, ReadyPolicy, RouteChange, RouterError, RouterEvent,
    RouterOptions, RouterResult,
};
use crate::types::{RouteId, SubscriptionId};
use parking_lot::{Mutex, RwLock};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

/// What a single `Router::view` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewOutcome {
    /// The handler ran and `RouterEvent::Changed` was emitted.
    Dispatched(RouteId),
    /// The location matched but equals the last dispatched one.
    ///
    /// When navigating to a target already dispatched by a change listener
    /// during that same call, the outcome is `Dispatched` instead.
    Unchanged(RouteId),
    NoMatch,
    /// The location does not carry the routing prefix.
    NotRouted,
}

/// Matches locations against registered routes and dispatches each distinct
/// location to its handler once.
///
/// No lock is held while handlers or event listeners run, so both may call
/// back into the router (navigate, register, subscribe).
pub struct Router {
    options: RouterOptions,
    location_options: LocationOptions,
    location: Arc<dyn Location>,
    table: RwLock<RouteTable>,
    last_dispatched: Mutex<Option<String>>,
    subscribers: Subscribers,
    stats: DispatchStats,
    active: AtomicBool,
}

impl Router {
    pub fn new(location: Arc<dyn Location>, options: Option<RouterOptions>) -> RouterResult<Self> {
        let options = options.unwrap_or_default();
        options.validate()?;

        Ok(Self {
            location_options: options.location_options(),
            options,
            location,
            table: RwLock::new(RouteTable::new()),
            last_dispatched: Mutex::new(None),
            subscribers: Subscribers::default(),
            stats: DispatchStats::default(),
            active: AtomicBool::new(false),
        })
    }

    pub fn route<F>(&self, definition: &str, handler: F) -> RouterResult<RouteId>
    where
        F: Fn(&RouteArgs) + Send + Sync + 'static,
    {
        let pattern = compile_pattern(definition, self.options.param_marker)?;
        let id = self.table.write().add(pattern, Arc::new(handler));
        tracing::debug!(definition, id, "route registered");

        if self.options.ready_policy == ReadyPolicy::OnRegister {
            self.subscribers.emit(&RouterEvent::Ready);
            // once initialized, a new route may claim the current location
            if self.active.load(Ordering::Acquire) {
                self.view(None);
            }
        }

        Ok(id)
    }

    /// Announces readiness and dispatches the current location. Afterwards,
    /// under `ReadyPolicy::OnRegister`, each registration re-dispatches the
    /// current location.
    pub fn initialize(&self) -> ViewOutcome {
        self.active.store(true, Ordering::Release);
        self.subscribers.emit(&RouterEvent::Ready);
        self.view(None)
    }

    /// Binds `view` to the location's change notifications, then initializes.
    pub fn listen(self: &Arc<Self>) -> ViewOutcome {
        let weak: Weak<Router> = Arc::downgrade(self);
        self.location.on_change(Arc::new(move || {
            if let Some(router) = weak.upgrade() {
                router.view(None);
            }
        }));
        self.initialize()
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub fn view(&self, target: Option<&str>) -> ViewOutcome {
        let mut dispatched_before = None;
        if let Some(target) = target.filter(|t| !t.is_empty()) {
            dispatched_before = Some(self.stats.snapshot().dispatched);
            self.location.navigate(target);
        }

        let raw = self.location.current();
        let parsed = match parse_location(&raw, &self.location_options) {
            Ok(parsed) => parsed,
            Err(err) => {
                tracing::debug!(%err, "ignoring location");
                self.stats.record_unrouted();
                return ViewOutcome::NotRouted;
            }
        };

        let found = {
            let table = self.table.read();
            find_route(table.all(), parsed.segments.as_slice(), self.options.match_order)
        };
        let Some(found) = found else {
            tracing::debug!(location = %raw, "no route matched");
            self.stats.record_unmatched();
            return ViewOutcome::NoMatch;
        };

        let id = found.entry.id();
        {
            let mut last = self.last_dispatched.lock();
            if last.as_deref() == Some(raw.as_str()) {
                // a change listener may have dispatched the target during navigate
                if dispatched_before.is_some_and(|n| self.stats.snapshot().dispatched > n) {
                    return ViewOutcome::Dispatched(id);
                }
                self.stats.record_unchanged();
                return ViewOutcome::Unchanged(id);
            }
            // recorded before the handler runs so a re-entrant view sees it
            *last = Some(raw.clone());
        }

        let found = found.with_query(parsed.query);
        tracing::debug!(location = %raw, route = found.entry.definition(), id, "dispatching");
        (found.entry.handler())(&found.args);
        self.stats.record_dispatch();

        self.subscribers.emit(&RouterEvent::Changed(RouteChange {
            route_id: id,
            definition: found.entry.definition().to_string(),
            location: raw,
            args: found.args,
        }));

        ViewOutcome::Dispatched(id)
    }

    /// Matches `location` without dispatching or touching router state.
    pub fn resolve(&self, location: &str) -> RouterResult<MatchResult> {
        let parsed = parse_location(location, &self.location_options)?;
        let table = self.table.read();

        match find_route(table.all(), parsed.segments.as_slice(), self.options.match_order) {
            Some(found) => Ok(found.with_query(parsed.query)),
            None => Err(RouterError::RouteNotFound {
                location: location.to_string(),
            }),
        }
    }

    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&RouterEvent) + Send + Sync + 'static,
    {
        self.subscribers.subscribe(Arc::new(listener))
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    pub fn last_dispatched(&self) -> Option<String> {
        self.last_dispatched.lock().clone()
    }

    pub fn route_count(&self) -> usize {
        self.table.read().len()
    }

    pub fn options(&self) -> &RouterOptions {
        &self.options
    }

    pub fn location(&self) -> &Arc<dyn Location> {
        &self.location
    }

    pub fn stats(&self) -> DispatchStatsSnapshot {
        self.stats.snapshot()
    }
}

impl std::fmt::Debug for Router {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("options", &self.options)
            .field("routes", &self.table.read().len())
            .field("last_dispatched", &*self.last_dispatched.lock())
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}
