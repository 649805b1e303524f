use std::fmt;
use std::sync::Arc;

use crate::matcher::RouteArgs;
use crate::pattern::RoutePattern;
use crate::types::RouteId;

pub type Handler = Arc<dyn Fn(&RouteArgs) + Send + Sync>;

pub struct RouteEntry {
    id: RouteId,
    pattern: RoutePattern,
    handler: Handler,
}

impl RouteEntry {
    /// Registration order; unique within a table.
    pub fn id(&self) -> RouteId {
        self.id
    }

    pub fn pattern(&self) -> &RoutePattern {
        &self.pattern
    }

    pub fn definition(&self) -> &str {
        self.pattern.definition()
    }

    pub fn handler(&self) -> &Handler {
        &self.handler
    }
}

impl fmt::Debug for RouteEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteEntry")
            .field("id", &self.id)
            .field("definition", &self.pattern.definition())
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Default)]
pub struct RouteTable {
    entries: Vec<Arc<RouteEntry>>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, pattern: RoutePattern, handler: Handler) -> RouteId {
        let id = self.entries.len() as RouteId;

        if let Some(existing) = self.entries.iter().find(|e| e.pattern.same_shape(&pattern)) {
            tracing::warn!(
                definition = pattern.definition(),
                existing = existing.definition(),
                existing_id = existing.id,
                "route has the same shape as an earlier registration"
            );
        }

        self.entries.push(Arc::new(RouteEntry {
            id,
            pattern,
            handler,
        }));
        id
    }

    /// Entries in registration order.
    pub fn all(&self) -> &[Arc<RouteEntry>] {
        &self.entries
    }

    pub fn get(&self, id: RouteId) -> Option<&Arc<RouteEntry>> {
        self.entries.get(id as usize)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
