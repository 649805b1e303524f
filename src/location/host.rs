use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

pub type ChangeListener = Arc<dyn Fn() + Send + Sync>;

/// The host's location storage.
///
/// `navigate` requests a change; implementations that can observe changes
/// should invoke every listener registered through `on_change` afterwards.
pub trait Location: Send + Sync {
    fn current(&self) -> String;

    fn navigate(&self, target: &str);

    fn on_change(&self, listener: ChangeListener) {
        let _ = listener;
    }
}

/// In-process location that records every location it has held.
#[derive(Default)]
pub struct MemoryLocation {
    current: RwLock<String>,
    history: RwLock<Vec<String>>,
    listeners: Mutex<Vec<ChangeListener>>,
}

impl MemoryLocation {
    pub fn new(initial: impl Into<String>) -> Self {
        let initial = initial.into();
        Self {
            current: RwLock::new(initial.clone()),
            history: RwLock::new(vec![initial]),
            listeners: Mutex::new(Vec::new()),
        }
    }

    /// Same as `navigate`; reads better from host code that owns the location.
    pub fn set(&self, target: &str) {
        self.navigate(target);
    }

    pub fn history(&self) -> Vec<String> {
        self.history.read().clone()
    }

    fn notify(&self) {
        // listeners may navigate again
        let listeners: Vec<ChangeListener> = self.listeners.lock().clone();
        for listener in listeners {
            listener();
        }
    }
}

impl Location for MemoryLocation {
    fn current(&self) -> String {
        self.current.read().clone()
    }

    fn navigate(&self, target: &str) {
        *self.current.write() = target.to_string();
        self.history.write().push(target.to_string());
        self.notify();
    }

    fn on_change(&self, listener: ChangeListener) {
        self.listeners.lock().push(listener);
    }
}

impl std::fmt::Debug for MemoryLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryLocation")
            .field("current", &*self.current.read())
            .field("history_len", &self.history.read().len())
            .field("listeners", &self.listeners.lock().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn navigate_records_history_and_notifies() {
        let location = MemoryLocation::new("#!/");
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        location.on_change(Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        location.navigate("#!/a");
        location.set("#!/b");

        assert_eq!(location.current(), "#!/b");
        assert_eq!(location.history(), vec!["#!/", "#!/a", "#!/b"]);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn default_starts_empty() {
        let location = MemoryLocation::default();
        assert_eq!(location.current(), "");
        assert!(location.history().is_empty());
    }
}
