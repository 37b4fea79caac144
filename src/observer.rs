use std::fmt;

/// What changed in a `NavigationState`, carrying the post-mutation value.
///
/// Delivered to subscribers synchronously at the end of each mutating
/// operation, so a rendering layer can re-draw the stack or the sheet.
pub enum NavigationChange<'a, D, S> {
    /// The navigation path changed. Holds the whole new path, root first.
    Path(&'a [D]),
    /// The presented sheet changed. `None` means the sheet was dismissed.
    Sheet(Option<&'a S>),
}

impl<D: fmt::Debug, S: fmt::Debug> fmt::Debug for NavigationChange<'_, D, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationChange::Path(path) => f.debug_tuple("Path").field(path).finish(),
            NavigationChange::Sheet(sheet) => f.debug_tuple("Sheet").field(sheet).finish(),
        }
    }
}

/// Callback type for navigation change notifications.
pub type ChangeHandler<D, S> = Box<dyn for<'a> FnMut(&NavigationChange<'a, D, S>) + Send>;

/// Unique handle for a subscription, returned by `NavigationState::subscribe()`.
///
/// Use this to unsubscribe later via `NavigationState::unsubscribe()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);

struct HandlerEntry<D, S> {
    id: SubscriptionId,
    handler: ChangeHandler<D, S>,
}

/// Ordered set of change handlers owned by one `NavigationState`.
pub(crate) struct Observers<D, S> {
    entries: Vec<HandlerEntry<D, S>>,
    /// Monotonic counter for subscription IDs.
    next_id: u64,
}

impl<D, S> Observers<D, S> {
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    pub(crate) fn subscribe<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: for<'a> FnMut(&NavigationChange<'a, D, S>) + Send + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push(HandlerEntry {
            id,
            handler: Box::new(handler),
        });
        id
    }

    /// Returns `true` if a handler with this ID was registered.
    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    /// Call every handler in subscription order.
    pub(crate) fn notify(&mut self, change: &NavigationChange<'_, D, S>) {
        for entry in &mut self.entries {
            (entry.handler)(change);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    type TestObservers = Observers<u32, &'static str>;

    // ========================================================================
    // Subscribe / unsubscribe
    // ========================================================================

    #[test]
    fn subscription_ids_are_unique() {
        let mut observers = TestObservers::new();
        let a = observers.subscribe(|_| {});
        let b = observers.subscribe(|_| {});
        assert_ne!(a, b);
        assert_eq!(observers.len(), 2);
    }

    #[test]
    fn unsubscribe_removes_only_that_handler() {
        let mut observers = TestObservers::new();
        let a = observers.subscribe(|_| {});
        let _b = observers.subscribe(|_| {});

        assert!(observers.unsubscribe(a));
        assert_eq!(observers.len(), 1);
        assert!(!observers.unsubscribe(a)); // already gone
    }

    // ========================================================================
    // Notify
    // ========================================================================

    #[test]
    fn notify_calls_handlers_in_order() {
        let mut observers = TestObservers::new();
        let order = Arc::new(Mutex::new(Vec::<u32>::new()));
        let o1 = order.clone();
        let o2 = order.clone();

        observers.subscribe(move |_| o1.lock().unwrap().push(1));
        observers.subscribe(move |_| o2.lock().unwrap().push(2));

        observers.notify(&NavigationChange::Path(&[7]));
        assert_eq!(*order.lock().unwrap(), vec![1, 2]);
    }

    #[test]
    fn notify_passes_change() {
        let mut observers = TestObservers::new();
        let seen = Arc::new(Mutex::new(Vec::<String>::new()));
        let seen_c = seen.clone();

        observers.subscribe(move |change| {
            seen_c.lock().unwrap().push(format!("{:?}", change));
        });

        observers.notify(&NavigationChange::Path(&[1, 2]));
        observers.notify(&NavigationChange::Sheet(Some(&"settings")));
        observers.notify(&NavigationChange::Sheet(None));

        assert_eq!(
            *seen.lock().unwrap(),
            vec!["Path([1, 2])", "Sheet(Some(\"settings\"))", "Sheet(None)"]
        );
    }

    #[test]
    fn handlers_can_keep_state() {
        let mut observers = TestObservers::new();
        let total = Arc::new(Mutex::new(0usize));
        let total_c = total.clone();
        let mut calls = 0usize;

        observers.subscribe(move |_| {
            calls += 1;
            *total_c.lock().unwrap() = calls;
        });

        observers.notify(&NavigationChange::Sheet(None));
        observers.notify(&NavigationChange::Sheet(None));
        assert_eq!(*total.lock().unwrap(), 2);
    }
}
