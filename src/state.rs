use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::error::NavigateError;
use crate::observer::{NavigationChange, Observers, SubscriptionId};
use crate::router::UrlRouter;

/// Navigation state for one single-stack navigation scope.
///
/// - `path` — the navigation stack, root first. The last element is the
///   visible screen.
/// - `presented_sheet` — the modal on top of the stack, if any.
///
/// The two never constrain each other: a sheet can be presented at any
/// depth. Every mutation goes through `&mut self`, and subscribers are
/// notified synchronously once the state has changed.
///
/// # Examples
///
/// ```ignore
/// let mut nav = NavigationState::<Screen, Modal>::new();
/// nav.subscribe(|change| println!("{:?}", change));
///
/// nav.navigate_to(Screen::Users);
/// nav.navigate_to(Screen::User(42));
/// nav.present_sheet(Modal::Compose);
///
/// // Deep link: replaces the whole stack.
/// nav.navigate_str(&SegmentRouter::new(), "myapp://settings");
/// ```
pub struct NavigationState<D, S> {
    path: Vec<D>,
    presented_sheet: Option<S>,
    observers: Observers<D, S>,
}

/// Owned copy of a `NavigationState`, for handing to a rendering layer
/// that lives across an FFI or IPC boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationSnapshot<D, S> {
    pub path: Vec<D>,
    pub presented_sheet: Option<S>,
}

impl<D, S> NavigationState<D, S> {
    /// Create a state with an empty path and no sheet.
    pub fn new() -> Self {
        Self {
            path: Vec::new(),
            presented_sheet: None,
            observers: Observers::new(),
        }
    }

    // ====================================================================
    // Read
    // ====================================================================

    /// The navigation path, root first.
    pub fn path(&self) -> &[D] {
        &self.path
    }

    /// The visible destination, or `None` when showing the root.
    pub fn top(&self) -> Option<&D> {
        self.path.last()
    }

    pub fn depth(&self) -> usize {
        self.path.len()
    }

    pub fn is_at_root(&self) -> bool {
        self.path.is_empty()
    }

    pub fn presented_sheet(&self) -> Option<&S> {
        self.presented_sheet.as_ref()
    }

    pub fn is_sheet_presented(&self) -> bool {
        self.presented_sheet.is_some()
    }

    // ====================================================================
    // Stack
    // ====================================================================

    /// Clear the path, back to the root.
    pub fn pop_to_root(&mut self) {
        if self.path.is_empty() {
            return;
        }
        debug!("NavigationState: pop to root from depth {}", self.path.len());
        self.path.clear();
        self.notify_path();
    }

    /// Remove the visible destination and return it.
    ///
    /// Popping an empty path is a no-op and returns `None`.
    pub fn pop_navigation(&mut self) -> Option<D> {
        let popped = self.path.pop()?;
        debug!("NavigationState: pop, depth now {}", self.path.len());
        self.notify_path();
        Some(popped)
    }

    /// Push a destination. The same destination may appear more than once.
    pub fn navigate_to(&mut self, destination: D) {
        self.path.push(destination);
        debug!("NavigationState: push, depth now {}", self.path.len());
        self.notify_path();
    }

    /// Replace the whole path.
    ///
    /// Always notifies, even if the new path equals the old one.
    pub fn set_path(&mut self, destinations: impl IntoIterator<Item = D>) {
        self.path = destinations.into_iter().collect();
        debug!("NavigationState: path replaced, depth {}", self.path.len());
        self.notify_path();
    }

    // ====================================================================
    // Sheet
    // ====================================================================

    /// Present a sheet, replacing any sheet already shown.
    pub fn present_sheet(&mut self, sheet: S) {
        let replaced = self.presented_sheet.replace(sheet).is_some();
        debug!("NavigationState: sheet presented (replaced: {})", replaced);
        self.notify_sheet();
    }

    /// Dismiss the presented sheet and return it. No-op when none is shown.
    pub fn dismiss_sheet(&mut self) -> Option<S> {
        let dismissed = self.presented_sheet.take()?;
        debug!("NavigationState: sheet dismissed");
        self.notify_sheet();
        Some(dismissed)
    }

    // ====================================================================
    // URL routing
    // ====================================================================

    /// Route `url` and replace the path with the result.
    ///
    /// Returns `true` if the router produced a non-empty path and it was
    /// applied. On `false` the path is unchanged.
    pub fn navigate<R>(&mut self, router: &R, url: &Url) -> bool
    where
        R: UrlRouter<D> + ?Sized,
    {
        self.try_navigate(router, url).is_ok()
    }

    /// Parse `url` and route it. Unparseable strings return `false`
    /// without consulting the router.
    pub fn navigate_str<R>(&mut self, router: &R, url: &str) -> bool
    where
        R: UrlRouter<D> + ?Sized,
    {
        self.try_navigate_str(router, url).is_ok()
    }

    /// Like [`navigate`](Self::navigate), keeping the failure reason.
    pub fn try_navigate<R>(&mut self, router: &R, url: &Url) -> Result<(), NavigateError>
    where
        R: UrlRouter<D> + ?Sized,
    {
        let destinations = router
            .route(url)
            .inspect_err(|e| debug!("NavigationState: {} not routed: {}", url, e))?;
        if destinations.is_empty() {
            debug!("NavigationState: {} routed to an empty path", url);
            return Err(NavigateError::unroutable(format!("`{}` routed to an empty path", url)));
        }
        debug!("NavigationState: navigating to {}", url);
        self.set_path(destinations);
        Ok(())
    }

    /// Like [`navigate_str`](Self::navigate_str), keeping the failure reason.
    pub fn try_navigate_str<R>(&mut self, router: &R, url: &str) -> Result<(), NavigateError>
    where
        R: UrlRouter<D> + ?Sized,
    {
        let url = Url::parse(url)
            .inspect_err(|e| debug!("NavigationState: {:?} is not a url: {}", url, e))?;
        self.try_navigate(router, &url)
    }

    // ====================================================================
    // Subscriptions
    // ====================================================================

    /// Subscribe to path and sheet changes.
    ///
    /// The handler runs synchronously inside the mutating call, after the
    /// state is updated. Operations that change nothing do not notify.
    pub fn subscribe<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: for<'a> FnMut(&NavigationChange<'a, D, S>) + Send + 'static,
    {
        self.observers.subscribe(handler)
    }

    /// Remove a handler. Returns `false` if the ID was unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    fn notify_path(&mut self) {
        self.observers.notify(&NavigationChange::Path(&self.path));
    }

    fn notify_sheet(&mut self) {
        self.observers
            .notify(&NavigationChange::Sheet(self.presented_sheet.as_ref()));
    }
}

impl<D: Clone, S: Clone> NavigationState<D, S> {
    /// Copy the current path and sheet.
    pub fn snapshot(&self) -> NavigationSnapshot<D, S> {
        NavigationSnapshot {
            path: self.path.clone(),
            presented_sheet: self.presented_sheet.clone(),
        }
    }
}

impl<D, S> Default for NavigationState<D, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: fmt::Debug, S: fmt::Debug> fmt::Debug for NavigationState<D, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationState")
            .field("path", &self.path)
            .field("presented_sheet", &self.presented_sheet)
            .field("subscribers", &self.observers.len())
            .finish()
    }
}
