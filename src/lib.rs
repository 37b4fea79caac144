//! navstate — single-stack navigation state for UI apps.
//!
//! Rust owns the navigation state; the UI layer observes it and renders.
//!
//! # Two Slots
//!
//! - `path` — a stack of destinations, root first, last one visible
//! - `presented_sheet` — at most one modal on top
//!
//! Stack: `navigate_to`, `pop_navigation`, `pop_to_root`, `set_path`.
//! Sheet: `present_sheet`, `dismiss_sheet`.
//!
//! # Deep Links
//!
//! `navigate(router, url)` asks a [`UrlRouter`] for a full path and
//! replaces the stack with it. Failure is reported as `false` (or a
//! [`NavigateError`] from the `try_` variants) and leaves the stack as is.
//!
//! [`SegmentRouter`] is the stock router: one destination per URL
//! segment, resolved by [`RoutableDestination::from_segment`].
//!
//! # Example
//!
//! ```ignore
//! use navstate::{NavigationState, SegmentRouter};
//!
//! let mut nav = NavigationState::<Screen, Modal>::new();
//!
//! // Re-render on change.
//! nav.subscribe(|change| println!("changed: {:?}", change));
//!
//! nav.navigate_to(Screen::Users);
//! nav.present_sheet(Modal::Compose);
//!
//! // myapp://users/42 -> [Screen::Users, Screen::User(42)]
//! let routed = nav.navigate_str(&SegmentRouter::new(), "myapp://users/42");
//! ```

pub mod config;
pub mod error;
pub mod observer;
pub mod router;
pub mod state;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export primary types at crate root.
pub use config::RouterConfig;
pub use error::NavigateError;
pub use observer::{ChangeHandler, NavigationChange, SubscriptionId};
pub use router::{QueryParams, RoutableDestination, SegmentRouter, UrlRouter};
pub use state::{NavigationSnapshot, NavigationState};
pub use url::Url;
