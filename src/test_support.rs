//! Destination and sheet types shared by the unit tests.

use serde::{Deserialize, Serialize};

use crate::router::{QueryParams, RoutableDestination};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) enum Screen {
    Home,
    Users,
    User(u32),
    Settings,
    Search(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) enum Modal {
    Compose,
    Share(String),
}

impl RoutableDestination for Screen {
    fn from_segment(segment: &str, full_path: &[String], params: &QueryParams) -> Option<Self> {
        match segment {
            "home" => Some(Screen::Home),
            "users" => Some(Screen::Users),
            "settings" => Some(Screen::Settings),
            "search" => Some(Screen::Search(params.get("q").unwrap_or_default().to_string())),
            other => {
                // A bare number is a user id, but only inside `users`.
                let id = other.parse().ok()?;
                full_path.iter().any(|s| s == "users").then_some(Screen::User(id))
            }
        }
    }
}
