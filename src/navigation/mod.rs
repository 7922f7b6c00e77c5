//! Path to view bindings for the portal, resolved under hash history.

pub mod history;
pub mod lazy;
pub mod table;

use thiserror::Error;

pub use history::HashLocation;
pub use lazy::{LazyView, LoadState};
pub use table::{Navigation, Route, RouteTable, ViewBinding};

#[derive(Debug, Error)]
pub enum NavigationError {
    #[error("no route matches `{path}`")]
    NoMatch { path: String },

    #[error("view for route `{route}` failed to load: {reason}")]
    ViewLoad { route: String, reason: String },
}
