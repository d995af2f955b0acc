//! Resourceful route resolution for best-in-place helpers.
//!
//! Editable fields submit their changes to a URL. That URL is either given
//! literally, produced by a named-route helper, or described structurally by
//! a [`RouteDescriptor`] (controller, action, id). This crate turns
//! descriptors into paths through the [`RouteResolver`] trait.
//!
//! # Implementations
//!
//! - [`ResourceRoutes`]: conventional resourceful routes (`/users`,
//!   `/users/23`, `/users/23/edit`), optionally mounted under a prefix and
//!   restricted to registered resources
//!
//! # Example
//!
//! ```
//! use bip_routes::{ResourceRoutes, RouteDescriptor, RouteResolver};
//!
//! let routes = ResourceRoutes::conventional();
//! let descriptor = RouteDescriptor::new("users").with_action("edit").with_id("23");
//! assert_eq!(routes.resolve(&descriptor).unwrap(), "/users/23/edit");
//! assert_eq!(routes.collection_path("users"), "/users");
//! ```

mod descriptor;
mod resources;

pub use descriptor::RouteDescriptor;
pub use resources::ResourceRoutes;

/// Resolves structural route descriptors to URL paths.
pub trait RouteResolver: Send + Sync {
    /// Resolve `descriptor` to a path (e.g., `/users/23/edit`).
    ///
    /// # Errors
    ///
    /// Returns [`RouteError`] when no route matches the descriptor.
    fn resolve(&self, descriptor: &RouteDescriptor) -> Result<String, RouteError>;
}

/// Route resolution error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// Descriptor has no controller.
    #[error("Route descriptor has no controller")]
    EmptyController,
    /// Controller is not a registered resource.
    #[error("No route matches controller '{0}'")]
    UnknownController(String),
    /// Action needs a record id but none was given.
    #[error("Route {controller}#{action} requires an id")]
    MissingId {
        /// Controller name.
        controller: String,
        /// Action name.
        action: String,
    },
}
