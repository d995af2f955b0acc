//! Structural route descriptors.

use std::collections::BTreeMap;
use std::fmt::Display;

/// Action used when a descriptor does not name one.
pub(crate) const DEFAULT_ACTION: &str = "index";

/// A route described by controller, action and record id.
///
/// Extra parameters are carried to the resolved URL as a query string,
/// sorted by name so that output is deterministic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteDescriptor {
    /// Controller (resource) name, e.g. `users`.
    pub controller: String,
    /// Action name, e.g. `edit`.
    pub action: String,
    /// Record identifier for member actions.
    pub id: Option<String>,
    /// Extra query parameters.
    pub params: BTreeMap<String, String>,
}

impl RouteDescriptor {
    /// Create a descriptor for `controller` with the `index` action.
    #[must_use]
    pub fn new(controller: impl Into<String>) -> Self {
        Self {
            controller: controller.into(),
            action: DEFAULT_ACTION.to_owned(),
            id: None,
            params: BTreeMap::new(),
        }
    }

    /// Set the action.
    #[must_use]
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = action.into();
        self
    }

    /// Set the record id.
    #[must_use]
    pub fn with_id(mut self, id: impl Display) -> Self {
        self.id = Some(id.to_string());
        self
    }

    /// Add an extra query parameter.
    #[must_use]
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }
}
