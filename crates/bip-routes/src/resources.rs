//! Conventional resourceful routes.

use std::collections::BTreeSet;
use std::fmt::Display;

use bip_config::RoutesConfig;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::{RouteDescriptor, RouteError, RouteResolver};

/// Unreserved characters (RFC 3986): A-Z a-z 0-9 - . _ ~
const SEGMENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

fn encode(input: &str) -> String {
    utf8_percent_encode(input, SEGMENT_ENCODE_SET).to_string()
}

/// Resourceful route table.
///
/// | action                        | path                 |
/// |-------------------------------|----------------------|
/// | `index`, `create`             | `/users`             |
/// | `new`                         | `/users/new`         |
/// | `show`, `update`, `destroy`   | `/users/:id`         |
/// | `edit`                        | `/users/:id/edit`    |
/// | other, with id                | `/users/:id/:action` |
/// | other, without id             | `/users/:action`     |
///
/// Collection actions ignore the descriptor id.
#[derive(Clone, Debug, Default)]
pub struct ResourceRoutes {
    mount_path: String,
    /// Registered resources; `None` accepts any controller.
    resources: Option<BTreeSet<String>>,
}

impl ResourceRoutes {
    /// Route table that only resolves resources registered with
    /// [`resource`](Self::resource).
    #[must_use]
    pub fn new() -> Self {
        Self {
            mount_path: String::new(),
            resources: Some(BTreeSet::new()),
        }
    }

    /// Route table that resolves any controller name.
    #[must_use]
    pub fn conventional() -> Self {
        Self::default()
    }

    /// Build a route table from configuration.
    #[must_use]
    pub fn from_config(config: &RoutesConfig) -> Self {
        Self {
            mount_path: config.mount_path.clone(),
            resources: config
                .resources
                .as_ref()
                .map(|names| names.iter().cloned().collect()),
        }
    }

    /// Register a routable resource.
    #[must_use]
    pub fn resource(mut self, name: impl Into<String>) -> Self {
        self.resources
            .get_or_insert_with(BTreeSet::new)
            .insert(name.into());
        self
    }

    /// Prefix every generated path with `mount_path` (e.g., `/admin`).
    #[must_use]
    pub fn with_mount_path(mut self, mount_path: impl Into<String>) -> Self {
        self.mount_path = mount_path.into().trim_end_matches('/').to_owned();
        self
    }

    /// Path of the resource collection (`/users`).
    #[must_use]
    pub fn collection_path(&self, resource: &str) -> String {
        format!("{}/{}", self.mount_path, resource.trim_matches('/'))
    }

    /// Path of the new-record form (`/users/new`).
    #[must_use]
    pub fn new_path(&self, resource: &str) -> String {
        format!("{}/new", self.collection_path(resource))
    }

    /// Path of a single record (`/users/23`).
    #[must_use]
    pub fn member_path(&self, resource: &str, id: impl Display) -> String {
        format!(
            "{}/{}",
            self.collection_path(resource),
            encode(&id.to_string())
        )
    }

    /// Path of a record's edit form (`/users/23/edit`).
    #[must_use]
    pub fn edit_path(&self, resource: &str, id: impl Display) -> String {
        format!("{}/edit", self.member_path(resource, id))
    }

    fn check_controller(&self, controller: &str) -> Result<(), RouteError> {
        if controller.is_empty() {
            return Err(RouteError::EmptyController);
        }
        match &self.resources {
            Some(registered) if !registered.contains(controller) => {
                Err(RouteError::UnknownController(controller.to_owned()))
            }
            _ => Ok(()),
        }
    }
}

impl RouteResolver for ResourceRoutes {
    fn resolve(&self, descriptor: &RouteDescriptor) -> Result<String, RouteError> {
        let controller = descriptor.controller.trim_matches('/');
        self.check_controller(controller)?;

        let action = descriptor.action.as_str();
        let require_id = || {
            descriptor
                .id
                .as_deref()
                .ok_or_else(|| RouteError::MissingId {
                    controller: controller.to_owned(),
                    action: action.to_owned(),
                })
        };

        let mut path = match action {
            "index" | "create" => self.collection_path(controller),
            "new" => self.new_path(controller),
            "show" | "update" | "destroy" => self.member_path(controller, require_id()?),
            "edit" => self.edit_path(controller, require_id()?),
            custom => match &descriptor.id {
                Some(id) => format!("{}/{}", self.member_path(controller, id), encode(custom)),
                None => format!("{}/{}", self.collection_path(controller), encode(custom)),
            },
        };

        if !descriptor.params.is_empty() {
            let query: Vec<String> = descriptor
                .params
                .iter()
                .map(|(name, value)| format!("{}={}", encode(name), encode(value)))
                .collect();
            path.push('?');
            path.push_str(&query.join("&"));
        }

        tracing::debug!(controller, action, path = %path, "Resolved route");
        Ok(path)
    }
}
