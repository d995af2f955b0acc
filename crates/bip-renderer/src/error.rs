use bip_routes::RouteError;

use crate::FieldType;

/// Rendering error. A failed render produces no markup.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The subject has no attribute with the requested name.
    #[error("Undefined attribute '{attribute}' for {object}")]
    AttributeNotFound {
        /// Model type name.
        object: String,
        /// Requested attribute.
        attribute: String,
    },
    /// The collection does not fit the field type.
    #[error("Invalid collection for {field_type} field: {reason}")]
    InvalidCollection {
        /// Field type being rendered.
        field_type: FieldType,
        /// What is wrong with the collection.
        reason: String,
    },
    /// The route descriptor could not be resolved to a URL.
    #[error("Unresolvable route: {0}")]
    UnresolvableRoute(#[from] RouteError),
    /// The collection could not be serialized.
    #[error("Collection serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
