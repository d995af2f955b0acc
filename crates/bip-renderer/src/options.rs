//! Render options for editable fields.

use std::fmt;

use bip_routes::RouteDescriptor;
use serde::{Serialize, Serializer};

use crate::Value;

/// Display kind of an editable field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldType {
    /// Free text.
    #[default]
    Input,
    /// Boolean toggle between two labels.
    Checkbox,
    /// Choice from a key/label collection.
    Select,
}

impl FieldType {
    /// Marker emitted as `data-type`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Checkbox => "checkbox",
            Self::Select => "select",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Values offered by checkbox and select fields.
///
/// Serializes to a JSON array: `["No","Yes"]` for labels,
/// `[[1,"Spain"],[2,"Italy"]]` for pairs.
#[derive(Clone, Debug, PartialEq)]
pub enum Collection {
    /// Plain labels (checkbox: falsy label, then truthy label).
    Labels(Vec<String>),
    /// Ordered key/label pairs (select).
    Pairs(Vec<(Value, String)>),
}

impl Collection {
    /// Build a label collection.
    pub fn labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Labels(labels.into_iter().map(Into::into).collect())
    }

    /// Build a key/label pair collection.
    pub fn pairs<I, K, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, S)>,
        K: Into<Value>,
        S: Into<String>,
    {
        Self::Pairs(
            pairs
                .into_iter()
                .map(|(key, label)| (key.into(), label.into()))
                .collect(),
        )
    }

    /// JSON text embedded as `data-collection`.
    ///
    /// # Errors
    ///
    /// Returns the serializer error if the collection cannot be encoded.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl Serialize for Collection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Labels(labels) => labels.serialize(serializer),
            Self::Pairs(pairs) => pairs.serialize(serializer),
        }
    }
}

/// Target URL of an editable field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UrlSpec {
    /// Literal path, including the output of named-route helpers.
    Literal(String),
    /// Structural route resolved by the renderer's route resolver.
    Descriptor(RouteDescriptor),
}

impl From<&str> for UrlSpec {
    fn from(path: &str) -> Self {
        Self::Literal(path.to_owned())
    }
}

impl From<String> for UrlSpec {
    fn from(path: String) -> Self {
        Self::Literal(path)
    }
}

impl From<RouteDescriptor> for UrlSpec {
    fn from(descriptor: RouteDescriptor) -> Self {
        Self::Descriptor(descriptor)
    }
}

/// Options for rendering one editable field.
///
/// All fields are optional; the default renders a text input posting to
/// the subject's conventional URL.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderOptions {
    /// Display kind.
    pub field_type: FieldType,
    /// Checkbox labels or select pairs.
    pub collection: Option<Collection>,
    /// Target URL; defaults to the subject's member path.
    pub path: Option<UrlSpec>,
    /// Id of a separate element that activates editing.
    pub activator: Option<String>,
    /// Class applied by the client to the inner value wrapper.
    pub inner_class: Option<String>,
    /// Placeholder the client shows for empty values.
    pub nil: Option<String>,
}

impl RenderOptions {
    /// Default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the display kind.
    #[must_use]
    pub fn with_type(mut self, field_type: FieldType) -> Self {
        self.field_type = field_type;
        self
    }

    /// Set checkbox labels or select pairs.
    #[must_use]
    pub fn with_collection(mut self, collection: Collection) -> Self {
        self.collection = Some(collection);
        self
    }

    /// Set the target URL (literal path or route descriptor).
    #[must_use]
    pub fn with_path(mut self, path: impl Into<UrlSpec>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Set the id of the element that activates editing.
    #[must_use]
    pub fn with_activator(mut self, activator: impl Into<String>) -> Self {
        self.activator = Some(activator.into());
        self
    }

    /// Set the class of the inner value wrapper.
    #[must_use]
    pub fn with_inner_class(mut self, inner_class: impl Into<String>) -> Self {
        self.inner_class = Some(inner_class.into());
        self
    }

    /// Set the placeholder the client shows for empty values.
    #[must_use]
    pub fn with_nil(mut self, placeholder: impl Into<String>) -> Self {
        self.nil = Some(placeholder.into());
        self
    }
}
