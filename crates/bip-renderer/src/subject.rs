//! Model-like subjects whose attributes are rendered.

use std::collections::BTreeMap;
use std::fmt::Display;

use crate::Value;

/// Read access to a model-like entity.
///
/// Implemented per model type; the renderer never mutates a subject.
pub trait Subject {
    /// Type name of the model (e.g., `User`, `Admin::User`).
    fn model_name(&self) -> &str;

    /// Persisted identifier, or `None` for a record that has not been saved.
    fn id(&self) -> Option<String>;

    /// Read attribute `name`.
    ///
    /// Returns `None` if the subject has no such attribute and
    /// `Some(Value::Nil)` if the attribute exists but is unset.
    fn read_attribute(&self, name: &str) -> Option<Value>;
}

impl<T: Subject + ?Sized> Subject for &T {
    fn model_name(&self) -> &str {
        (**self).model_name()
    }

    fn id(&self) -> Option<String> {
        (**self).id()
    }

    fn read_attribute(&self, name: &str) -> Option<Value> {
        (**self).read_attribute(name)
    }
}

/// Map-backed [`Subject`].
///
/// ```
/// use bip_renderer::{Record, Subject, Value};
///
/// let user = Record::new("User").with_id(1).with("name", "Lucia");
/// assert_eq!(user.read_attribute("name"), Some(Value::from("Lucia")));
/// assert_eq!(user.read_attribute("missing"), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Record {
    model_name: String,
    id: Option<String>,
    attributes: BTreeMap<String, Value>,
}

impl Record {
    /// Create an unsaved record with no attributes.
    #[must_use]
    pub fn new(model_name: impl Into<String>) -> Self {
        Self {
            model_name: model_name.into(),
            id: None,
            attributes: BTreeMap::new(),
        }
    }

    /// Create a record from a JSON object.
    ///
    /// Every member becomes an attribute; a non-null `id` member also
    /// becomes the record id. Returns `None` if `json` is not an object.
    #[must_use]
    pub fn from_json(model_name: impl Into<String>, json: &serde_json::Value) -> Option<Self> {
        let object = json.as_object()?;
        let mut record = Self::new(model_name);
        for (name, value) in object {
            record.set(name.clone(), Value::from(value));
        }
        record.id = match object.get("id") {
            None | Some(serde_json::Value::Null) => None,
            Some(id) => Some(Value::from(id).to_text()),
        };
        Some(record)
    }

    /// Set the record id.
    #[must_use]
    pub fn with_id(mut self, id: impl Display) -> Self {
        self.id = Some(id.to_string());
        self
    }

    /// Add an attribute.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    /// Insert or replace an attribute.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.attributes.insert(name.into(), value.into());
    }
}

impl Subject for Record {
    fn model_name(&self) -> &str {
        &self.model_name
    }

    fn id(&self) -> Option<String> {
        self.id.clone()
    }

    fn read_attribute(&self, name: &str) -> Option<Value> {
        self.attributes.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_record_builder() {
        let user = Record::new("User")
            .with_id(7)
            .with("name", "Lucia")
            .with("receive_email", false)
            .with("nickname", None::<String>);

        assert_eq!(user.model_name(), "User");
        assert_eq!(user.id().as_deref(), Some("7"));
        assert_eq!(user.read_attribute("receive_email"), Some(Value::Bool(false)));
        assert_eq!(user.read_attribute("nickname"), Some(Value::Nil));
        assert_eq!(user.read_attribute("age"), None);
    }

    #[test]
    fn test_set_replaces_value() {
        let mut user = Record::new("User").with("name", "Lucia");
        user.set("name", "");
        assert_eq!(user.read_attribute("name"), Some(Value::from("")));
    }

    #[test]
    fn test_from_json_object() {
        let user = Record::from_json(
            "User",
            &json!({"id": 12, "name": "Lucia", "zip": "25123", "admin": true}),
        )
        .unwrap();

        assert_eq!(user.id().as_deref(), Some("12"));
        assert_eq!(user.read_attribute("zip"), Some(Value::from("25123")));
        assert_eq!(user.read_attribute("admin"), Some(Value::Bool(true)));
    }

    #[test]
    fn test_from_json_null_id_is_unsaved() {
        let user = Record::from_json("User", &json!({"id": null})).unwrap();
        assert!(user.id().is_none());
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        assert!(Record::from_json("User", &json!([1, 2])).is_none());
    }

    #[test]
    fn test_reference_is_subject() {
        fn name_of(subject: &impl Subject) -> String {
            subject.model_name().to_owned()
        }
        let user = Record::new("User");
        assert_eq!(name_of(&&user), "User");
    }
}
