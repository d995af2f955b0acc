//! Attribute-to-markup rendering.

use std::borrow::Cow;

use bip_config::Config;
use bip_routes::{ResourceRoutes, RouteDescriptor, RouteResolver};

use crate::html::ElementBuilder;
use crate::naming::{Inflector, NamingPolicy};
use crate::{Collection, FieldType, RenderError, RenderOptions, Subject, UrlSpec, Value};

/// Prefix of every fragment id.
const ID_PREFIX: &str = "best_in_place";
/// Class marker the client script looks for.
const CLASS_MARKER: &str = "best_in_place";

/// Renders editable `<span>` fragments.
///
/// Holds the collaborators used to build fragments: a [`RouteResolver`] for
/// structural paths and default URLs, and a [`NamingPolicy`] for ids and URL
/// segments. Rendering itself is stateless, so a renderer can be shared
/// across threads.
pub struct Renderer {
    routes: Box<dyn RouteResolver>,
    naming: Box<dyn NamingPolicy>,
    checkbox_labels: [String; 2],
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(ResourceRoutes::conventional(), Inflector::default())
    }
}

impl Renderer {
    /// Create a renderer with the given collaborators and `["No","Yes"]`
    /// checkbox labels.
    #[must_use]
    pub fn new(
        routes: impl RouteResolver + 'static,
        naming: impl NamingPolicy + 'static,
    ) -> Self {
        Self {
            routes: Box::new(routes),
            naming: Box::new(naming),
            checkbox_labels: ["No".to_owned(), "Yes".to_owned()],
        }
    }

    /// Create a renderer from configuration.
    ///
    /// The configuration is expected to be validated; a label list that is
    /// not exactly two entries long keeps the default labels.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let renderer = Self::new(
            ResourceRoutes::from_config(&config.routes),
            Inflector::from_config(&config.naming),
        );
        match config.checkbox.labels.as_slice() {
            [falsy, truthy] => renderer.with_checkbox_labels(falsy, truthy),
            _ => renderer,
        }
    }

    /// Override the default checkbox labels.
    #[must_use]
    pub fn with_checkbox_labels(
        mut self,
        falsy: impl Into<String>,
        truthy: impl Into<String>,
    ) -> Self {
        self.checkbox_labels = [falsy.into(), truthy.into()];
        self
    }

    /// Render `attribute` of `subject` as an editable fragment.
    ///
    /// # Errors
    ///
    /// - [`RenderError::AttributeNotFound`] if the subject lacks `attribute`
    /// - [`RenderError::InvalidCollection`] if the collection does not fit
    ///   the field type
    /// - [`RenderError::UnresolvableRoute`] if the target URL cannot be resolved
    pub fn render<S: Subject + ?Sized>(
        &self,
        subject: &S,
        attribute: &str,
        options: &RenderOptions,
    ) -> Result<String, RenderError> {
        let value = subject.read_attribute(attribute).ok_or_else(|| {
            RenderError::AttributeNotFound {
                object: subject.model_name().to_owned(),
                attribute: attribute.to_owned(),
            }
        })?;

        let object = self.naming.param_key(subject.model_name());
        let collection = self.effective_collection(options)?;
        let text = display_text(&value, options.field_type, collection.as_deref());
        let url = self.resolve_url(subject, options.path.as_ref())?;
        let collection_json = collection.map(|c| c.to_json()).transpose()?;

        tracing::debug!(
            object = %object,
            attribute,
            field_type = %options.field_type,
            url = %url,
            "Rendering editable field"
        );

        Ok(ElementBuilder::new("span")
            .attr("id", &format!("{ID_PREFIX}_{object}_{attribute}"))
            .attr("class", CLASS_MARKER)
            .attr("data-object", &object)
            .attr("data-attribute", attribute)
            .attr("data-type", options.field_type.as_str())
            .attr("data-url", &url)
            .attr_opt("data-collection", collection_json.as_deref())
            .attr_opt("data-activator", options.activator.as_deref())
            .attr_opt("data-nil", options.nil.as_deref())
            .attr_opt("data-inner-class", options.inner_class.as_deref())
            .finish(&text))
    }

    /// Collection rendered for the field type, or `None` for text inputs.
    fn effective_collection<'a>(
        &self,
        options: &'a RenderOptions,
    ) -> Result<Option<Cow<'a, Collection>>, RenderError> {
        let field_type = options.field_type;
        let invalid = |reason: &str| RenderError::InvalidCollection {
            field_type,
            reason: reason.to_owned(),
        };

        match (field_type, &options.collection) {
            (FieldType::Input, _) => Ok(None),
            (FieldType::Checkbox, None) => Ok(Some(Cow::Owned(Collection::Labels(
                self.checkbox_labels.to_vec(),
            )))),
            (FieldType::Checkbox, Some(collection @ Collection::Labels(labels))) => {
                if labels.len() == 2 {
                    Ok(Some(Cow::Borrowed(collection)))
                } else {
                    Err(invalid(&format!(
                        "expected 2 labels, got {}",
                        labels.len()
                    )))
                }
            }
            (FieldType::Checkbox, Some(Collection::Pairs(_))) => {
                Err(invalid("expected labels, got key/label pairs"))
            }
            (FieldType::Select, None) => Ok(Some(Cow::Owned(Collection::Pairs(Vec::new())))),
            (FieldType::Select, Some(collection @ Collection::Pairs(_))) => {
                Ok(Some(Cow::Borrowed(collection)))
            }
            (FieldType::Select, Some(Collection::Labels(_))) => {
                Err(invalid("expected key/label pairs, got labels"))
            }
        }
    }

    /// Resolve the target URL: literal paths verbatim, descriptors through the
    /// route resolver, and the subject's member path by default.
    fn resolve_url<S: Subject + ?Sized>(
        &self,
        subject: &S,
        path: Option<&UrlSpec>,
    ) -> Result<String, RenderError> {
        match path {
            Some(UrlSpec::Literal(url)) => Ok(url.clone()),
            Some(UrlSpec::Descriptor(descriptor)) => Ok(self.routes.resolve(descriptor)?),
            None => {
                let route_key = self.naming.route_key(subject.model_name());
                let descriptor = match subject.id() {
                    Some(id) => RouteDescriptor::new(route_key)
                        .with_action("show")
                        .with_id(id),
                    None => RouteDescriptor::new(route_key),
                };
                Ok(self.routes.resolve(&descriptor)?)
            }
        }
    }
}

/// Text shown inside the fragment.
///
/// Blank values always display as the empty string.
fn display_text(value: &Value, field_type: FieldType, collection: Option<&Collection>) -> String {
    if value.is_blank() {
        return String::new();
    }

    match (field_type, collection) {
        (FieldType::Checkbox, Some(Collection::Labels(labels))) => {
            let index = usize::from(value.is_truthy());
            labels.get(index).cloned().unwrap_or_default()
        }
        (FieldType::Select, Some(Collection::Pairs(pairs))) => {
            let key = value.to_text();
            let label = pairs
                .iter()
                .find(|(candidate, _)| candidate.to_text() == key)
                .map(|(_, label)| label.clone());
            if label.is_none() {
                tracing::warn!(key = %key, "Select value has no matching collection entry");
            }
            label.unwrap_or_default()
        }
        _ => value.to_text(),
    }
}
