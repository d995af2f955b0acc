//! Inline-editable field markup for server-rendered pages.
//!
//! Renders a model attribute as a `<span>` fragment annotated with `data-*`
//! attributes. A client-side script later reads those attributes to turn the
//! fragment into an editable widget that submits changes to `data-url`.
//!
//! # Architecture
//!
//! - [`Subject`]: read access to a model (type name, id, attributes)
//! - [`RenderOptions`]: field type, collection, target URL and styling hooks
//! - [`Renderer`]: builds the fragment using a [`RouteResolver`] for URLs and
//!   a [`NamingPolicy`] for ids and URL segments
//!
//! # Example
//!
//! ```
//! use bip_renderer::{Collection, FieldType, Record, RenderOptions, best_in_place};
//!
//! let user = Record::new("User")
//!     .with_id(1)
//!     .with("name", "Lucia")
//!     .with("receive_email", false);
//!
//! let html = best_in_place(&user, "name", &RenderOptions::new()).unwrap();
//! assert!(html.contains(r#"id="best_in_place_user_name""#));
//! assert!(html.contains(r#"data-url="/users/1""#));
//!
//! let options = RenderOptions::new()
//!     .with_type(FieldType::Checkbox)
//!     .with_collection(Collection::labels(["Nain", "Da"]));
//! let html = best_in_place(&user, "receive_email", &options).unwrap();
//! assert!(html.ends_with(">Nain</span>"));
//! ```
//!
//! [`RouteResolver`]: bip_routes::RouteResolver

mod error;
mod html;
mod naming;
mod options;
mod renderer;
mod subject;
mod value;

pub use error::RenderError;
pub use html::escape_html;
pub use naming::{Inflector, NamingPolicy, underscore};
pub use options::{Collection, FieldType, RenderOptions, UrlSpec};
pub use renderer::Renderer;
pub use subject::{Record, Subject};
pub use value::Value;

use std::sync::LazyLock;

static DEFAULT_RENDERER: LazyLock<Renderer> = LazyLock::new(Renderer::default);

/// Render `attribute` of `subject` with the default [`Renderer`].
///
/// The default renderer resolves any controller with conventional
/// resourceful routes and uses English inflection.
///
/// # Errors
///
/// See [`Renderer::render`].
pub fn best_in_place<S: Subject + ?Sized>(
    subject: &S,
    attribute: &str,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    DEFAULT_RENDERER.render(subject, attribute, options)
}
