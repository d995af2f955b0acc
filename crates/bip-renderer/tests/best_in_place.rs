//! End-to-end checks on rendered fragments, parsed with an HTML parser.

use bip_config::Config;
use bip_renderer::{
    Collection, FieldType, Inflector, Record, RenderError, RenderOptions, Renderer, Subject,
    best_in_place,
};
use bip_routes::{ResourceRoutes, RouteDescriptor};
use pretty_assertions::assert_eq;
use scraper::{Html, Selector};

const DESCRIPTION: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. \
    Vivamus a lectus et lacus ultrices auctor. Morbi aliquet convallis tincidunt.";

/// Parsed `<span>` fragment.
struct Span {
    attrs: Vec<(String, String)>,
    text: String,
}

impl Span {
    fn parse(html: &str) -> Self {
        let fragment = Html::parse_fragment(html);
        let selector = Selector::parse("span").unwrap();
        let spans: Vec<_> = fragment.select(&selector).collect();
        assert_eq!(spans.len(), 1, "expected exactly one span in {html}");
        let span = spans[0];
        Self {
            attrs: span
                .value()
                .attrs()
                .map(|(name, value)| (name.to_owned(), value.to_owned()))
                .collect(),
            text: span.text().collect(),
        }
    }

    fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(attr, _)| attr == name)
            .map(|(_, value)| value.as_str())
    }
}

fn user() -> Record {
    Record::new("User")
        .with("name", "Lucia")
        .with("last_name", "Napoli")
        .with("email", "lucianapoli@gmail.com")
        .with("address", "Via Roma 99")
        .with("zip", "25123")
        .with("country", "2")
        .with("receive_email", false)
        .with("description", DESCRIPTION)
}

fn countries() -> Collection {
    Collection::pairs([(1, "Spain"), (2, "Italy"), (3, "Germany"), (4, "France")])
}

fn render(subject: &impl Subject, attribute: &str, options: &RenderOptions) -> Span {
    Span::parse(&best_in_place(subject, attribute, options).unwrap())
}

fn render_name(options: &RenderOptions) -> Span {
    render(&user(), "name", options)
}

// General properties

#[test]
fn test_generates_span() {
    let html = best_in_place(&user(), "name", &RenderOptions::new()).unwrap();
    assert!(html.starts_with("<span "));
    Span::parse(&html);
}

#[test]
fn test_proper_id() {
    let span = render_name(&RenderOptions::new());
    assert_eq!(span.attr("id"), Some("best_in_place_user_name"));
}

#[test]
fn test_best_in_place_class() {
    let span = render_name(&RenderOptions::new());
    assert_eq!(span.attr("class"), Some("best_in_place"));
}

#[test]
fn test_data_attribute_and_object() {
    let span = render_name(&RenderOptions::new());
    assert_eq!(span.attr("data-attribute"), Some("name"));
    assert_eq!(span.attr("data-object"), Some("user"));
}

#[test]
fn test_no_optional_data_by_default() {
    let span = render_name(&RenderOptions::new());
    assert_eq!(span.attr("data-activator"), None);
    assert_eq!(span.attr("data-inner-class"), None);
    assert_eq!(span.attr("data-nil"), None);
}

#[test]
fn test_id_and_class_ignore_options() {
    let options = RenderOptions::new()
        .with_type(FieldType::Checkbox)
        .with_path("/custom/path")
        .with_activator("a")
        .with_inner_class("b");
    let span = render(&user(), "receive_email", &options);
    assert_eq!(span.attr("id"), Some("best_in_place_user_receive_email"));
    assert_eq!(span.attr("class"), Some("best_in_place"));
}

#[test]
fn test_given_inner_class() {
    let span = render_name(&RenderOptions::new().with_inner_class("awesome"));
    assert_eq!(span.attr("data-inner-class"), Some("awesome"));
}

#[test]
fn test_given_activator() {
    let span = render_name(&RenderOptions::new().with_activator("awesome"));
    assert_eq!(span.attr("data-activator"), Some("awesome"));
}

// URL generation

#[test]
fn test_default_url() {
    let saved = user().with_id(42);
    let span = render(&saved, "name", &RenderOptions::new());
    assert_eq!(span.attr("data-url"), Some("/users/42"));
}

#[test]
fn test_custom_url_string() {
    let span = render_name(&RenderOptions::new().with_path("/custom/path"));
    assert_eq!(span.attr("data-url"), Some("/custom/path"));
}

#[test]
fn test_named_path_helper() {
    let routes = ResourceRoutes::conventional();
    let span = render_name(&RenderOptions::new().with_path(routes.collection_path("users")));
    assert_eq!(span.attr("data-url"), Some("/users"));
}

#[test]
fn test_route_descriptor() {
    let descriptor = RouteDescriptor::new("users").with_action("edit").with_id(23);
    let span = render_name(&RenderOptions::new().with_path(descriptor));
    assert_eq!(span.attr("data-url"), Some("/users/23/edit"));
}

#[test]
fn test_route_descriptor_with_query() {
    let descriptor = RouteDescriptor::new("users")
        .with_action("update")
        .with_id(23)
        .with_param("format", "json");
    let span = render_name(&RenderOptions::new().with_path(descriptor));
    assert_eq!(span.attr("data-url"), Some("/users/23?format=json"));
}

#[test]
fn test_unresolvable_route_produces_no_output() {
    let renderer = Renderer::new(ResourceRoutes::new().resource("posts"), Inflector::default());
    let result = renderer.render(&user().with_id(1), "name", &RenderOptions::new());
    assert!(matches!(result, Err(RenderError::UnresolvableRoute(_))));
}

// Nil handling

#[test]
fn test_nil_value_shows_empty_text() {
    let subject = user().with("name", None::<String>);
    let span = render(&subject, "name", &RenderOptions::new());
    assert_eq!(span.text, "");
}

#[test]
fn test_empty_string_shows_empty_text() {
    let subject = user().with("name", "");
    let span = render(&subject, "name", &RenderOptions::new());
    assert_eq!(span.text, "");
}

#[test]
fn test_nil_placeholder_is_forwarded_not_rendered() {
    let subject = user().with("name", None::<String>);
    let span = render(&subject, "name", &RenderOptions::new().with_nil("-"));
    assert_eq!(span.attr("data-nil"), Some("-"));
    assert_eq!(span.text, "");
}

// Text field

#[test]
fn test_text_field() {
    let span = render_name(&RenderOptions::new());
    assert_eq!(span.text, "Lucia");
    assert_eq!(span.attr("data-type"), Some("input"));
    assert_eq!(span.attr("data-collection"), None);
}

#[test]
fn test_long_text_field() {
    let span = render(&user(), "description", &RenderOptions::new());
    assert_eq!(span.text, DESCRIPTION);
}

#[test]
fn test_text_is_escaped_and_round_trips() {
    let subject = user().with("name", r#"<script>alert("x")</script> & co"#);
    let html = best_in_place(&subject, "name", &RenderOptions::new()).unwrap();
    assert!(!html.contains("<script>"));
    assert_eq!(
        Span::parse(&html).text,
        r#"<script>alert("x")</script> & co"#
    );
}

// Boolean field

#[test]
fn test_checkbox_defaults() {
    let options = RenderOptions::new().with_type(FieldType::Checkbox);
    let span = render(&user(), "receive_email", &options);
    assert_eq!(span.attr("data-type"), Some("checkbox"));
    assert_eq!(span.attr("data-collection"), Some(r#"["No","Yes"]"#));
    assert_eq!(span.text, "No");
}

#[test]
fn test_checkbox_custom_collection() {
    let options = RenderOptions::new()
        .with_type(FieldType::Checkbox)
        .with_collection(Collection::labels(["Nain", "Da"]));
    let span = render(&user(), "receive_email", &options);
    assert_eq!(span.text, "Nain");
    assert_eq!(span.attr("data-collection"), Some(r#"["Nain","Da"]"#));
}

#[test]
fn test_checkbox_truthy() {
    let subject = user().with("receive_email", true);
    let options = RenderOptions::new().with_type(FieldType::Checkbox);
    assert_eq!(render(&subject, "receive_email", &options).text, "Yes");
}

// Select field

#[test]
fn test_select_field() {
    let options = RenderOptions::new()
        .with_type(FieldType::Select)
        .with_collection(countries());
    let span = render(&user(), "country", &options);
    assert_eq!(span.attr("data-type"), Some("select"));
    assert_eq!(
        span.attr("data-collection"),
        Some(r#"[[1,"Spain"],[2,"Italy"],[3,"Germany"],[4,"France"]]"#)
    );
    assert_eq!(span.text, "Italy");
}

// Errors

#[test]
fn test_missing_attribute() {
    let err = best_in_place(&user(), "nickname", &RenderOptions::new()).unwrap_err();
    assert!(matches!(err, RenderError::AttributeNotFound { .. }));
}

// Configuration

#[test]
fn test_renderer_from_config() {
    let config = Config::from_toml(
        r#"
[checkbox]
labels = ["Off", "On"]

[routes]
mount_path = "/admin"
resources = ["users"]
"#,
    )
    .unwrap();
    let renderer = Renderer::from_config(&config);
    let options = RenderOptions::new().with_type(FieldType::Checkbox);
    let html = renderer
        .render(&user().with_id(3), "receive_email", &options)
        .unwrap();

    let span = Span::parse(&html);
    assert_eq!(span.attr("data-url"), Some("/admin/users/3"));
    assert_eq!(span.attr("data-collection"), Some(r#"["Off","On"]"#));
    assert_eq!(span.text, "Off");
}

#[test]
fn test_end_to_end_scenario() {
    let span = render_name(&RenderOptions::new());
    let mut attrs = span.attrs.clone();
    attrs.sort();
    assert_eq!(
        attrs,
        vec![
            ("class".to_owned(), "best_in_place".to_owned()),
            ("data-attribute".to_owned(), "name".to_owned()),
            ("data-object".to_owned(), "user".to_owned()),
            ("data-type".to_owned(), "input".to_owned()),
            ("data-url".to_owned(), "/users".to_owned()),
            ("id".to_owned(), "best_in_place_user_name".to_owned()),
        ]
    );
    assert_eq!(span.text, "Lucia");
}
