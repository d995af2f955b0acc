//! Naming policy: model type names to element ids and URL segments.

use std::collections::{BTreeMap, BTreeSet};

use bip_config::NamingConfig;

/// Derives names from a model type name.
pub trait NamingPolicy: Send + Sync {
    /// Singular key used in element ids and `data-object`
    /// (`BlogPost` -> `blog_post`).
    fn param_key(&self, model_name: &str) -> String;

    /// Plural key used as the default URL segment (`BlogPost` -> `blog_posts`).
    fn route_key(&self, model_name: &str) -> String;
}

const IRREGULAR: &[(&str, &str)] = &[
    ("person", "people"),
    ("human", "humans"),
    ("man", "men"),
    ("woman", "women"),
    ("child", "children"),
    ("mouse", "mice"),
    ("tooth", "teeth"),
    ("foot", "feet"),
    ("goose", "geese"),
];

const UNCOUNTABLE: &[&str] = &[
    "equipment",
    "information",
    "rice",
    "money",
    "species",
    "series",
    "fish",
    "sheep",
    "jeans",
    "police",
    "news",
];

/// English inflector.
///
/// Regular rules apply to the end of the name (`line_item` -> `line_items`);
/// configured rules may name compound words.
#[derive(Clone, Debug)]
pub struct Inflector {
    irregular: BTreeMap<String, String>,
    uncountable: BTreeSet<String>,
}

impl Default for Inflector {
    fn default() -> Self {
        Self {
            irregular: IRREGULAR
                .iter()
                .map(|(singular, plural)| ((*singular).to_owned(), (*plural).to_owned()))
                .collect(),
            uncountable: UNCOUNTABLE.iter().map(|w| (*w).to_owned()).collect(),
        }
    }
}

impl Inflector {
    /// Built-in rules extended with configured words.
    #[must_use]
    pub fn from_config(config: &NamingConfig) -> Self {
        let mut inflector = Self::default();
        for (singular, plural) in &config.irregular {
            inflector = inflector.with_irregular(singular, plural);
        }
        for word in &config.uncountable {
            inflector = inflector.with_uncountable(word);
        }
        inflector
    }

    /// Add an irregular singular/plural pair.
    #[must_use]
    pub fn with_irregular(mut self, singular: &str, plural: &str) -> Self {
        self.irregular
            .insert(singular.to_lowercase(), plural.to_lowercase());
        self
    }

    /// Add a word whose plural equals its singular.
    #[must_use]
    pub fn with_uncountable(mut self, word: &str) -> Self {
        self.uncountable.insert(word.to_lowercase());
        self
    }

    /// Pluralize an underscored name.
    ///
    /// Uncountable words match the whole name or its last `_`-separated
    /// words (`line_item`, `sales_equipment`). Irregular rules match any
    /// suffix, longest first, so `salesperson` becomes `salespeople` and a
    /// configured `blog_post = "articles"` rewrites the whole name.
    #[must_use]
    pub fn pluralize(&self, name: &str) -> String {
        if name.is_empty()
            || self
                .uncountable
                .iter()
                .any(|word| ends_with_words(name, word))
        {
            return name.to_owned();
        }

        let irregular = self
            .irregular
            .iter()
            .filter(|(singular, _)| name.ends_with(singular.as_str()))
            .max_by_key(|(singular, _)| singular.len());
        if let Some((singular, plural)) = irregular {
            let stem = &name[..name.len() - singular.len()];
            return format!("{stem}{plural}");
        }

        if ["s", "x", "z", "ch", "sh"]
            .iter()
            .any(|suffix| name.ends_with(suffix))
        {
            return format!("{name}es");
        }
        if let Some(stem) = name.strip_suffix('y')
            && stem
                .chars()
                .last()
                .is_some_and(|c| c != '_' && !"aeiou".contains(c))
        {
            return format!("{stem}ies");
        }
        format!("{name}s")
    }
}

/// Whether `name` is `words` or ends with `_` followed by `words`.
fn ends_with_words(name: &str, words: &str) -> bool {
    name.strip_suffix(words)
        .is_some_and(|prefix| prefix.is_empty() || prefix.ends_with('_'))
}

impl NamingPolicy for Inflector {
    fn param_key(&self, model_name: &str) -> String {
        underscore(model_name)
    }

    fn route_key(&self, model_name: &str) -> String {
        self.pluralize(&underscore(model_name))
    }
}

/// Convert a type name to snake case, flattening namespaces
/// (`Admin::HTMLPage` -> `admin_html_page`).
#[must_use]
pub fn underscore(name: &str) -> String {
    let chars: Vec<char> = name.replace("::", "_").replace('-', "_").chars().collect();
    let mut out = String::with_capacity(chars.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev != '_' && (prev.is_lowercase() || prev.is_ascii_digit() || next_is_lower) {
                out.push('_');
            }
        }
        out.extend(c.to_lowercase());
    }

    out
}

#[cfg(test)]
mod tests {
    use bip_config::Config;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_underscore() {
        assert_eq!(underscore("User"), "user");
        assert_eq!(underscore("BlogPost"), "blog_post");
        assert_eq!(underscore("Admin::User"), "admin_user");
        assert_eq!(underscore("HTMLPage"), "html_page");
        assert_eq!(underscore("Admin::HTMLPage"), "admin_html_page");
        assert_eq!(underscore("Page2Section"), "page2_section");
        assert_eq!(underscore("line_item"), "line_item");
    }

    #[test]
    fn test_pluralize_regular() {
        let inflector = Inflector::default();
        assert_eq!(inflector.pluralize("user"), "users");
        assert_eq!(inflector.pluralize("address"), "addresses");
        assert_eq!(inflector.pluralize("box"), "boxes");
        assert_eq!(inflector.pluralize("match"), "matches");
        assert_eq!(inflector.pluralize("country"), "countries");
        assert_eq!(inflector.pluralize("day"), "days");
    }

    #[test]
    fn test_pluralize_irregular_and_uncountable() {
        let inflector = Inflector::default();
        assert_eq!(inflector.pluralize("person"), "people");
        assert_eq!(inflector.pluralize("sheep"), "sheep");
        assert_eq!(inflector.pluralize("sales_person"), "sales_people");
    }

    #[test]
    fn test_pluralize_irregular_suffix() {
        let inflector = Inflector::default();
        assert_eq!(inflector.pluralize("salesperson"), "salespeople");
        assert_eq!(inflector.pluralize("chairwoman"), "chairwomen");
        assert_eq!(inflector.pluralize("human"), "humans");
        assert_eq!(inflector.pluralize("grandchild"), "grandchildren");
        assert_eq!(inflector.pluralize("fox"), "foxes");
    }

    #[test]
    fn test_uncountable_needs_word_boundary() {
        let inflector = Inflector::default();
        assert_eq!(inflector.pluralize("sales_equipment"), "sales_equipment");
        assert_eq!(inflector.pluralize("swordfish"), "swordfishes");
    }

    #[test]
    fn test_compound_rules_from_toml() {
        let config = Config::from_toml(
            r#"
[naming]
irregular = { blog_post = "articles" }
uncountable = ["line_item"]
"#,
        )
        .unwrap();
        let inflector = Inflector::from_config(&config.naming);

        assert_eq!(inflector.route_key("BlogPost"), "articles");
        assert_eq!(inflector.route_key("Admin::BlogPost"), "admin_articles");
        assert_eq!(inflector.route_key("LineItem"), "line_item");
        assert_eq!(inflector.route_key("Post"), "posts");
    }

    #[test]
    fn test_pluralize_last_word_only() {
        let inflector = Inflector::default();
        assert_eq!(inflector.pluralize("blog_post"), "blog_posts");
        assert_eq!(inflector.pluralize("admin_user"), "admin_users");
    }

    #[test]
    fn test_keys() {
        let inflector = Inflector::default();
        assert_eq!(inflector.param_key("BlogPost"), "blog_post");
        assert_eq!(inflector.route_key("BlogPost"), "blog_posts");
        assert_eq!(inflector.route_key("Person"), "people");
    }

    #[test]
    fn test_from_config() {
        let mut config = NamingConfig::default();
        config
            .irregular
            .insert("cactus".to_owned(), "cacti".to_owned());
        config.uncountable.push("Feedback".to_owned());

        let inflector = Inflector::from_config(&config);
        assert_eq!(inflector.pluralize("cactus"), "cacti");
        assert_eq!(inflector.pluralize("feedback"), "feedback");
        assert_eq!(inflector.pluralize("person"), "people");
    }
}
