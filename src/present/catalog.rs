//! Keyed message templates with explicit render-time context.
//!
//! Sessions pick what to say by template key; the wording lives in data. A
//! template can hold `{placeholder}` slots which are filled from a
//! `RenderContext` passed at render time, so templates carry no hidden
//! per-instance state.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::EngineError;

/// Key-value substitution context for one render call.
#[derive(Clone, Debug, Default)]
pub struct RenderContext {
    values: FxHashMap<String, String>,
}

impl RenderContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one substitution, builder-style.
    #[must_use]
    pub fn with(mut self, key: &str, value: impl ToString) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }

    fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

/// A catalog of named message templates.
///
/// Deserializes from any serde map format, e.g. JSON:
///
/// ```
/// use roundcraft::present::{MessageCatalog, RenderContext};
///
/// let catalog: MessageCatalog = serde_json::from_str(
///     r#"{ "round_won": "{name} takes the round!" }"#,
/// ).unwrap();
///
/// let line = catalog
///     .render("round_won", &RenderContext::new().with("name", "Hal"))
///     .unwrap();
/// assert_eq!(line, "Hal takes the round!");
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageCatalog {
    templates: FxHashMap<String, String>,
}

impl MessageCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a template.
    pub fn insert(&mut self, key: impl Into<String>, template: impl Into<String>) {
        self.templates.insert(key.into(), template.into());
    }

    /// Whether the catalog holds a template for `key`.
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.templates.contains_key(key)
    }

    /// Render a template, substituting `{placeholder}` slots from `ctx`.
    ///
    /// Unknown placeholders are left verbatim; a missing template key is a
    /// wiring error.
    pub fn render(&self, key: &str, ctx: &RenderContext) -> Result<String, EngineError> {
        let template = self
            .templates
            .get(key)
            .ok_or_else(|| EngineError::MissingTemplate {
                key: key.to_string(),
            })?;

        Ok(substitute(template, ctx))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MessageCatalog {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for (key, template) in iter {
            catalog.insert(key, template);
        }
        catalog
    }
}

fn substitute(template: &str, ctx: &RenderContext) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];

        match after_open.find('}') {
            Some(close) => {
                let name = &after_open[..close];
                match ctx.get(name) {
                    Some(value) => out.push_str(value),
                    // Unknown slot stays visible rather than vanishing
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after_open[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}
