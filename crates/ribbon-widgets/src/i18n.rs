//! Explicit label lookup for widget strings.
//!
//! There is no global message catalog. Hosts build an [`I18nCatalog`] and
//! hand it to each widget; widgets resolve labels with [`resolve_label`],
//! where a per-instance override always wins over the catalog.

use std::collections::HashMap;

/// Message key of the overflow trigger's accessible name.
pub const SHOW_MORE_BUTTON_ARIA_LABEL: &str = "i18nStrings.showMoreButtonAriaLabel";

/// Messages keyed by component name, then by message key.
///
/// ```ignore
/// let catalog = I18nCatalog::new()
///     .with_message("button-group", SHOW_MORE_BUTTON_ARIA_LABEL, "Show more");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct I18nCatalog {
    messages: HashMap<String, HashMap<String, String>>,
}

impl I18nCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) one message.
    pub fn with_message(
        mut self,
        component: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.insert(component, key, value);
        self
    }

    pub fn insert(
        &mut self,
        component: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.messages
            .entry(component.into())
            .or_default()
            .insert(key.into(), value.into());
    }

    pub fn get(&self, component: &str, key: &str) -> Option<&str> {
        self.messages
            .get(component)
            .and_then(|messages| messages.get(key))
            .map(String::as_str)
    }
}

/// Resolve a label: `override_value` first, then the catalog entry.
pub fn resolve_label(
    catalog: &I18nCatalog,
    component: &str,
    key: &str,
    override_value: Option<&str>,
) -> Option<String> {
    override_value
        .or_else(|| catalog.get(component, key))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> I18nCatalog {
        I18nCatalog::new().with_message("button-group", SHOW_MORE_BUTTON_ARIA_LABEL, "Show more")
    }

    #[test]
    fn catalog_value_used_without_override() {
        let label = resolve_label(&catalog(), "button-group", SHOW_MORE_BUTTON_ARIA_LABEL, None);
        assert_eq!(label.as_deref(), Some("Show more"));
    }

    #[test]
    fn override_beats_catalog() {
        let label = resolve_label(
            &catalog(),
            "button-group",
            SHOW_MORE_BUTTON_ARIA_LABEL,
            Some("Show more from i18nStrings"),
        );
        assert_eq!(label.as_deref(), Some("Show more from i18nStrings"));
    }

    #[test]
    fn missing_everywhere_is_none() {
        assert_eq!(resolve_label(&catalog(), "table", "expandButtonLabel", None), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn catalog_reads_nested_json() {
        let json = r#"{"button-group": {"i18nStrings.showMoreButtonAriaLabel": "Mehr"}}"#;
        let catalog: I18nCatalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.get("button-group", SHOW_MORE_BUTTON_ARIA_LABEL), Some("Mehr"));
    }
}
