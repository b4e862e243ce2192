//! Item model for action bars: single items, named groups, and validation.

use std::collections::HashSet;

/// A single actionable item.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Item {
    /// Identifier reported in click events and accepted by focus requests.
    pub id: String,
    /// Label shown inline and in the overflow menu.
    pub text: String,
    /// Icon name. Rendered through [`icon_glyph`] in the terminal.
    #[cfg_attr(feature = "serde", serde(default))]
    pub icon_name: String,
    /// Feedback shown under the control after it is clicked.
    #[cfg_attr(feature = "serde", serde(default))]
    pub action_popover_text: Option<String>,
    /// Whether the action behind this item is in progress.
    #[cfg_attr(feature = "serde", serde(default))]
    pub loading: bool,
    /// Text announced while `loading` is set.
    #[cfg_attr(feature = "serde", serde(default))]
    pub loading_text: Option<String>,
    /// Disabled items render dimmed and never fire click events.
    #[cfg_attr(feature = "serde", serde(default))]
    pub disabled: bool,
}

impl Item {
    /// Create an item with the given id and label.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            ..Self::default()
        }
    }

    /// Set the icon name.
    pub fn with_icon(mut self, icon_name: impl Into<String>) -> Self {
        self.icon_name = icon_name.into();
        self
    }

    /// Set the feedback text shown after a click.
    pub fn with_popover(mut self, text: impl Into<String>) -> Self {
        self.action_popover_text = Some(text.into());
        self
    }

    /// Mark the item as loading, with optional announcement text.
    pub fn with_loading(mut self, loading_text: Option<String>) -> Self {
        self.loading = true;
        self.loading_text = loading_text;
        self
    }

    /// Set whether the item is disabled.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// A named group of items, treated as one unit when overflowing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Group {
    pub id: String,
    pub text: String,
    pub items: Vec<Item>,
}

impl Group {
    pub fn new(id: impl Into<String>, text: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            items,
        }
    }
}

/// One element of the input sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum ItemOrGroup {
    // Group first: a record with `items` must not be read as a plain item.
    Group(Group),
    Item(Item),
}

impl ItemOrGroup {
    pub fn id(&self) -> &str {
        match self {
            ItemOrGroup::Item(item) => &item.id,
            ItemOrGroup::Group(group) => &group.id,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            ItemOrGroup::Item(item) => &item.text,
            ItemOrGroup::Group(group) => &group.text,
        }
    }

    /// The leaf items this element renders: itself, or the group's members.
    pub fn leaves(&self) -> &[Item] {
        match self {
            ItemOrGroup::Item(item) => std::slice::from_ref(item),
            ItemOrGroup::Group(group) => &group.items,
        }
    }

    /// Whether `id` names this element or one of its members.
    pub fn contains_id(&self, id: &str) -> bool {
        self.id() == id || self.leaves().iter().any(|item| item.id == id)
    }
}

impl From<Item> for ItemOrGroup {
    fn from(item: Item) -> Self {
        ItemOrGroup::Item(item)
    }
}

impl From<Group> for ItemOrGroup {
    fn from(group: Group) -> Self {
        ItemOrGroup::Group(group)
    }
}

/// Errors reported by [`validate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ItemError {
    /// An item or group has an empty id.
    #[error("item or group with text {text:?} has an empty id")]
    EmptyId { text: String },
    /// Two elements share an id.
    #[error("duplicate id {id:?}")]
    DuplicateId { id: String },
}

/// Every id in sequence order: each element, then its members.
pub fn ids(items: &[ItemOrGroup]) -> impl Iterator<Item = &str> {
    items.iter().flat_map(|element| {
        let members: &[Item] = match element {
            ItemOrGroup::Item(_) => &[],
            ItemOrGroup::Group(group) => &group.items,
        };
        std::iter::once(element.id()).chain(members.iter().map(|item| item.id.as_str()))
    })
}

/// Ids that appear more than once, each reported once, in first-repeat order.
pub fn duplicate_ids(items: &[ItemOrGroup]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    ids(items)
        .filter(|id| !seen.insert(*id) && reported.insert(*id))
        .collect()
}

/// Check that every id is non-empty and unique across the flattened set.
pub fn validate(items: &[ItemOrGroup]) -> Result<(), ItemError> {
    for element in items {
        let members: &[Item] = match element {
            ItemOrGroup::Item(_) => &[],
            ItemOrGroup::Group(group) => &group.items,
        };
        if element.id().is_empty() {
            return Err(ItemError::EmptyId {
                text: element.text().to_string(),
            });
        }
        if let Some(item) = members.iter().find(|item| item.id.is_empty()) {
            return Err(ItemError::EmptyId {
                text: item.text.clone(),
            });
        }
    }
    match duplicate_ids(items).first() {
        Some(id) => Err(ItemError::DuplicateId { id: id.to_string() }),
        None => Ok(()),
    }
}

/// Find the first leaf item with the given id, in sequence order.
pub fn find_item<'a>(items: &'a [ItemOrGroup], id: &str) -> Option<&'a Item> {
    items
        .iter()
        .flat_map(ItemOrGroup::leaves)
        .find(|item| item.id == id)
}

/// Terminal glyph for a handful of well-known icon names.
///
/// Unknown names render as a bullet so the control still has a visible mark.
pub fn icon_glyph(icon_name: &str) -> &'static str {
    match icon_name {
        "copy" => "⧉",
        "edit" => "✎",
        "file-open" => "▤",
        "search" => "⌕",
        "upload" => "↑",
        "download" => "↓",
        "thumbs-up" => "+",
        "thumbs-down" => "-",
        "ellipsis" => "⋯",
        "settings" => "⚙",
        "remove" => "✕",
        "add-plus" => "+",
        "refresh" => "↻",
        "" => "",
        _ => "•",
    }
}
