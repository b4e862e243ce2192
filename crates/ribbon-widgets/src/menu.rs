//! Adapts overflowed action-bar elements to dropdown menu entries.

use crate::item::{Item, ItemOrGroup};

/// One entry of a dropdown menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    /// A selectable action.
    Item(MenuItem),
    /// A labelled submenu. Children are never groups themselves.
    Group {
        id: String,
        text: String,
        items: Vec<MenuItem>,
    },
}

/// A selectable menu action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub id: String,
    pub text: String,
    pub icon_name: String,
    pub disabled: bool,
}

impl From<&Item> for MenuItem {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id.clone(),
            text: item.text.clone(),
            icon_name: item.icon_name.clone(),
            disabled: item.disabled,
        }
    }
}

impl MenuEntry {
    pub fn id(&self) -> &str {
        match self {
            MenuEntry::Item(item) => &item.id,
            MenuEntry::Group { id, .. } => id,
        }
    }
}

/// Map overflowed elements to menu entries, one entry per element.
pub fn to_menu_entries(overflow: &[ItemOrGroup]) -> Vec<MenuEntry> {
    overflow
        .iter()
        .map(|element| match element {
            ItemOrGroup::Item(item) => MenuEntry::Item(item.into()),
            ItemOrGroup::Group(group) => MenuEntry::Group {
                id: group.id.clone(),
                text: group.text.clone(),
                items: group.items.iter().map(MenuItem::from).collect(),
            },
        })
        .collect()
}

/// First item with `loading` set, scanning the whole sequence in order and
/// descending into groups.
pub fn first_loading_item(items: &[ItemOrGroup]) -> Option<&Item> {
    items
        .iter()
        .flat_map(ItemOrGroup::leaves)
        .find(|item| item.loading)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::fixtures::items1;
    use crate::item::Group;
    use crate::overflow::resolve;

    #[test]
    fn overflow_items_and_groups_become_entries() {
        let items = items1();
        let entries = to_menu_entries(resolve(&items, 5).overflow());
        assert_eq!(entries.len(), 2);
        assert!(matches!(&entries[0], MenuEntry::Item(item) if item.id == "search"));
        match &entries[1] {
            MenuEntry::Group { id, text, items } => {
                assert_eq!(id, "misc");
                assert_eq!(text, "Misc");
                let ids: Vec<_> = items.iter().map(|i| i.id.as_str()).collect();
                assert_eq!(ids, vec!["edit", "open", "upload"]);
            }
            other => panic!("expected a group entry, got {other:?}"),
        }
    }

    #[test]
    fn nothing_overflowed_means_no_entries() {
        let items = items1();
        assert!(to_menu_entries(resolve(&items, 9).overflow()).is_empty());
    }

    #[test]
    fn first_loading_item_descends_into_groups() {
        let items: Vec<ItemOrGroup> = vec![
            Item::new("a", "A").into(),
            Group::new(
                "g",
                "G",
                vec![
                    Item::new("g1", "G1"),
                    Item::new("g2", "G2").with_loading(Some("Saving".into())),
                ],
            )
            .into(),
            Item::new("b", "B").with_loading(None).into(),
        ];
        let loading = first_loading_item(&items).unwrap();
        assert_eq!(loading.id, "g2");
        assert_eq!(loading.loading_text.as_deref(), Some("Saving"));
    }

    #[test]
    fn first_loading_item_none_when_idle() {
        assert!(first_loading_item(&items1()).is_none());
    }

    #[test]
    fn disabled_flag_carried_to_menu() {
        let items: Vec<ItemOrGroup> = vec![Item::new("x", "X").with_disabled(true).into()];
        let entries = to_menu_entries(&items);
        assert!(matches!(&entries[0], MenuEntry::Item(item) if item.disabled));
    }
}
