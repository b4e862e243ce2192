//! Splits an action sequence into inline elements and overflow elements.
//!
//! The split is a pure function of `(items, limit)` and is recomputed
//! whenever either changes. Elements keep their original order: the inline
//! part is always a prefix of the input and the overflow part is the rest.

use crate::item::{Item, ItemOrGroup};

/// Number of inline slots an element occupies.
///
/// A standalone item takes one slot. An inline group shows every member, so
/// it takes one slot per member (and at least one, so an empty group can
/// never sneak inline at `limit == 0`).
pub fn slot_cost(element: &ItemOrGroup) -> usize {
    match element {
        ItemOrGroup::Item(_) => 1,
        ItemOrGroup::Group(group) => group.items.len().max(1),
    }
}

/// Total slot cost of the whole sequence.
pub fn total_cost(items: &[ItemOrGroup]) -> usize {
    items.iter().map(slot_cost).sum()
}

/// Index of the first element that goes to overflow.
///
/// Equal to `items.len()` when everything fits.
pub fn split_index(items: &[ItemOrGroup], limit: i64) -> usize {
    if limit <= 0 {
        return 0;
    }
    let limit = usize::try_from(limit).unwrap_or(usize::MAX);
    let mut used = 0usize;
    for (index, element) in items.iter().enumerate() {
        used = used.saturating_add(slot_cost(element));
        if used > limit {
            return index;
        }
    }
    items.len()
}

/// The result of splitting a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition<'a> {
    inline: &'a [ItemOrGroup],
    overflow: &'a [ItemOrGroup],
}

/// Where an id lives in a [`Partition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Rendered in the row. `leaf` is the index among inline leaf controls.
    Inline { leaf: usize },
    /// Reachable only through the overflow menu.
    Overflow,
}

/// Split `items` so the inline part costs at most `limit` slots.
///
/// Walks from the start and stops at the first element that does not fit;
/// that element and everything after it overflow. A `limit` of zero or less
/// sends everything to overflow.
pub fn resolve(items: &[ItemOrGroup], limit: i64) -> Partition<'_> {
    let (inline, overflow) = items.split_at(split_index(items, limit));
    tracing::trace!(
        limit,
        inline = inline.len(),
        overflow = overflow.len(),
        "resolved overflow partition"
    );
    Partition { inline, overflow }
}

impl<'a> Partition<'a> {
    /// Elements rendered in the row, in order.
    pub fn inline(&self) -> &'a [ItemOrGroup] {
        self.inline
    }

    /// Elements moved to the overflow menu, in order.
    pub fn overflow(&self) -> &'a [ItemOrGroup] {
        self.overflow
    }

    /// Whether an overflow trigger should exist at all.
    pub fn has_overflow(&self) -> bool {
        !self.overflow.is_empty()
    }

    /// Top-level inline elements; an inline group counts once.
    pub fn slot_count(&self) -> usize {
        self.inline.len()
    }

    /// Inline slots consumed; an inline group counts once per member.
    pub fn inline_cost(&self) -> usize {
        total_cost(self.inline)
    }

    /// Leaf controls rendered in the row; an inline group counts its members.
    pub fn visible_item_count(&self) -> usize {
        self.inline.iter().map(|element| element.leaves().len()).sum()
    }

    /// Inline leaf controls in render order.
    pub fn inline_leaves(&self) -> impl Iterator<Item = &'a Item> + 'a {
        self.inline.iter().flat_map(ItemOrGroup::leaves)
    }

    /// Locate `id`, first occurrence in sequence order.
    ///
    /// An inline group resolves to its first member's control; an empty
    /// inline group renders no control and resolves to `None`. Ids nested
    /// inside an overflowed group resolve to [`Placement::Overflow`].
    pub fn locate(&self, id: &str) -> Option<Placement> {
        let mut leaf = 0;
        for element in self.inline {
            let members = element.leaves();
            if element.id() == id {
                return (!members.is_empty()).then_some(Placement::Inline { leaf });
            }
            if let Some(offset) = members.iter().position(|item| item.id == id) {
                return Some(Placement::Inline {
                    leaf: leaf + offset,
                });
            }
            leaf += members.len();
        }
        self.overflow
            .iter()
            .any(|element| element.contains_id(id))
            .then_some(Placement::Overflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::fixtures::items1;
    use crate::item::Group;
    use proptest::prelude::*;

    fn ids(elements: &[ItemOrGroup]) -> Vec<&str> {
        elements.iter().map(ItemOrGroup::id).collect()
    }

    #[test]
    fn fixture_limit_nine_keeps_everything_inline() {
        let items = items1();
        let p = resolve(&items, 9);
        assert_eq!(p.visible_item_count(), 9);
        assert_eq!(p.slot_count(), 6);
        assert!(!p.has_overflow());
    }

    #[test]
    fn fixture_limit_eight_moves_misc() {
        let items = items1();
        let p = resolve(&items, 8);
        assert_eq!(p.visible_item_count(), 6);
        assert_eq!(ids(p.overflow()), vec!["misc"]);
    }

    #[test]
    fn fixture_limit_five_moves_search_and_misc() {
        let items = items1();
        let p = resolve(&items, 5);
        assert_eq!(p.visible_item_count(), 5);
        assert_eq!(ids(p.overflow()), vec!["search", "misc"]);
    }

    #[test]
    fn fixture_small_limits_overflow_everything() {
        let items = items1();
        for limit in [-3, 0, 1] {
            let p = resolve(&items, limit);
            assert_eq!(p.visible_item_count(), 0, "limit {limit}");
            assert_eq!(p.overflow().len(), 6, "limit {limit}");
        }
    }

    #[test]
    fn smaller_element_is_not_pulled_back_after_split() {
        // "big" does not fit at limit 2, so "small" stays in overflow too.
        let items: Vec<ItemOrGroup> = vec![
            Item::new("a", "A").into(),
            Group::new("big", "Big", vec![Item::new("b1", "B1"), Item::new("b2", "B2")]).into(),
            Item::new("small", "Small").into(),
        ];
        let p = resolve(&items, 2);
        assert_eq!(ids(p.inline()), vec!["a"]);
        assert_eq!(ids(p.overflow()), vec!["big", "small"]);
    }

    #[test]
    fn empty_group_costs_one_slot() {
        let items: Vec<ItemOrGroup> = vec![Group::new("empty", "Empty", vec![]).into()];
        assert_eq!(resolve(&items, 0).slot_count(), 0);
        assert_eq!(resolve(&items, 1).slot_count(), 1);
    }

    #[test]
    fn huge_limit_does_not_overflow_counter() {
        let items = items1();
        assert!(!resolve(&items, i64::MAX).has_overflow());
    }

    #[test]
    fn locate_inline_leaf_indices() {
        let items = items1();
        let p = resolve(&items, 5);
        assert_eq!(p.locate("feedback"), Some(Placement::Inline { leaf: 0 }));
        assert_eq!(p.locate("dislike"), Some(Placement::Inline { leaf: 1 }));
        assert_eq!(p.locate("copy"), Some(Placement::Inline { leaf: 2 }));
        // First occurrence of a duplicated id wins.
        assert_eq!(p.locate("edit"), Some(Placement::Inline { leaf: 3 }));
    }

    #[test]
    fn locate_overflow_and_nested_members() {
        let items = items1();
        let p = resolve(&items, 5);
        assert_eq!(p.locate("search"), Some(Placement::Overflow));
        assert_eq!(p.locate("misc"), Some(Placement::Overflow));
        assert_eq!(p.locate("upload"), Some(Placement::Overflow));
        assert_eq!(p.locate("nope"), None);
    }

    #[test]
    fn locate_empty_inline_group_has_no_control() {
        let items: Vec<ItemOrGroup> = vec![
            Group::new("empty", "Empty", vec![]).into(),
            Item::new("x", "X").into(),
        ];
        assert_eq!(resolve(&items, 1).locate("empty"), None);
        assert_eq!(resolve(&items, 2).locate("empty"), None);
        assert_eq!(resolve(&items, 2).locate("x"), Some(Placement::Inline { leaf: 0 }));
        // Once overflowed the group is reachable through the trigger.
        assert_eq!(resolve(&items, 0).locate("empty"), Some(Placement::Overflow));
    }

    fn arb_items() -> impl Strategy<Value = Vec<ItemOrGroup>> {
        prop::collection::vec(0usize..4, 0..8).prop_map(|shape| {
            shape
                .into_iter()
                .enumerate()
                .map(|(i, members)| {
                    if members == 0 {
                        Item::new(format!("i{i}"), "x").into()
                    } else {
                        let items = (0..members)
                            .map(|m| Item::new(format!("g{i}m{m}"), "y"))
                            .collect();
                        Group::new(format!("g{i}"), "g", items).into()
                    }
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn inline_then_overflow_rebuilds_input(items in arb_items(), limit in -3i64..20) {
            let p = resolve(&items, limit);
            let rebuilt: Vec<_> = p.inline().iter().chain(p.overflow()).cloned().collect();
            prop_assert_eq!(rebuilt, items.clone());
            prop_assert!(p.inline_cost() as i64 <= limit.max(0));
        }

        #[test]
        fn limit_at_or_above_total_has_no_overflow(items in arb_items(), extra in 0i64..5) {
            let p = resolve(&items, total_cost(&items) as i64 + extra);
            prop_assert!(!p.has_overflow());
        }

        #[test]
        fn non_positive_limit_has_empty_inline(items in arb_items(), limit in -5i64..=0) {
            let p = resolve(&items, limit);
            prop_assert!(p.inline().is_empty());
            prop_assert_eq!(p.has_overflow(), !items.is_empty());
        }

        #[test]
        fn raising_limit_moves_at_most_one_element(items in arb_items(), limit in -1i64..20) {
            let before = resolve(&items, limit).slot_count();
            let after = resolve(&items, limit + 1).slot_count();
            prop_assert!(after == before || after == before + 1);
        }

        #[test]
        fn plain_items_fill_exactly_min_limit(n in 0usize..10, limit in 0i64..15) {
            let items: Vec<ItemOrGroup> =
                (0..n).map(|i| Item::new(format!("i{i}"), "x").into()).collect();
            let p = resolve(&items, limit);
            prop_assert_eq!(p.slot_count(), n.min(limit as usize));
        }
    }
}
