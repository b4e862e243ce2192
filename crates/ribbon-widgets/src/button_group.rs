//! A row of actions that overflows into a "show more" menu.
//!
//! Elements are laid out left to right until the slot `limit` is used up
//! (see [`crate::overflow`]); whatever is left moves into a
//! [`DropdownMenu`] behind a trigger at the end of the row. An inline group
//! shows all of its members inline. The row is a single tab stop: arrow
//! keys move between inline controls and the trigger.
//!
//! Hosts that need to move focus from outside (say, back to the action
//! that was just used) grab a [`FocusController`] with
//! [`ButtonGroup::focus_controller`] and call
//! [`focus`](FocusController::focus) with an item id. Overflowed items
//! forward focus to the trigger.

use crate::dropdown_menu::{self, DropdownMenu, TRIGGER_WIDTH};
use crate::events::{fire_cancelable_event, CancelableEvent, CancelableHandler, ItemClickDetail};
use crate::focus::{FocusController, FocusTarget};
use crate::i18n::{resolve_label, I18nCatalog, SHOW_MORE_BUTTON_ARIA_LABEL};
use crate::item::{self, icon_glyph, Item, ItemError, ItemOrGroup};
use crate::key::ActionBarKeyBindings;
use crate::loading::LoadingIndicator;
use crate::menu::{first_loading_item, to_menu_entries, MenuItem};
use crate::overflow::{self, Partition};
use crate::text::{display_width, truncate};
use crossterm::event::KeyEvent;
use ribbon_core::command::Command;
use ribbon_core::component::Component;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use std::sync::Arc;

/// Component name used for catalog lookups.
pub const COMPONENT_NAME: &str = "button-group";

/// Trigger label used when neither the instance nor the catalog has one.
pub const DEFAULT_SHOW_MORE_LABEL: &str = "Show more";

/// Per-instance label overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct I18nStrings {
    pub show_more_button_aria_label: Option<String>,
}

/// Style configuration for the button group.
#[derive(Debug, Clone)]
pub struct ButtonGroupStyle {
    pub item: Style,
    pub focused_item: Style,
    pub disabled_item: Style,
    /// Divider drawn between a group and its neighbours.
    pub divider: Style,
    /// Feedback text shown under a clicked item.
    pub popover: Style,
}

impl Default for ButtonGroupStyle {
    fn default() -> Self {
        Self {
            item: Style::default(),
            focused_item: Style::default().add_modifier(Modifier::REVERSED),
            disabled_item: Style::default().fg(Color::DarkGray),
            divider: Style::default().fg(Color::DarkGray),
            popover: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::ITALIC),
        }
    }
}

/// Messages for the button group.
#[derive(Debug, Clone)]
pub enum Message {
    /// A key press forwarded to the group.
    KeyPress(KeyEvent),
    /// Move focus to the control that represents this id.
    Focus(String),
    /// Drop focus from the row and close the menu.
    Blur,
    /// Activate an item by id, as a pointer click would.
    Click(String),
    /// Advance loading glyphs.
    Tick,
    /// Messages for the overflow menu.
    Menu(dropdown_menu::Message),
    /// Output: an item was activated, inline or from the menu.
    ItemClicked(ItemClickDetail),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Popover {
    leaf: usize,
    text: String,
}

/// Horizontal placement of one control in the row, relative to the row start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cell {
    target: FocusTarget,
    x: u16,
    width: u16,
}

/// View of the overflow trigger, present only while something overflows.
pub struct ShowMoreButton<'a> {
    menu: &'a DropdownMenu,
    focused: bool,
}

impl<'a> ShowMoreButton<'a> {
    /// Accessible name of the trigger.
    pub fn aria_label(&self) -> &'a str {
        self.menu.aria_label().unwrap_or(DEFAULT_SHOW_MORE_LABEL)
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Whether the menu is open (`aria-expanded`).
    pub fn is_expanded(&self) -> bool {
        self.menu.aria_expanded()
    }

    pub fn is_loading(&self) -> bool {
        self.menu.is_loading()
    }

    pub fn loading_text(&self) -> Option<&'a str> {
        self.menu.loading_text()
    }

    /// Find a menu item by id. Only an open menu has rendered items.
    pub fn find_item_by_id(&self, id: &str) -> Option<&'a MenuItem> {
        self.menu.find_item_by_id(id)
    }
}

/// A row of actions with an overflow menu.
///
/// # Example
///
/// ```ignore
/// use ribbon_widgets::button_group::ButtonGroup;
/// use ribbon_widgets::item::{Group, Item};
///
/// let mut actions = ButtonGroup::new(
///     vec![
///         Item::new("copy", "Copy").with_icon("copy").with_popover("Copied").into(),
///         Item::new("edit", "Edit").with_icon("edit").into(),
///         Group::new("misc", "Misc", vec![Item::new("upload", "Upload")]).into(),
///     ],
///     2,
/// )
/// .with_aria_label("File actions")
/// .on_item_click(|event| tracing::info!(id = %event.detail().id, "clicked"));
///
/// let focus = actions.focus_controller();
/// focus.focus("upload"); // lands on the trigger: "upload" overflowed
/// ```
pub struct ButtonGroup {
    items: Arc<[ItemOrGroup]>,
    limit: i64,
    aria_label: Option<String>,
    i18n_strings: I18nStrings,
    catalog: I18nCatalog,
    focus: FocusController,
    menu: DropdownMenu,
    loading_indicator: LoadingIndicator,
    popover: Option<Popover>,
    style: ButtonGroupStyle,
    key_bindings: ActionBarKeyBindings,
    on_item_click: Option<CancelableHandler<ItemClickDetail>>,
}

impl ButtonGroup {
    /// Create a group showing at most `limit` slots inline.
    ///
    /// Ids are expected to be unique; duplicates are logged and the first
    /// occurrence wins for focus and lookup. Use [`ButtonGroup::try_new`]
    /// to reject them instead.
    pub fn new(items: Vec<ItemOrGroup>, limit: i64) -> Self {
        for id in item::duplicate_ids(&items) {
            tracing::warn!(id, "duplicate action id; first occurrence wins");
        }
        let mut group = Self {
            items: items.into(),
            limit,
            aria_label: None,
            i18n_strings: I18nStrings::default(),
            catalog: I18nCatalog::default(),
            focus: FocusController::new(),
            menu: DropdownMenu::new(),
            loading_indicator: LoadingIndicator::new(),
            popover: None,
            style: ButtonGroupStyle::default(),
            key_bindings: ActionBarKeyBindings::default(),
            on_item_click: None,
        };
        group.refresh();
        group
    }

    /// Like [`ButtonGroup::new`], but fails on empty or duplicate ids.
    pub fn try_new(items: Vec<ItemOrGroup>, limit: i64) -> Result<Self, ItemError> {
        item::validate(&items)?;
        Ok(Self::new(items, limit))
    }

    /// Accessible name of the whole row.
    pub fn with_aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    pub fn with_i18n_strings(mut self, strings: I18nStrings) -> Self {
        self.i18n_strings = strings;
        self.refresh();
        self
    }

    pub fn with_catalog(mut self, catalog: I18nCatalog) -> Self {
        self.catalog = catalog;
        self.refresh();
        self
    }

    /// Let the overflow menu extend past the group's area.
    pub fn with_dropdown_expand_to_viewport(mut self, expand: bool) -> Self {
        self.menu.set_expand_to_viewport(expand);
        self
    }

    pub fn with_style(mut self, style: ButtonGroupStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_key_bindings(mut self, key_bindings: ActionBarKeyBindings) -> Self {
        self.key_bindings = key_bindings;
        self
    }

    /// Replace the overflow menu (to customise its style or key bindings).
    /// Entries, loading state and labels are kept in sync by the group.
    pub fn with_menu(mut self, menu: DropdownMenu) -> Self {
        let expand = self.menu.expands_to_viewport();
        self.menu = menu.with_expand_to_viewport(expand);
        self.refresh();
        self
    }

    /// Callback run for every activation, before the default follow-up.
    ///
    /// Preventing the default suppresses the click feedback of inline items
    /// and keeps the menu open for menu items.
    pub fn on_item_click(
        mut self,
        handler: impl FnMut(&mut CancelableEvent<ItemClickDetail>) + Send + 'static,
    ) -> Self {
        self.on_item_click = Some(Box::new(handler));
        self
    }

    /// Replace the items. Focus is clamped to the new row.
    pub fn set_items(&mut self, items: Vec<ItemOrGroup>) {
        for id in item::duplicate_ids(&items) {
            tracing::warn!(id, "duplicate action id; first occurrence wins");
        }
        self.items = items.into();
        self.popover = None;
        self.refresh();
    }

    /// Change how many slots are shown inline.
    pub fn set_limit(&mut self, limit: i64) {
        if self.limit != limit {
            self.limit = limit;
            self.popover = None;
            self.refresh();
        }
    }

    pub fn set_i18n_strings(&mut self, strings: I18nStrings) {
        self.i18n_strings = strings;
        self.refresh();
    }

    pub fn items(&self) -> &[ItemOrGroup] {
        &self.items
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    pub fn aria_label(&self) -> Option<&str> {
        self.aria_label.as_deref()
    }

    /// The current split of the items.
    pub fn partition(&self) -> Partition<'_> {
        overflow::resolve(&self.items, self.limit)
    }

    /// A handle for focusing items by id. All handles share state.
    pub fn focus_controller(&self) -> FocusController {
        self.focus.clone()
    }

    /// Inline leaf controls in render order.
    pub fn inline_items(&self) -> Vec<&Item> {
        self.partition().inline_leaves().collect()
    }

    /// Find an inline control by item id (first occurrence).
    pub fn find_inline_item_by_id(&self, id: &str) -> Option<&Item> {
        self.partition().inline_leaves().find(|item| item.id == id)
    }

    /// The overflow trigger, or `None` when nothing overflows.
    pub fn show_more_button(&self) -> Option<ShowMoreButton<'_>> {
        self.partition().has_overflow().then(|| ShowMoreButton {
            menu: &self.menu,
            focused: self.focus.target() == Some(FocusTarget::Trigger),
        })
    }

    /// Find an overflow menu item by id. `None` while the menu is closed.
    pub fn menu_item_by_id(&self, id: &str) -> Option<&MenuItem> {
        self.menu.find_item_by_id(id)
    }

    /// Whether the inline control for `id` holds focus.
    pub fn is_inline_focused(&self, id: &str) -> bool {
        let Some(FocusTarget::Inline(leaf)) = self.focus.target() else {
            return false;
        };
        self.partition()
            .inline_leaves()
            .nth(leaf)
            .is_some_and(|item| item.id == id)
    }

    /// Tab index of an inline control (`0` for the row's tab stop, `-1` otherwise).
    pub fn inline_tab_index(&self, id: &str) -> Option<i32> {
        let leaf = self.partition().inline_leaves().position(|item| item.id == id)?;
        Some(self.focus.tab_index(FocusTarget::Inline(leaf)))
    }

    /// Text of the click feedback currently shown, if any.
    pub fn popover_text(&self) -> Option<&str> {
        self.popover.as_ref().map(|p| p.text.as_str())
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu.is_open()
    }

    fn show_more_label(&self) -> String {
        resolve_label(
            &self.catalog,
            COMPONENT_NAME,
            SHOW_MORE_BUTTON_ARIA_LABEL,
            self.i18n_strings.show_more_button_aria_label.as_deref(),
        )
        .unwrap_or_else(|| DEFAULT_SHOW_MORE_LABEL.to_string())
    }

    /// Push the derived state (focus row, menu entries, loading, labels) to
    /// the focus controller and the menu.
    fn refresh(&mut self) {
        let partition = overflow::resolve(&self.items, self.limit);
        tracing::debug!(
            limit = self.limit,
            inline = partition.visible_item_count(),
            overflow = partition.overflow().len(),
            "button group partition"
        );
        let entries = to_menu_entries(partition.overflow());
        let has_overflow = partition.has_overflow();
        let loading = first_loading_item(&self.items)
            .map(|item| (item.loading, item.loading_text.clone()));

        self.focus.sync(Arc::clone(&self.items), self.limit);
        self.menu.set_entries(entries);
        match loading {
            Some((loading, text)) => self.menu.set_loading(loading, text),
            None => self.menu.set_loading(false, None),
        }
        let label = self.show_more_label();
        self.menu.set_aria_label(Some(label));
        if !has_overflow {
            self.menu.close();
        }
    }

    fn click_inline(&mut self, leaf: usize) -> Command<Message> {
        let Some(item) = self.partition().inline_leaves().nth(leaf).cloned() else {
            return Command::none();
        };
        if item.disabled {
            return Command::none();
        }
        let detail = ItemClickDetail::new(item.id.clone());
        let proceed = fire_cancelable_event(self.on_item_click.as_mut(), detail.clone());
        self.popover = match (proceed, item.action_popover_text) {
            (true, Some(text)) => Some(Popover { leaf, text }),
            _ => None,
        };
        Command::message(Message::ItemClicked(detail))
    }

    fn click_overflowed(&mut self, id: &str) -> Command<Message> {
        let partition = self.partition();
        let Some(item) = partition
            .overflow()
            .iter()
            .flat_map(ItemOrGroup::leaves)
            .find(|item| item.id == id)
        else {
            tracing::trace!(id, "click for unknown id ignored");
            return Command::none();
        };
        if item.disabled {
            return Command::none();
        }
        let detail = ItemClickDetail::new(item.id.clone());
        fire_cancelable_event(self.on_item_click.as_mut(), detail.clone());
        Command::message(Message::ItemClicked(detail))
    }

    fn update_menu(&mut self, msg: dropdown_menu::Message) -> Command<Message> {
        let was_open = self.menu.is_open();
        let cmd = self
            .menu
            .update_with_handler(msg, self.on_item_click.as_mut());
        if was_open && !self.menu.is_open() && self.partition().has_overflow() {
            // Closing the menu hands focus back to its trigger.
            self.focus.focus_target(FocusTarget::Trigger);
        }
        let mut out = Vec::new();
        for msg in cmd.into_messages() {
            out.push(match msg {
                dropdown_menu::Message::ItemClicked(detail) => {
                    Command::message(Message::ItemClicked(detail))
                }
                other => Command::message(Message::Menu(other)),
            });
        }
        Command::batch(out)
    }

    fn handle_key(&mut self, key: KeyEvent) -> Command<Message> {
        if self.menu.is_open() {
            return self.update_menu(dropdown_menu::Message::KeyPress(key));
        }
        let kb = &self.key_bindings;
        if kb.prev.matches(&key) {
            self.popover = None;
            self.focus.focus_prev();
        } else if kb.next.matches(&key) {
            self.popover = None;
            self.focus.focus_next();
        } else if kb.first.matches(&key) {
            self.popover = None;
            self.focus.focus_first();
        } else if kb.last.matches(&key) {
            self.popover = None;
            self.focus.focus_last();
        } else if kb.activate.matches(&key) {
            return match self.focus.target() {
                Some(FocusTarget::Inline(leaf)) => self.click_inline(leaf),
                Some(FocusTarget::Trigger) => {
                    self.popover = None;
                    self.update_menu(dropdown_menu::Message::Open)
                }
                None => Command::none(),
            };
        } else if kb.open_menu.matches(&key) && self.focus.target() == Some(FocusTarget::Trigger) {
            self.popover = None;
            return self.update_menu(dropdown_menu::Message::Open);
        }
        Command::none()
    }

    fn control_label(&self, item: &Item) -> String {
        let glyph = if item.loading {
            self.loading_indicator.glyph()
        } else {
            icon_glyph(&item.icon_name)
        };
        if glyph.is_empty() {
            item.text.clone()
        } else {
            format!("{glyph} {}", item.text)
        }
    }

    /// Place every inline control and the trigger along the row.
    fn layout(&self, partition: &Partition<'_>) -> Vec<Cell> {
        let mut cells = Vec::new();
        let mut x: u16 = 0;
        let mut leaf = 0;
        let mut previous_was_group = false;
        for (index, element) in partition.inline().iter().enumerate() {
            let is_group = matches!(element, ItemOrGroup::Group(_));
            if index > 0 {
                x = x.saturating_add(if is_group || previous_was_group { 3 } else { 1 });
            }
            for (member, item) in element.leaves().iter().enumerate() {
                if member > 0 {
                    x = x.saturating_add(1);
                }
                let label = self.control_label(item);
                let width = u16::try_from(display_width(&label)).unwrap_or(u16::MAX);
                cells.push(Cell {
                    target: FocusTarget::Inline(leaf),
                    x,
                    width,
                });
                x = x.saturating_add(width);
                leaf += 1;
            }
            previous_was_group = is_group;
        }
        if partition.has_overflow() {
            if !cells.is_empty() {
                x = x.saturating_add(1);
            }
            cells.push(Cell {
                target: FocusTarget::Trigger,
                x,
                width: TRIGGER_WIDTH,
            });
        }
        cells
    }
}

impl Component for ButtonGroup {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::KeyPress(key) => self.handle_key(key),
            Message::Focus(id) => {
                self.popover = None;
                self.focus.focus(&id);
                Command::none()
            }
            Message::Blur => {
                self.popover = None;
                self.focus.blur();
                self.menu.close();
                Command::none()
            }
            Message::Click(id) => {
                let leaf = self.partition().inline_leaves().position(|item| item.id == id);
                match leaf {
                    Some(leaf) => {
                        self.focus.focus_target(FocusTarget::Inline(leaf));
                        self.click_inline(leaf)
                    }
                    None => self.click_overflowed(&id),
                }
            }
            Message::Tick => {
                self.loading_indicator.tick();
                self.update_menu(dropdown_menu::Message::Tick)
            }
            Message::Menu(msg) => self.update_menu(msg),
            Message::ItemClicked(_) => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let partition = self.partition();
        let cells = self.layout(&partition);
        let target = self.focus.target();
        let leaves: Vec<&Item> = partition.inline_leaves().collect();
        let mut trigger_area = None;

        // Dividers around inline groups.
        let mut leaf = 0;
        for (index, element) in partition.inline().iter().enumerate() {
            let is_group = matches!(element, ItemOrGroup::Group(_));
            let next_is_group = matches!(partition.inline().get(index + 1), Some(ItemOrGroup::Group(_)));
            leaf += element.leaves().len();
            if (is_group || next_is_group) && index + 1 < partition.inline().len() {
                if let Some(cell) = leaf.checked_sub(1).and_then(|last| cells.get(last)) {
                    let x = area
                        .x
                        .saturating_add(cell.x.saturating_add(cell.width).saturating_add(1));
                    if x < area.right() {
                        let divider = Rect::new(x, area.y, 1, 1);
                        frame.render_widget(Paragraph::new(Span::styled("│", self.style.divider)), divider);
                    }
                }
            }
        }

        for cell in &cells {
            let x = area.x.saturating_add(cell.x);
            if x >= area.right() {
                break;
            }
            let width = cell.width.min(area.right() - x);
            let rect = Rect::new(x, area.y, width, 1);
            match cell.target {
                FocusTarget::Inline(leaf) => {
                    let Some(item) = leaves.get(leaf) else {
                        continue;
                    };
                    let style = if target == Some(cell.target) {
                        self.style.focused_item
                    } else if item.disabled {
                        self.style.disabled_item
                    } else {
                        self.style.item
                    };
                    let label = truncate(&self.control_label(item), width as usize, "…");
                    frame.render_widget(Paragraph::new(Span::styled(label, style)), rect);
                }
                FocusTarget::Trigger => {
                    self.menu
                        .render_trigger(frame, rect, target == Some(FocusTarget::Trigger));
                    trigger_area = Some(rect);
                }
            }
        }

        if let Some(popover) = &self.popover {
            if area.height > 1 {
                if let Some(cell) = cells.get(popover.leaf) {
                    let x = area.x.saturating_add(cell.x).min(area.right().saturating_sub(1));
                    let width = area.right() - x;
                    let rect = Rect::new(x, area.y + 1, width, 1);
                    let text = truncate(&popover.text, width as usize, "…");
                    frame.render_widget(Paragraph::new(Span::styled(text, self.style.popover)), rect);
                }
            }
        }

        if let Some(anchor) = trigger_area {
            let bounds = if self.menu.expands_to_viewport() {
                frame.area()
            } else {
                area
            };
            self.menu.render_popup(frame, anchor, bounds);
        }
    }

    fn focused(&self) -> bool {
        self.focus.target().is_some() || self.menu.is_open()
    }
}
