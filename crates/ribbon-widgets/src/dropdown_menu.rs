//! Dropdown menu behind an icon trigger.
//!
//! The trigger is a single small control; activating it opens a bordered
//! overlay listing [`MenuEntry`] values. Group entries render as a heading
//! followed by their (indented) items; headings are not selectable, and
//! neither are disabled items. Activating an entry fires a cancelable click
//! whose default follow-up is closing the menu.

use crate::events::{fire_cancelable_event, CancelableHandler, ItemClickDetail};
use crate::item::icon_glyph;
use crate::key::MenuKeyBindings;
use crate::loading::LoadingIndicator;
use crate::menu::{MenuEntry, MenuItem};
use crate::overlay::{anchored, render_overlay};
use crate::text::{display_width, truncate};
use crossterm::event::KeyEvent;
use ribbon_core::command::Command;
use ribbon_core::component::Component;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Columns taken by the trigger control.
pub const TRIGGER_WIDTH: u16 = 3;

/// Style configuration for the dropdown menu.
#[derive(Debug, Clone)]
pub struct DropdownMenuStyle {
    /// Trigger when not focused.
    pub trigger: Style,
    /// Trigger when focused.
    pub trigger_focused: Style,
    /// Unhighlighted items.
    pub item: Style,
    /// The highlighted item.
    pub highlighted_item: Style,
    /// Disabled items.
    pub disabled_item: Style,
    /// Group headings.
    pub heading: Style,
    /// Overlay border.
    pub border: Style,
}

impl Default for DropdownMenuStyle {
    fn default() -> Self {
        Self {
            trigger: Style::default(),
            trigger_focused: Style::default().add_modifier(Modifier::REVERSED),
            item: Style::default(),
            highlighted_item: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            disabled_item: Style::default().fg(Color::DarkGray),
            heading: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            border: Style::default().fg(Color::DarkGray),
        }
    }
}

/// Messages for the dropdown menu.
#[derive(Debug, Clone)]
pub enum Message {
    /// A key press forwarded to the menu (or its trigger while closed).
    KeyPress(KeyEvent),
    Open,
    Close,
    Toggle,
    /// Advance the loading glyph.
    Tick,
    /// Output: an entry was activated.
    ItemClicked(ItemClickDetail),
    /// Output: the menu was closed without activating anything.
    Dismissed,
}

#[derive(Debug, Clone)]
enum Row {
    Heading(String),
    Entry { item: MenuItem, nested: bool },
}

impl Row {
    fn selectable(&self) -> bool {
        matches!(self, Row::Entry { item, .. } if !item.disabled)
    }
}

/// An icon trigger with a dropdown list of entries.
///
/// # Example
///
/// ```ignore
/// use ribbon_widgets::dropdown_menu::DropdownMenu;
/// use ribbon_widgets::menu::{MenuEntry, MenuItem};
///
/// let mut menu = DropdownMenu::new()
///     .with_aria_label("Show more")
///     .with_expand_to_viewport(true);
/// menu.set_entries(entries);
/// ```
pub struct DropdownMenu {
    entries: Vec<MenuEntry>,
    rows: Vec<Row>,
    highlighted: Option<usize>,
    offset: usize,
    max_visible: usize,
    open: bool,
    trigger_focused: bool,
    loading: bool,
    loading_text: Option<String>,
    loading_indicator: LoadingIndicator,
    aria_label: Option<String>,
    expand_to_viewport: bool,
    style: DropdownMenuStyle,
    key_bindings: MenuKeyBindings,
    on_item_click: Option<CancelableHandler<ItemClickDetail>>,
}

impl DropdownMenu {
    /// Create a closed menu with no entries.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            rows: Vec::new(),
            highlighted: None,
            offset: 0,
            max_visible: 8,
            open: false,
            trigger_focused: false,
            loading: false,
            loading_text: None,
            loading_indicator: LoadingIndicator::new(),
            aria_label: None,
            expand_to_viewport: false,
            style: DropdownMenuStyle::default(),
            key_bindings: MenuKeyBindings::default(),
            on_item_click: None,
        }
    }

    /// Accessible name of the trigger.
    pub fn with_aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    /// Let the overlay extend past the area handed to `view`, up to the frame edge.
    pub fn with_expand_to_viewport(mut self, expand: bool) -> Self {
        self.expand_to_viewport = expand;
        self
    }

    /// Maximum number of rows shown before the list scrolls.
    pub fn with_max_visible(mut self, max: usize) -> Self {
        self.max_visible = max.max(1);
        self.ensure_visible();
        self
    }

    pub fn with_style(mut self, style: DropdownMenuStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_key_bindings(mut self, key_bindings: MenuKeyBindings) -> Self {
        self.key_bindings = key_bindings;
        self
    }

    pub fn with_loading_indicator(mut self, indicator: LoadingIndicator) -> Self {
        self.loading_indicator = indicator;
        self
    }

    /// Callback run before the default follow-up of an activation.
    pub fn on_item_click(
        mut self,
        handler: impl FnMut(&mut crate::events::CancelableEvent<ItemClickDetail>) + Send + 'static,
    ) -> Self {
        self.on_item_click = Some(Box::new(handler));
        self
    }

    /// Replace the entries. Keeps the highlight on the same id when it survives.
    pub fn set_entries(&mut self, entries: Vec<MenuEntry>) {
        let previous = self.highlighted_item().map(|item| item.id.clone());
        self.rows = flatten(&entries);
        self.entries = entries;
        self.highlighted = previous
            .and_then(|id| self.row_of(&id))
            .or_else(|| self.open.then(|| self.first_selectable()).flatten());
        self.ensure_visible();
    }

    pub fn set_loading(&mut self, loading: bool, loading_text: Option<String>) {
        self.loading = loading;
        self.loading_text = loading_text;
    }

    pub fn set_aria_label(&mut self, label: Option<String>) {
        self.aria_label = label;
    }

    pub fn set_expand_to_viewport(&mut self, expand: bool) {
        self.expand_to_viewport = expand;
    }

    pub fn set_trigger_focused(&mut self, focused: bool) {
        self.trigger_focused = focused;
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// `aria-expanded` of the trigger.
    pub fn aria_expanded(&self) -> bool {
        self.open
    }

    pub fn aria_label(&self) -> Option<&str> {
        self.aria_label.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn loading_text(&self) -> Option<&str> {
        self.loading_text.as_deref()
    }

    pub fn expands_to_viewport(&self) -> bool {
        self.expand_to_viewport
    }

    /// Open the menu and highlight the first selectable entry.
    pub fn open(&mut self) {
        if !self.open {
            tracing::debug!(entries = self.entries.len(), "opening dropdown menu");
        }
        self.open = true;
        self.highlighted = self.first_selectable();
        self.offset = 0;
        self.ensure_visible();
    }

    pub fn close(&mut self) {
        self.open = false;
        self.highlighted = None;
        self.offset = 0;
    }

    /// The highlighted entry, while open.
    pub fn highlighted_item(&self) -> Option<&MenuItem> {
        match self.rows.get(self.highlighted?) {
            Some(Row::Entry { item, .. }) => Some(item),
            _ => None,
        }
    }

    /// Find a rendered item by id. Only open menus render their items.
    pub fn find_item_by_id(&self, id: &str) -> Option<&MenuItem> {
        if !self.open {
            return None;
        }
        self.rows.iter().find_map(|row| match row {
            Row::Entry { item, .. } if item.id == id => Some(item),
            _ => None,
        })
    }

    /// Highlight the entry with `id` if it is selectable.
    pub fn highlight(&mut self, id: &str) {
        if let Some(row) = self.row_of(id) {
            self.highlighted = Some(row);
            self.ensure_visible();
        }
    }

    /// Process a message, running `handler` before any click follow-up.
    ///
    /// Owners that keep the click callback themselves pass it here; the
    /// menu's own callback is used by [`Component::update`].
    pub fn update_with_handler(
        &mut self,
        msg: Message,
        handler: Option<&mut CancelableHandler<ItemClickDetail>>,
    ) -> Command<Message> {
        match msg {
            Message::KeyPress(key) if !self.open => {
                if self.key_bindings.activate.matches(&key) || self.key_bindings.down.matches(&key) {
                    self.open();
                }
                Command::none()
            }
            Message::KeyPress(key) => {
                let kb = &self.key_bindings;
                if kb.close.matches(&key) {
                    self.close();
                    Command::message(Message::Dismissed)
                } else if kb.up.matches(&key) {
                    self.step(false);
                    Command::none()
                } else if kb.down.matches(&key) {
                    self.step(true);
                    Command::none()
                } else if kb.first.matches(&key) {
                    self.highlighted = self.first_selectable();
                    self.ensure_visible();
                    Command::none()
                } else if kb.last.matches(&key) {
                    self.highlighted = self.rows.iter().rposition(Row::selectable);
                    self.ensure_visible();
                    Command::none()
                } else if kb.activate.matches(&key) {
                    self.activate(handler)
                } else {
                    Command::none()
                }
            }
            Message::Open => {
                self.open();
                Command::none()
            }
            Message::Close => {
                self.close();
                Command::none()
            }
            Message::Toggle => {
                if self.open {
                    self.close();
                } else {
                    self.open();
                }
                Command::none()
            }
            Message::Tick => {
                if self.loading {
                    self.loading_indicator.tick();
                }
                Command::none()
            }
            Message::ItemClicked(_) | Message::Dismissed => Command::none(),
        }
    }

    fn activate(&mut self, handler: Option<&mut CancelableHandler<ItemClickDetail>>) -> Command<Message> {
        let Some(item) = self.highlighted_item() else {
            return Command::none();
        };
        let detail = ItemClickDetail::new(item.id.clone());
        if fire_cancelable_event(handler, detail.clone()) {
            self.close();
        } else {
            tracing::debug!(id = %detail.id, "menu click default prevented, keeping menu open");
        }
        Command::message(Message::ItemClicked(detail))
    }

    fn step(&mut self, forward: bool) {
        let len = self.rows.len();
        if len == 0 {
            return;
        }
        let start = match self.highlighted {
            Some(row) => row,
            None if forward => len - 1,
            None => 0,
        };
        for step in 1..=len {
            let row = if forward {
                (start + step) % len
            } else {
                (start + len - step % len) % len
            };
            if self.rows[row].selectable() {
                self.highlighted = Some(row);
                break;
            }
        }
        self.ensure_visible();
    }

    fn first_selectable(&self) -> Option<usize> {
        self.rows.iter().position(Row::selectable)
    }

    fn row_of(&self, id: &str) -> Option<usize> {
        self.rows
            .iter()
            .position(|row| matches!(row, Row::Entry { item, .. } if item.id == id && !item.disabled))
    }

    fn ensure_visible(&mut self) {
        let Some(row) = self.highlighted else {
            return;
        };
        // Keep the group heading on screen with its first item when possible.
        let top = if row > 0 && matches!(self.rows[row - 1], Row::Heading(_)) {
            row - 1
        } else {
            row
        };
        if top < self.offset {
            self.offset = top;
        } else if row >= self.offset + self.max_visible {
            self.offset = row + 1 - self.max_visible;
        }
    }

    fn row_label(row: &Row) -> String {
        match row {
            Row::Heading(text) => text.clone(),
            Row::Entry { item, nested } => {
                let indent = if *nested { "  " } else { "" };
                let glyph = icon_glyph(&item.icon_name);
                if glyph.is_empty() {
                    format!("{indent}{}", item.text)
                } else {
                    format!("{indent}{glyph} {}", item.text)
                }
            }
        }
    }

    /// Render the trigger into `area` (at most [`TRIGGER_WIDTH`] columns).
    pub fn render_trigger(&self, frame: &mut Frame, area: Rect, focused: bool) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let glyph = if self.loading {
            self.loading_indicator.glyph()
        } else {
            icon_glyph("ellipsis")
        };
        let style = if focused {
            self.style.trigger_focused
        } else if self.loading {
            self.loading_indicator.style()
        } else {
            self.style.trigger
        };
        let area = Rect {
            width: area.width.min(TRIGGER_WIDTH),
            height: 1,
            ..area
        };
        frame.render_widget(Paragraph::new(Span::styled(format!(" {glyph} "), style)), area);
    }

    /// Render the open overlay next to `anchor`, confined to `bounds`.
    pub fn render_popup(&self, frame: &mut Frame, anchor: Rect, bounds: Rect) {
        if !self.open || self.rows.is_empty() {
            return;
        }
        let visible = self.rows.len().min(self.max_visible);
        let content_width = self
            .rows
            .iter()
            .map(|row| display_width(&Self::row_label(row)))
            .max()
            .unwrap_or(0);
        // 2 for the highlight prefix, 2 for borders.
        let width = u16::try_from(content_width.saturating_add(4).max(8)).unwrap_or(u16::MAX);
        let height = u16::try_from(visible).unwrap_or(u16::MAX).saturating_add(2);
        let (popup, _) = anchored(anchor, width, height, bounds);
        if popup.height < 3 || popup.width < 4 {
            return; // not enough space
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.style.border);
        let inner = render_overlay(frame, popup, Some(&block));
        let text_width = inner.width.saturating_sub(2) as usize;

        for (i, row) in self
            .rows
            .iter()
            .enumerate()
            .skip(self.offset)
            .take(inner.height as usize)
        {
            let row_area = Rect {
                y: inner.y + (i - self.offset) as u16,
                height: 1,
                ..inner
            };
            let is_highlighted = self.highlighted == Some(i);
            let (prefix, style) = match row {
                Row::Heading(_) => ("", self.style.heading),
                Row::Entry { item, .. } if item.disabled => ("  ", self.style.disabled_item),
                Row::Entry { .. } if is_highlighted => ("▸ ", self.style.highlighted_item),
                Row::Entry { .. } => ("  ", self.style.item),
            };
            let label = truncate(&Self::row_label(row), text_width, "…");
            let line = Line::from(vec![Span::raw(prefix), Span::styled(label, style)]);
            frame.render_widget(Paragraph::new(line), row_area);
        }
    }
}

fn flatten(entries: &[MenuEntry]) -> Vec<Row> {
    let mut rows = Vec::new();
    for entry in entries {
        match entry {
            MenuEntry::Item(item) => rows.push(Row::Entry {
                item: item.clone(),
                nested: false,
            }),
            MenuEntry::Group { text, items, .. } => {
                rows.push(Row::Heading(text.clone()));
                rows.extend(items.iter().map(|item| Row::Entry {
                    item: item.clone(),
                    nested: true,
                }));
            }
        }
    }
    rows
}

impl Default for DropdownMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for DropdownMenu {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        let mut handler = self.on_item_click.take();
        let cmd = self.update_with_handler(msg, handler.as_mut());
        self.on_item_click = handler;
        cmd
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        let trigger = Rect {
            width: area.width.min(TRIGGER_WIDTH),
            height: area.height.min(1),
            ..area
        };
        self.render_trigger(frame, trigger, self.trigger_focused);
        let bounds = if self.expand_to_viewport {
            frame.area()
        } else {
            area
        };
        self.render_popup(frame, trigger, bounds);
    }

    fn focused(&self) -> bool {
        self.trigger_focused || self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::press;
    use crossterm::event::KeyCode;
    use ribbon_core::testing::render_component_string;
    use std::sync::{Arc, Mutex};

    fn item(id: &str, text: &str) -> MenuItem {
        MenuItem {
            id: id.into(),
            text: text.into(),
            icon_name: String::new(),
            disabled: false,
        }
    }

    fn entries() -> Vec<MenuEntry> {
        vec![
            MenuEntry::Item(item("search", "Search")),
            MenuEntry::Group {
                id: "misc".into(),
                text: "Misc".into(),
                items: vec![item("edit", "Edit"), item("open", "Open"), item("upload", "Upload")],
            },
        ]
    }

    fn open_menu() -> DropdownMenu {
        let mut menu = DropdownMenu::new();
        menu.set_entries(entries());
        menu.open();
        menu
    }

    fn highlighted(menu: &DropdownMenu) -> Option<&str> {
        menu.highlighted_item().map(|item| item.id.as_str())
    }

    #[test]
    fn new_is_closed() {
        let menu = DropdownMenu::new();
        assert!(!menu.is_open());
        assert!(!menu.aria_expanded());
        assert!(menu.entries().is_empty());
    }

    #[test]
    fn items_only_findable_while_open() {
        let mut menu = DropdownMenu::new();
        menu.set_entries(entries());
        assert!(menu.find_item_by_id("edit").is_none());
        menu.open();
        assert_eq!(menu.find_item_by_id("edit").unwrap().text, "Edit");
    }

    #[test]
    fn down_skips_headings_and_wraps() {
        let mut menu = open_menu();
        assert_eq!(highlighted(&menu), Some("search"));
        menu.update(Message::KeyPress(press(KeyCode::Down)));
        assert_eq!(highlighted(&menu), Some("edit"));
        menu.update(Message::KeyPress(press(KeyCode::Down)));
        menu.update(Message::KeyPress(press(KeyCode::Down)));
        assert_eq!(highlighted(&menu), Some("upload"));
        menu.update(Message::KeyPress(press(KeyCode::Down)));
        assert_eq!(highlighted(&menu), Some("search"));
    }

    #[test]
    fn up_wraps_to_last() {
        let mut menu = open_menu();
        menu.update(Message::KeyPress(press(KeyCode::Up)));
        assert_eq!(highlighted(&menu), Some("upload"));
    }

    #[test]
    fn disabled_items_are_skipped() {
        let mut menu = DropdownMenu::new();
        let mut disabled = item("b", "B");
        disabled.disabled = true;
        menu.set_entries(vec![
            MenuEntry::Item(item("a", "A")),
            MenuEntry::Item(disabled),
            MenuEntry::Item(item("c", "C")),
        ]);
        menu.open();
        menu.update(Message::KeyPress(press(KeyCode::Down)));
        assert_eq!(highlighted(&menu), Some("c"));
    }

    #[test]
    fn enter_on_closed_trigger_opens() {
        let mut menu = DropdownMenu::new();
        menu.set_entries(entries());
        menu.update(Message::KeyPress(press(KeyCode::Enter)));
        assert!(menu.is_open());
    }

    #[test]
    fn activation_emits_click_and_closes() {
        let mut menu = open_menu();
        menu.highlight("upload");
        let cmd = menu.update(Message::KeyPress(press(KeyCode::Enter)));
        match cmd.into_message() {
            Some(Message::ItemClicked(detail)) => assert_eq!(detail.id, "upload"),
            other => panic!("expected ItemClicked, got {other:?}"),
        }
        assert!(!menu.is_open());
    }

    #[test]
    fn prevented_click_keeps_menu_open() {
        let clicks = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&clicks);
        let mut menu = DropdownMenu::new().on_item_click(move |event| {
            sink.lock().unwrap().push(event.detail().id.clone());
            event.prevent_default();
        });
        menu.set_entries(entries());
        menu.open();
        menu.update(Message::KeyPress(press(KeyCode::Enter)));
        assert!(menu.is_open());
        assert_eq!(*clicks.lock().unwrap(), vec!["search"]);
    }

    #[test]
    fn esc_dismisses() {
        let mut menu = open_menu();
        let cmd = menu.update(Message::KeyPress(press(KeyCode::Esc)));
        assert!(matches!(cmd.into_message(), Some(Message::Dismissed)));
        assert!(!menu.is_open());
    }

    #[test]
    fn set_entries_keeps_highlight_by_id() {
        let mut menu = open_menu();
        menu.highlight("open");
        let mut reordered = entries();
        reordered.reverse();
        menu.set_entries(reordered);
        assert_eq!(highlighted(&menu), Some("open"));
    }

    #[test]
    fn scroll_keeps_highlight_visible() {
        let mut menu = DropdownMenu::new().with_max_visible(2);
        menu.set_entries(entries());
        menu.open();
        menu.highlight("upload");
        // Rows: search, Misc, edit, open, upload
        assert_eq!(menu.offset, 3);
        menu.highlight("edit");
        assert_eq!(menu.offset, 1);
    }

    #[test]
    fn tick_advances_only_while_loading() {
        let mut menu = DropdownMenu::new();
        let before = menu.loading_indicator.glyph();
        menu.update(Message::Tick);
        assert_eq!(menu.loading_indicator.glyph(), before);
        menu.set_loading(true, Some("Saving".into()));
        menu.update(Message::Tick);
        assert_ne!(menu.loading_indicator.glyph(), before);
        assert_eq!(menu.loading_text(), Some("Saving"));
    }

    #[test]
    fn renders_trigger_and_grouped_rows() {
        let mut menu = DropdownMenu::new();
        menu.set_entries(entries());
        menu.open();
        let out = render_component_string(&menu, 20, 8);
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with(" ⋯ "));
        assert!(lines[2].contains("▸ Search"));
        assert!(lines[3].contains("Misc"));
        assert!(lines[4].contains("    Edit"));
    }

    #[test]
    fn oversized_entry_fits_the_bounds() {
        let long = "y".repeat(70_000);
        let mut menu = DropdownMenu::new();
        menu.set_entries(vec![MenuEntry::Item(item("long", &long))]);
        menu.open();
        let out = render_component_string(&menu, 20, 4);
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[2].contains("▸ yyyy"));
        assert!(lines[2].contains('…'));
    }

    #[test]
    fn closed_menu_renders_only_trigger() {
        let mut menu = DropdownMenu::new();
        menu.set_entries(entries());
        let out = render_component_string(&menu, 10, 3);
        assert!(!out.contains("Search"));
    }
}
