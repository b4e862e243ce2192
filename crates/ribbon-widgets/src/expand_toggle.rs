//! Expand/collapse toggle for expandable table rows.
//!
//! The toggle renders a one-cell caret and carries the accessible
//! attributes of a disclosure button: the label flips between the expand
//! and collapse labels, and `aria_expanded` mirrors the state.
//!
//! In a table, the toggles of all rows share one tab stop. The table keeps
//! a [`RovingFocus`] over its rows and pushes each row's share with
//! [`ExpandToggle::sync_tab_stop`].

use crate::key::ToggleKeyBindings;
use crate::roving::RovingFocus;
use crossterm::event::KeyEvent;
use ribbon_core::command::Command;
use ribbon_core::component::Component;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;
use ratatui::Frame;

const CARET_COLLAPSED: &str = "▸";
const CARET_EXPANDED: &str = "▾";

#[derive(Debug, Clone)]
pub enum Message {
    KeyPress(KeyEvent),
    /// Flip the state, as a pointer click would.
    Toggle,
    /// Output: the new expanded state.
    Toggled(bool),
}

#[derive(Debug, Clone)]
pub struct ExpandToggleStyle {
    pub caret: Style,
    pub focused: Style,
}

impl Default for ExpandToggleStyle {
    fn default() -> Self {
        Self {
            caret: Style::default(),
            focused: Style::default().add_modifier(Modifier::REVERSED),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExpandToggle {
    expanded: bool,
    expand_label: Option<String>,
    collapse_label: Option<String>,
    focused: bool,
    tab_stop: bool,
    style: ExpandToggleStyle,
    key_bindings: ToggleKeyBindings,
}

impl ExpandToggle {
    pub fn new(expanded: bool) -> Self {
        Self {
            expanded,
            expand_label: None,
            collapse_label: None,
            focused: false,
            tab_stop: true,
            style: ExpandToggleStyle::default(),
            key_bindings: ToggleKeyBindings::default(),
        }
    }

    /// Labels announced while collapsed and while expanded.
    pub fn with_labels(mut self, expand: impl Into<String>, collapse: impl Into<String>) -> Self {
        self.expand_label = Some(expand.into());
        self.collapse_label = Some(collapse.into());
        self
    }

    pub fn with_style(mut self, style: ExpandToggleStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_key_bindings(mut self, key_bindings: ToggleKeyBindings) -> Self {
        self.key_bindings = key_bindings;
        self
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn set_expanded(&mut self, expanded: bool) {
        self.expanded = expanded;
    }

    /// `collapse_label` while expanded, `expand_label` otherwise.
    pub fn aria_label(&self) -> Option<&str> {
        if self.expanded {
            self.collapse_label.as_deref()
        } else {
            self.expand_label.as_deref()
        }
    }

    pub fn aria_expanded(&self) -> bool {
        self.expanded
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Take focus and tab-stop state from a row navigator.
    pub fn sync_tab_stop(&mut self, stops: &RovingFocus, index: usize) {
        self.focused = stops.is_active(index);
        self.tab_stop = stops.tab_index(index) == 0;
    }

    /// `0` when this toggle is the tab stop, `-1` otherwise.
    pub fn tab_index(&self) -> i32 {
        if self.focused || self.tab_stop {
            0
        } else {
            -1
        }
    }

    fn caret(&self) -> &'static str {
        if self.expanded {
            CARET_EXPANDED
        } else {
            CARET_COLLAPSED
        }
    }

    fn toggle(&mut self) -> Command<Message> {
        self.expanded = !self.expanded;
        tracing::trace!(expanded = self.expanded, "row toggled");
        Command::message(Message::Toggled(self.expanded))
    }
}

impl Default for ExpandToggle {
    fn default() -> Self {
        Self::new(false)
    }
}

impl Component for ExpandToggle {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::KeyPress(key) if self.focused && self.key_bindings.toggle.matches(&key) => {
                self.toggle()
            }
            Message::Toggle => self.toggle(),
            Message::KeyPress(_) | Message::Toggled(_) => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(self, area);
    }

    fn focused(&self) -> bool {
        self.focused
    }
}

impl Widget for &ExpandToggle {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let style = if self.focused {
            self.style.focused
        } else {
            self.style.caret
        };
        buf.set_string(area.x, area.y, self.caret(), style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::press;
    use crossterm::event::KeyCode;
    use ribbon_core::testing::render_component_string;

    fn toggle(expanded: bool) -> ExpandToggle {
        ExpandToggle::new(expanded).with_labels("Expand row", "Collapse row")
    }

    #[test]
    fn label_and_expanded_follow_state() {
        let collapsed = toggle(false);
        assert_eq!(collapsed.aria_label(), Some("Expand row"));
        assert!(!collapsed.aria_expanded());

        let expanded = toggle(true);
        assert_eq!(expanded.aria_label(), Some("Collapse row"));
        assert!(expanded.aria_expanded());
    }

    #[test]
    fn labels_are_optional() {
        assert_eq!(ExpandToggle::new(true).aria_label(), None);
    }

    #[test]
    fn keys_toggle_only_when_focused() {
        let mut t = toggle(false);
        assert!(t.update(Message::KeyPress(press(KeyCode::Enter))).is_none());
        assert!(!t.is_expanded());

        t.focus();
        let out = t.update(Message::KeyPress(press(KeyCode::Char(' '))));
        assert!(matches!(out.into_message(), Some(Message::Toggled(true))));
        assert_eq!(t.aria_label(), Some("Collapse row"));
    }

    #[test]
    fn pointer_toggle_ignores_focus() {
        let mut t = toggle(true);
        let out = t.update(Message::Toggle);
        assert!(matches!(out.into_message(), Some(Message::Toggled(false))));
        assert!(!t.aria_expanded());
    }

    #[test]
    fn standalone_toggle_is_a_tab_stop() {
        assert_eq!(toggle(false).tab_index(), 0);
    }

    #[test]
    fn rows_share_one_tab_stop() {
        let mut stops = RovingFocus::new(3);
        let mut rows: Vec<ExpandToggle> = (0..3).map(|_| toggle(false)).collect();
        let sync = |rows: &mut Vec<ExpandToggle>, stops: &RovingFocus| {
            for (index, row) in rows.iter_mut().enumerate() {
                row.sync_tab_stop(stops, index);
            }
        };

        sync(&mut rows, &stops);
        let tab: Vec<i32> = rows.iter().map(ExpandToggle::tab_index).collect();
        assert_eq!(tab, vec![0, -1, -1]);

        stops.focus(2);
        sync(&mut rows, &stops);
        let tab: Vec<i32> = rows.iter().map(ExpandToggle::tab_index).collect();
        assert_eq!(tab, vec![-1, -1, 0]);
        assert!(rows[2].focused());

        let out = rows[2].update(Message::KeyPress(press(KeyCode::Enter)));
        assert!(matches!(out.into_message(), Some(Message::Toggled(true))));
        assert!(rows[0].update(Message::KeyPress(press(KeyCode::Enter))).is_none());
    }

    #[test]
    fn renders_caret_for_state() {
        assert_eq!(render_component_string(&toggle(false), 1, 1), "▸");
        assert_eq!(render_component_string(&toggle(true), 1, 1), "▾");
    }

    #[test]
    fn renders_as_widget_into_a_buffer() {
        let t = toggle(true);
        let mut buf = Buffer::empty(Rect::new(0, 0, 3, 1));
        (&t).render(Rect::new(1, 0, 1, 1), &mut buf);
        assert_eq!(buf[(1, 0)].symbol(), "▾");
        assert_eq!(buf[(0, 0)].symbol(), " ");
    }
}
