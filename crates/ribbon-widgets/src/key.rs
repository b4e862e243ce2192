//! Key bindings for action bars and their overflow menus.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A key binding that maps one or more key combinations to a described action.
#[derive(Debug, Clone)]
pub struct Binding {
    /// The set of key combinations that trigger this binding.
    pub keys: Vec<KeyCombination>,
    /// A human-readable description of the action this binding performs.
    pub description: String,
    /// Whether this binding is currently active. Disabled bindings never match.
    pub enabled: bool,
}

/// A single key press with optional modifier keys (Ctrl, Alt, Shift).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCombination {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl Binding {
    /// Create a binding for one or more key combinations.
    pub fn new(keys: impl IntoIterator<Item = KeyCombination>, description: impl Into<String>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
            description: description.into(),
            enabled: true,
        }
    }

    /// Whether `event` matches any combination. Always `false` when disabled.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        self.enabled
            && self
                .keys
                .iter()
                .any(|k| k.code == event.code && event.modifiers.contains(k.modifiers))
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

impl KeyCombination {
    /// A key combination with no modifier keys.
    pub fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::CONTROL,
        }
    }
}

fn keys(codes: &[KeyCode]) -> Vec<KeyCombination> {
    codes.iter().copied().map(KeyCombination::new).collect()
}

/// Bindings for moving between and activating the controls of an action bar.
#[derive(Debug, Clone)]
pub struct ActionBarKeyBindings {
    /// Previous control (wrapping). Default: Left, h
    pub prev: Binding,
    /// Next control (wrapping). Default: Right, l
    pub next: Binding,
    /// First control. Default: Home
    pub first: Binding,
    /// Last control. Default: End
    pub last: Binding,
    /// Click the focused item or open the menu from the trigger. Default: Enter, Space
    pub activate: Binding,
    /// Open the menu when the trigger is focused. Default: Down
    pub open_menu: Binding,
}

impl Default for ActionBarKeyBindings {
    fn default() -> Self {
        Self {
            prev: Binding::new(keys(&[KeyCode::Left, KeyCode::Char('h')]), "Previous action"),
            next: Binding::new(keys(&[KeyCode::Right, KeyCode::Char('l')]), "Next action"),
            first: Binding::new(keys(&[KeyCode::Home]), "First action"),
            last: Binding::new(keys(&[KeyCode::End]), "Last action"),
            activate: Binding::new(keys(&[KeyCode::Enter, KeyCode::Char(' ')]), "Activate"),
            open_menu: Binding::new(keys(&[KeyCode::Down]), "Open menu"),
        }
    }
}

/// Bindings for navigating an open dropdown menu.
#[derive(Debug, Clone)]
pub struct MenuKeyBindings {
    /// Previous entry (wrapping). Default: Up, k
    pub up: Binding,
    /// Next entry (wrapping). Default: Down, j, Tab
    pub down: Binding,
    /// First entry. Default: Home
    pub first: Binding,
    /// Last entry. Default: End
    pub last: Binding,
    /// Activate the highlighted entry. Default: Enter, Space
    pub activate: Binding,
    /// Close the menu. Default: Esc, Ctrl+C
    pub close: Binding,
}

impl Default for MenuKeyBindings {
    fn default() -> Self {
        let mut close = keys(&[KeyCode::Esc]);
        close.push(KeyCombination::ctrl(KeyCode::Char('c')));
        Self {
            up: Binding::new(keys(&[KeyCode::Up, KeyCode::Char('k')]), "Up"),
            down: Binding::new(
                keys(&[KeyCode::Down, KeyCode::Char('j'), KeyCode::Tab]),
                "Down",
            ),
            first: Binding::new(keys(&[KeyCode::Home]), "First"),
            last: Binding::new(keys(&[KeyCode::End]), "Last"),
            activate: Binding::new(keys(&[KeyCode::Enter, KeyCode::Char(' ')]), "Select"),
            close: Binding::new(close, "Close"),
        }
    }
}

/// Bindings for the expand toggle.
#[derive(Debug, Clone)]
pub struct ToggleKeyBindings {
    /// Flip the expanded state. Default: Enter, Space
    pub toggle: Binding,
}

impl Default for ToggleKeyBindings {
    fn default() -> Self {
        Self {
            toggle: Binding::new(keys(&[KeyCode::Enter, KeyCode::Char(' ')]), "Expand/collapse"),
        }
    }
}

#[cfg(test)]
pub(crate) fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binding_matches_any_key() {
        let bindings = ActionBarKeyBindings::default();
        assert!(bindings.next.matches(&press(KeyCode::Right)));
        assert!(bindings.next.matches(&press(KeyCode::Char('l'))));
        assert!(!bindings.next.matches(&press(KeyCode::Left)));
    }

    #[test]
    fn disabled_binding_never_matches() {
        let binding = ActionBarKeyBindings::default().activate.enabled(false);
        assert!(!binding.matches(&press(KeyCode::Enter)));
    }

    #[test]
    fn ctrl_combination_requires_modifier() {
        let close = MenuKeyBindings::default().close;
        assert!(close.matches(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!close.matches(&press(KeyCode::Char('c'))));
        assert!(close.matches(&press(KeyCode::Esc)));
    }
}
