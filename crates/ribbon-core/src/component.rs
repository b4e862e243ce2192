use crate::command::Command;
use ratatui::{layout::Rect, Frame};

/// A reusable widget that owns its state and renders into a given [`Rect`].
///
/// The parent decides *where* a component draws by handing it a sub-region
/// of the frame, and routes input to it by wrapping the component's message
/// type in one of its own variants.
///
/// # Composition pattern
///
/// ```rust,ignore
/// use ribbon_core::{Command, Component};
/// use ribbon_widgets::button_group::{self, ButtonGroup};
///
/// struct Toolbar { actions: ButtonGroup }
///
/// enum Msg { Actions(button_group::Message) }
///
/// impl Toolbar {
///     fn update(&mut self, msg: Msg) -> Command<Msg> {
///         match msg {
///             Msg::Actions(m) => self.actions.update(m).map(Msg::Actions),
///         }
///     }
/// }
/// ```
pub trait Component: Send + 'static {
    /// The component's internal message type.
    ///
    /// Parent models typically wrap this in one of their own message variants
    /// so that events can be routed to the correct child.
    type Message: Send + 'static;

    /// Process a message, mutate state, and return a [`Command`] for follow-ups.
    ///
    /// The returned command uses the component's own `Message` type; the
    /// parent should call [`.map()`](Command::map) to lift it.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render into a specific `area` of the [`Frame`].
    ///
    /// Popups owned by the component (menus, popovers) may draw outside
    /// `area` when the component is configured to do so; everything else is
    /// confined to it.
    fn view(&self, frame: &mut Frame, area: Rect);

    /// Whether this component currently has keyboard focus.
    ///
    /// A parent can query `focused()` to decide which child should receive
    /// key events. The default implementation returns `false`.
    fn focused(&self) -> bool {
        false
    }
}
