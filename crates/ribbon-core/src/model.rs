use crate::command::Command;
use ratatui::Frame;

/// A host application that embeds ribbon components.
///
/// `Model` is the top of an Elm-style **init -> update -> view** cycle. The
/// event loop that drives it belongs to the host (or to
/// [`TestProgram`](crate::testing::TestProgram) in tests); ribbon only
/// defines the contract so widgets and harnesses agree on it.
///
/// # Example
///
/// ```rust,ignore
/// use ribbon_core::{Command, Component, Model};
/// use ribbon_widgets::button_group::{self, ButtonGroup};
///
/// struct App { actions: ButtonGroup }
///
/// enum Msg { Actions(button_group::Message) }
///
/// impl Model for App {
///     type Message = Msg;
///     type Flags = Vec<ribbon_widgets::item::ItemOrGroup>;
///
///     fn init(items: Self::Flags) -> (Self, Command<Msg>) {
///         (App { actions: ButtonGroup::new(items, 3) }, Command::none())
///     }
///
///     fn update(&mut self, msg: Msg) -> Command<Msg> {
///         match msg {
///             Msg::Actions(m) => self.actions.update(m).map(Msg::Actions),
///         }
///     }
///
///     fn view(&self, frame: &mut ratatui::Frame) {
///         let area = frame.area();
///         self.actions.view(frame, area);
///     }
/// }
/// ```
pub trait Model: Sized + Send + 'static {
    /// The application's message type.
    type Message: Send + 'static;

    /// Initialization data passed to [`Model::init`]. Use `()` when none is needed.
    type Flags: Send + 'static;

    /// Create the initial state and an optional startup command.
    fn init(flags: Self::Flags) -> (Self, Command<Self::Message>);

    /// Process a message, mutate state, and return a command for follow-ups.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render the current state to a ratatui [`Frame`].
    ///
    /// This should be a pure function of `&self`.
    fn view(&self, frame: &mut Frame);
}
