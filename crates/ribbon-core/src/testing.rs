use crate::command::{Command, CommandInner};
use crate::component::Component;
use crate::model::Model;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::Terminal;

/// A headless test harness that drives a [`Model`] without a real terminal.
///
/// `TestProgram` exercises the init/update/view cycle in a plain `#[test]`
/// function. Messages produced through [`Command::message`] are queued and
/// flushed with [`drain_messages`](TestProgram::drain_messages).
///
/// # Example
///
/// ```rust,ignore
/// use ribbon_core::testing::TestProgram;
///
/// let mut prog = TestProgram::<Toolbar>::new(items);
/// prog.send(Msg::FocusCopy);
/// prog.drain_messages();
/// assert!(prog.model().actions.is_inline_focused("copy"));
///
/// let output = prog.render_string(40, 3);
/// assert!(output.contains("Copy"));
/// ```
pub struct TestProgram<M: Model> {
    model: M,
    pending_messages: Vec<M::Message>,
}

impl<M: Model> TestProgram<M> {
    /// Create a test program by calling [`Model::init`] with the given flags.
    ///
    /// Messages produced by `init` are queued; call
    /// [`drain_messages`](TestProgram::drain_messages) to process them.
    pub fn new(flags: M::Flags) -> Self {
        let (model, init_cmd) = M::init(flags);
        let mut program = Self {
            model,
            pending_messages: Vec::new(),
        };
        program.collect_messages(init_cmd);
        program
    }

    /// Send a message, triggering a single update cycle.
    ///
    /// Follow-up messages are queued, not processed.
    pub fn send(&mut self, msg: M::Message) {
        let cmd = self.model.update(msg);
        self.collect_messages(cmd);
    }

    /// Process queued messages until no new ones are produced.
    pub fn drain_messages(&mut self) {
        while !self.pending_messages.is_empty() {
            let messages: Vec<_> = self.pending_messages.drain(..).collect();
            for msg in messages {
                let cmd = self.model.update(msg);
                self.collect_messages(cmd);
            }
        }
    }

    /// Number of messages waiting to be drained.
    pub fn pending(&self) -> usize {
        self.pending_messages.len()
    }

    /// Get a shared reference to the model for assertions.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Get a mutable reference to the model for direct test setup.
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Render the model to a ratatui [`Buffer`] of the given dimensions.
    pub fn render(&self, width: u16, height: u16) -> Buffer {
        render_with(width, height, |frame| self.model.view(frame))
    }

    /// Render the model and return the visible content as a plain string.
    ///
    /// Rows are separated by newlines; trailing whitespace is preserved.
    pub fn render_string(&self, width: u16, height: u16) -> String {
        buffer_to_string(&self.render(width, height))
    }

    fn collect_messages(&mut self, cmd: Command<M::Message>) {
        match cmd.inner {
            CommandInner::None => {}
            CommandInner::Message(msg) => self.pending_messages.push(msg),
            CommandInner::Batch(cmds) => {
                for cmd in cmds {
                    self.collect_messages(cmd);
                }
            }
        }
    }
}

/// Render a single [`Component`] into a `width` x `height` buffer.
pub fn render_component<C: Component>(component: &C, width: u16, height: u16) -> Buffer {
    render_with(width, height, |frame| {
        let area = frame.area();
        component.view(frame, area)
    })
}

/// Render a single [`Component`] and return the visible content as a string.
pub fn render_component_string<C: Component>(component: &C, width: u16, height: u16) -> String {
    buffer_to_string(&render_component(component, width, height))
}

/// Flatten a buffer into newline-separated rows of cell symbols.
pub fn buffer_to_string(buf: &Buffer) -> String {
    let area: Rect = buf.area;
    let mut output = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            output.push_str(buf[(x, y)].symbol());
        }
        if y + 1 < area.bottom() {
            output.push('\n');
        }
    }
    output
}

fn render_with(width: u16, height: u16, draw: impl FnOnce(&mut ratatui::Frame)) -> Buffer {
    let backend = ratatui::backend::TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("test backend never fails");
    terminal.draw(draw).expect("test backend never fails");
    terminal.backend().buffer().clone()
}
