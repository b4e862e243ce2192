//! **ribbon** -- action bars with overflow menus for [`ratatui`].
//!
//! This is the umbrella crate that re-exports everything you need from a
//! single dependency:
//!
//! ```toml
//! [dependencies]
//! ribbon = "0.1"
//! ```
//!
//! # Re-exports
//!
//! * All public items from [`ribbon_core`] are available at the crate root
//!   ([`Model`], [`Component`], [`Command`]).
//! * The [`widgets`] module re-exports everything from [`ribbon_widgets`]
//!   (button group, dropdown menu, expand toggle and their building blocks).
//! * [`ratatui`] and [`crossterm`] are re-exported so downstream crates do
//!   not need to depend on them directly.
//!
//! # Quick start
//!
//! ```ignore
//! use ribbon::widgets::button_group::{ButtonGroup, Message as ActionsMsg};
//! use ribbon::widgets::item::Item;
//! use ribbon::{Command, Component, Model};
//! use ratatui::Frame;
//!
//! struct App {
//!     actions: ButtonGroup,
//! }
//!
//! enum Msg {
//!     Actions(ActionsMsg),
//! }
//!
//! impl Model for App {
//!     type Message = Msg;
//!     type Flags = ();
//!
//!     fn init(_: ()) -> (Self, Command<Msg>) {
//!         let actions = ButtonGroup::new(
//!             vec![
//!                 Item::new("copy", "Copy").with_icon("copy").into(),
//!                 Item::new("edit", "Edit").with_icon("edit").into(),
//!                 Item::new("upload", "Upload").with_icon("upload").into(),
//!             ],
//!             2,
//!         );
//!         (App { actions }, Command::none())
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Command<Msg> {
//!         match msg {
//!             Msg::Actions(msg) => self.actions.update(msg).map(Msg::Actions),
//!         }
//!     }
//!
//!     fn view(&self, frame: &mut Frame) {
//!         let area = frame.area();
//!         self.actions.view(frame, area);
//!     }
//! }
//! ```

pub use ribbon_core::*;
pub mod widgets {
    pub use ribbon_widgets::*;
}

pub use crossterm;
pub use ratatui;
