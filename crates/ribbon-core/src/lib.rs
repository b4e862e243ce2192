//! Core contract for the **ribbon** widget library.
//!
//! `ribbon-core` defines what every ribbon widget agrees on: the
//! [`Component`] trait, the synchronous [`Command`] follow-up type, the
//! [`Model`] trait for host applications, and a headless
//! [`TestProgram`](testing::TestProgram) for driving all of it in tests.
//!
//! # Key types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Component`] | Reusable widget that renders into a [`ratatui::layout::Rect`] |
//! | [`Command`] | Follow-up messages returned from `update` |
//! | [`Model`] | Host application (init / update / view) |
//! | [`TestProgram`](testing::TestProgram) | Headless harness for a [`Model`] |
//!
//! Ribbon does not own an event loop. Hosts call `update` with key events
//! wrapped in the widget's message type, feed returned messages back in,
//! and call `view` once per frame.

pub mod command;
pub mod component;
pub mod model;
pub mod testing;

pub use command::Command;
pub use component::Component;
pub use model::Model;
