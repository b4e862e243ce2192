//! Action-bar widgets for the **ribbon** library.
//!
//! Every widget in this crate implements [`ribbon_core::Component`], so it
//! can be embedded inside any [`ribbon_core::Model`] and composed freely
//! within [`ratatui`] layouts.
//!
//! # Widgets
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`button_group`] | Row of actions that overflows into a "show more" menu |
//! | [`dropdown_menu`] | Trigger button with an anchored menu of entries |
//! | [`expand_toggle`] | Expand/collapse caret for expandable rows |
//!
//! # Building blocks
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`item`] | Item and group model, id validation |
//! | [`overflow`] | Splits items into inline and overflow parts for a slot limit |
//! | [`menu`] | Turns overflowed items into dropdown entries |
//! | [`focus`] | [`FocusController`](focus::FocusController) for focusing items by id |
//! | [`roving`] | Single-tab-stop focus across a row of controls |
//! | [`events`] | Cancelable click events |
//! | [`i18n`] | Label catalog and override resolution |
//! | [`key`] | Key bindings |
//! | [`loading`] | Frame-stepped loading glyph |
//! | [`overlay`] | Popup placement next to an anchor |
//! | [`text`] | Display-width aware truncation |

pub mod button_group;
pub mod dropdown_menu;
pub mod events;
pub mod expand_toggle;
pub mod focus;
pub mod i18n;
pub mod item;
pub mod key;
pub mod loading;
pub mod menu;
pub mod overflow;
pub mod overlay;
pub mod roving;
pub mod text;
