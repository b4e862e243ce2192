//! Frame-stepped loading glyph shown on controls whose action is in progress.
//!
//! There is no timer here; the host advances the glyph by sending the
//! owning widget a tick message at whatever rate it likes.

use ratatui::style::{Color, Style};

/// Built-in frame sets.
pub mod frames {
    /// Braille dot spinner cycling through ten positions.
    pub const DOTS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
    /// Classic ASCII line spinner: |, /, -, \.
    pub const LINE: &[&str] = &["|", "/", "-", "\\"];
}

#[derive(Debug, Clone)]
pub struct LoadingIndicator {
    frames: &'static [&'static str],
    frame_index: usize,
    style: Style,
}

impl LoadingIndicator {
    /// Uses [`frames::DOTS`].
    pub fn new() -> Self {
        Self {
            frames: frames::DOTS,
            frame_index: 0,
            style: Style::default().fg(Color::Cyan),
        }
    }

    pub fn with_frames(mut self, frames: &'static [&'static str]) -> Self {
        self.frames = frames;
        self.frame_index = 0;
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Advance to the next frame.
    pub fn tick(&mut self) {
        if !self.frames.is_empty() {
            self.frame_index = (self.frame_index + 1) % self.frames.len();
        }
    }

    /// The glyph for the current frame.
    pub fn glyph(&self) -> &'static str {
        self.frames.get(self.frame_index).copied().unwrap_or("")
    }

    pub fn style(&self) -> Style {
        self.style
    }
}

impl Default for LoadingIndicator {
    fn default() -> Self {
        Self::new()
    }
}
