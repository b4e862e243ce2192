//! Geometry and rendering helpers for popups anchored to a control.

use ratatui::layout::Rect;
use ratatui::widgets::{Block, Clear};
use ratatui::Frame;

/// Where a popup ended up relative to its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    Above,
    #[default]
    Below,
}

/// Place a `width` x `height` popup next to `anchor`, inside `bounds`.
///
/// Prefers the space below the anchor and flips above when that side has
/// more room. The popup is left-aligned with the anchor, shifted left if it
/// would run past the right edge, and shrunk to whatever space is left.
pub fn anchored(anchor: Rect, width: u16, height: u16, bounds: Rect) -> (Rect, Position) {
    let below_space = bounds.bottom().saturating_sub(anchor.bottom());
    let above_space = anchor.top().saturating_sub(bounds.top());
    let position = if below_space >= height || below_space >= above_space {
        Position::Below
    } else {
        Position::Above
    };

    let width = width.min(bounds.width);
    let right_limit = bounds.right().saturating_sub(width);
    let x = anchor.x.min(right_limit).max(bounds.x);

    let rect = match position {
        Position::Below => Rect::new(x, anchor.bottom(), width, height.min(below_space)),
        Position::Above => {
            let h = height.min(above_space);
            Rect::new(x, anchor.top() - h, width, h)
        }
    };
    (rect, position)
}

/// Clear the popup area and optionally render a block border.
///
/// Returns the inner area (after block padding, if any).
pub fn render_overlay(frame: &mut Frame, area: Rect, block: Option<&Block>) -> Rect {
    frame.render_widget(Clear, area);
    if let Some(block) = block {
        let inner = block.inner(area);
        frame.render_widget(block.clone(), area);
        inner
    } else {
        area
    }
}
