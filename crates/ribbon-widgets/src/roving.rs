//! Roving focus across a row of controls that acts as a single tab stop.
//!
//! The row is one stop in the host's Tab order; arrow keys move the active
//! control inside it. The number of controls can change between renders
//! (an action bar gains or loses its overflow trigger), so the length is
//! a runtime value and the active index is clamped whenever it shrinks.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RovingFocus {
    len: usize,
    active: Option<usize>,
}

impl RovingFocus {
    /// Create a roving focus over `len` controls with nothing active.
    pub fn new(len: usize) -> Self {
        Self { len, active: None }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Change the number of controls, clamping the active index.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        self.active = match self.active {
            _ if len == 0 => None,
            Some(index) => Some(index.min(len - 1)),
            None => None,
        };
    }

    /// Index of the active control, if the row holds focus.
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Activate the control at `index`, clamped to the valid range.
    pub fn focus(&mut self, index: usize) {
        if self.len > 0 {
            self.active = Some(index.min(self.len - 1));
        }
    }

    /// Move to the next control, wrapping after the last. Starts at the
    /// first control when nothing is active.
    pub fn focus_next(&mut self) {
        if self.len > 0 {
            self.active = Some(self.active.map_or(0, |i| (i + 1) % self.len));
        }
    }

    /// Move to the previous control, wrapping before the first. Starts at
    /// the last control when nothing is active.
    pub fn focus_prev(&mut self) {
        if self.len > 0 {
            let last = self.len - 1;
            self.active = Some(self.active.map_or(last, |i| (i + last) % self.len));
        }
    }

    pub fn focus_first(&mut self) {
        self.focus(0);
    }

    pub fn focus_last(&mut self) {
        self.focus(self.len.saturating_sub(1));
    }

    /// Drop focus from the row.
    pub fn blur(&mut self) {
        self.active = None;
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    /// Tab index for the control at `index`: `0` for the row's single
    /// stop, `-1` for the rest. With nothing active the first control is
    /// the stop.
    pub fn tab_index(&self, index: usize) -> i32 {
        if index == self.active.unwrap_or(0) {
            0
        } else {
            -1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unfocused() {
        let rf = RovingFocus::new(3);
        assert_eq!(rf.active(), None);
        assert_eq!(rf.tab_index(0), 0);
        assert_eq!(rf.tab_index(1), -1);
    }

    #[test]
    fn focus_next_wraps() {
        let mut rf = RovingFocus::new(3);
        rf.focus_next(); // 0
        rf.focus_next(); // 1
        rf.focus_next(); // 2
        rf.focus_next(); // 0 (wrap)
        assert_eq!(rf.active(), Some(0));
    }

    #[test]
    fn focus_prev_wraps() {
        let mut rf = RovingFocus::new(3);
        rf.focus_prev(); // last
        assert_eq!(rf.active(), Some(2));
        rf.focus(0);
        rf.focus_prev();
        assert_eq!(rf.active(), Some(2));
    }

    #[test]
    fn focus_clamps() {
        let mut rf = RovingFocus::new(3);
        rf.focus(10);
        assert_eq!(rf.active(), Some(2));
        assert_eq!(rf.tab_index(2), 0);
    }

    #[test]
    fn shrinking_clamps_active() {
        let mut rf = RovingFocus::new(5);
        rf.focus_last();
        rf.set_len(2);
        assert_eq!(rf.active(), Some(1));
        rf.set_len(0);
        assert_eq!(rf.active(), None);
        rf.focus_next();
        assert_eq!(rf.active(), None);
    }

    #[test]
    fn blur_clears() {
        let mut rf = RovingFocus::new(2);
        rf.focus(1);
        assert!(rf.is_active(1));
        rf.blur();
        assert!(!rf.is_active(1));
    }
}
