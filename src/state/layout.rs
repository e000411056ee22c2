#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

/// Presentation-only state for the authorized admin shell.
///
/// Created when the shell mounts and dropped when it unmounts, so nothing
/// here survives a logout. Not persisted anywhere.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutState {
    pub sidebar_open: bool,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self { sidebar_open: true }
    }
}

impl LayoutState {
    /// Flip sidebar visibility. Two toggles restore the original value.
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }
}
