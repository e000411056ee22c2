use super::*;

// =============================================================
// LayoutState defaults
// =============================================================

#[test]
fn layout_default_sidebar_open() {
    let state = LayoutState::default();
    assert!(state.sidebar_open);
}

// =============================================================
// toggle_sidebar
// =============================================================

#[test]
fn toggle_flips_sidebar() {
    let mut state = LayoutState::default();
    state.toggle_sidebar();
    assert!(!state.sidebar_open);
}

#[test]
fn double_toggle_restores_initial_value() {
    let mut state = LayoutState::default();
    state.toggle_sidebar();
    state.toggle_sidebar();
    assert!(state.sidebar_open);
}
