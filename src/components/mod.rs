//! UI components.
//!
//! `access_gate` and `layout_shell` carry the admin area's control flow;
//! everything else is a presentational widget receiving its inputs as props.

pub mod access_gate;
pub mod header_bar;
pub mod layout_shell;
pub mod login_form;
pub mod navigation_sidebar;
pub mod skeleton_loader;
pub mod suggestion_grid;
