//! Routed pages.

pub mod admin;
pub mod catalog;
pub mod home;
pub mod overview;
