//! Network layer: REST helpers for the session API.

pub mod api;
