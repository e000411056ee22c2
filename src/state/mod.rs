//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `layout`) so individual components
//! can depend on small focused models. The session is owned here; components
//! reach it read-only through context and mutate it only via the action
//! functions in [`session`].

pub mod layout;
pub mod session;
