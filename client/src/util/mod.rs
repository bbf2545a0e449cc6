//! Browser helpers shared across landing page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate `web_sys` calls from component logic. Every helper
//! compiles to a no-op outside the `hydrate` build so server rendering and
//! unit tests stay deterministic.

pub mod notify;
pub mod scroll;
pub mod year;
