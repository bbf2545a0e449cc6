//! Page-view client state.
//!
//! DESIGN
//! ======
//! State is split by concern (`ui`, `banner`, `contact`) and provided as
//! separate `RwSignal` contexts, so each section component depends only on
//! the small model it renders. Nothing here outlives a page view.

pub mod banner;
pub mod carousel;
pub mod contact;
pub mod ui;
