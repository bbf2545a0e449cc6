//! Landing page section components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each component renders one anchored section of the page and reads/writes
//! the small state model it needs from Leptos context providers set up in
//! `app::App`.

pub mod about;
pub mod contact_form;
pub mod course;
pub mod hero;
pub mod site_footer;
pub mod site_header;
pub mod testimonials;
