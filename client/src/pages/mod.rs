//! Route-level pages.
//!
//! The site has a single landing page. It composes the section components
//! and owns page-wide setup such as smooth anchor scrolling.

pub mod landing;
