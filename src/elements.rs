//! The HTML element catalogue.
//!
//! See `tagsmith-elements` for details.

pub use tagsmith_elements::*;
