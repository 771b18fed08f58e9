//! HTML escaping and the known-safe markup wrapper.
//!
//! See `tagsmith-escape` for details.

pub use tagsmith_escape::*;
