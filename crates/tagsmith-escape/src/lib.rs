//! # tagsmith-escape
//!
//! HTML escaping for the tagsmith object model.
//!
//! ## Overview
//!
//! Every value that ends up in rendered markup passes through this crate.
//! Plain values (strings, numbers, characters) are escaped; values wrapped in
//! [`Markup`] are known to be safe already and are emitted verbatim.
//!
//! A rendered tag is returned as [`Markup`], which is what lets a tag be
//! nested inside another one without its output being escaped a second time.
//!
//! ## Example
//!
//! ```
//! use tagsmith_escape::{Markup, escape, escape_join};
//!
//! assert_eq!(escape("<script>"), "&lt;script&gt;");
//!
//! let bold = Markup::from_trusted("<b>bold</b>");
//! assert_eq!(escape(&bold), "<b>bold</b>");
//!
//! let joined = escape_join(["a < b", "c"], ", ");
//! assert_eq!(joined, "a &lt; b, c");
//! ```

mod escape;
mod markup;

pub use escape::{Escape, escape, escape_join, escape_str};
pub use markup::Markup;
