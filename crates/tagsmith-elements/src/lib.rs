//! # tagsmith-elements
//!
//! The HTML element catalogue for `tagsmith`.
//!
//! Every element is an [`ElementKind`]: a display name plus the tag name it
//! renders as. Elements carry no behavior of their own; they build plain
//! [`Tag`](tagsmith_core::Tag)s that render exactly like hand-made ones.
//!
//! ## Constructors
//!
//! Each element has a lower-case constructor. Container elements take their
//! content, void elements take nothing:
//!
//! ```
//! use tagsmith_elements::{br, li, ul};
//!
//! let list = ul(vec![li("one"), li("two")]);
//! assert_eq!(list.render().unwrap(), "<ul><li>one</li><li>two</li></ul>");
//! assert_eq!(br().render().unwrap(), "<br />");
//! ```
//!
//! A few elements have construction conveniences instead: [`option`],
//! [`anchor`], [`image`], [`input`] and [`label_for`].
//!
//! ## Collections
//!
//! ```
//! use tagsmith_elements::{ElementKind, render_collection};
//!
//! let items = ElementKind::LI.collection(["a", "b", "c"]);
//! assert_eq!(
//!     render_collection(&items).unwrap(),
//!     "<li>a</li><li>b</li><li>c</li>"
//! );
//! ```

mod convenience;
mod registry;

pub use convenience::{anchor, image, input, label_for, option};
pub use registry::*;
