#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::doc_markdown)]
//! Item tree and property model for the flexlay layout engine.
//!
//! - **Node store**: [`ItemTree`] owns every item in an arena and hands out
//!   generational [`ItemId`] handles. Parent/child relations are handle
//!   pairs; attaching checks ancestry so the tree stays acyclic.
//! - **Property table**: [`ItemStyle`] holds the flex attributes of one
//!   item with their documented defaults. Undefined lengths are `None`.
//! - **Self-sizing**: [`SelfSizing`] is the capability an item can carry to
//!   report its intrinsic size during layout.
//! - **Wire**: NaN sentinels, enumeration codes and the packed enum layout
//!   used by host bindings live in [`wire`].
//!
//! Layout itself is computed by the `flexlay-layout` crate.

mod error;
mod geometry;
mod sizing;
mod style;
mod tree;
pub mod wire;

pub use error::{Result, TreeError};
pub use geometry::{Edges, Rect, Size};
pub use sizing::{SelfSizing, SizingHook};
pub use style::{FlexAlign, FlexDirection, FlexPosition, FlexWrap, ItemStyle};
pub use tree::{ItemId, ItemTree};
