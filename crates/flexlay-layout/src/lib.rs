#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::doc_markdown)]
//! Flexbox layout engine for flexlay item trees.
//!
//! Computes a frame for every item of an [`ItemTree`](flexlay_core::ItemTree)
//! from its flex attributes:
//!
//! - **Measure**: intrinsic sizes from attributes, self-sizing hooks and
//!   content, memoized per pass in a [`MeasureCache`]
//! - **Lines**: in-flow items are split into lines when wrapping is enabled
//! - **Main axis**: grow/shrink distribution, then `justify_content`
//! - **Cross axis**: `align_content` across lines, `align_items` /
//!   `align_self` within a line
//! - **Absolute**: out-of-flow items pinned against the content box
//!
//! [`FlexSurface`] wraps a tree and an engine behind the flat, wire-typed
//! API used by host bindings.

mod absolute;
mod align;
mod axis;
mod cache;
mod engine;
mod flex;
mod lines;
mod measure;
mod surface;

pub use cache::MeasureCache;
pub use engine::{compute_layout, LayoutEngine};
pub use surface::FlexSurface;
