// src/lib.rs
//! Honeycomb bubble layout engine.
//!
//! Re-exports the core types, the pure geometry in [`layout`], and the
//! stateful [`BubbleField`] controller.

pub use bubblefield_core::{
    BubbleState, FieldError, FieldEvent, Gesture, GuideSpec, LayoutConfig, Rect, Region, Result,
};
pub use bubblefield_layout as layout;
pub use bubblefield_runtime::BubbleField;
