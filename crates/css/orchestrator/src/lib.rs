//! Computed-style model shared by the CSS layout modules.
//!
//! Style resolution happens upstream; layout code only reads the normalized
//! values exposed here.

pub mod style_model;

pub use style_model::ComputedStyle;
