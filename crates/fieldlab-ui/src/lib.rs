//! FieldLab UI Components
//!
//! This crate provides the Dioxus presentational primitives shared by the
//! FieldLab pages: buttons, glowing chips, section headers, stat bars and
//! tag clouds.
//!
//! ## Design Language
//!
//! Black stages with faint dot grids, white type, and one accent:
//! - **Leaf (#60ad5e)**: highlights, borders on hover, chip glow
//! - **Field (#2e7d32)**: solid calls to action
//! - **Night (#000000)**: section backgrounds
//!
//! Components here are stateless. Motion state (reveals, staggers, scroll
//! progress) lives in the app and arrives as plain props.

pub mod components;

pub use components::*;
