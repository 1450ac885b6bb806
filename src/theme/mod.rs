//! Site theme: global stylesheet and SVG palette.

pub mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
