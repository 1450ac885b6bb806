//! Palette for colors set as SVG attributes.
//!
//! Everything styled through classes takes its colors from the CSS
//! variables in [`super::GLOBAL_STYLES`]; these mirror them for markup that
//! needs literal values.

// === LEAF (accent) ===
pub const LEAF: &str = "#60ad5e";
pub const LEAF_WASH: &str = "rgba(96,173,94,0.15)";
pub const LEAF_CLEAR: &str = "rgba(96,173,94,0.0)";
pub const LEAF_SOLID: &str = "rgba(96,173,94,1)";

// === INK (white on night) ===
pub const INK: &str = "rgba(255,255,255,0.85)";
pub const INK_LINE: &str = "rgba(255,255,255,0.7)";
pub const INK_SOFT: &str = "rgba(255,255,255,0.45)";
pub const INK_FAINT: &str = "rgba(255,255,255,0.35)";
pub const INK_DOT: &str = "rgba(255,255,255,0.18)";
pub const INK_WASH: &str = "rgba(255,255,255,0.12)";
