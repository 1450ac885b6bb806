//! Reusable UI components for the FieldLab pages
//!
//! Styling is class-based; the matching rules live in the app's global
//! stylesheet. Inline styles are used only for values computed from motion
//! state.

mod button;
mod chip_glow;
mod dot_grid;
mod section_header;
mod stat;
mod tag_chips;

pub use button::*;
pub use chip_glow::*;
pub use dot_grid::*;
pub use section_header::*;
pub use stat::*;
pub use tag_chips::*;
