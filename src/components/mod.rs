//! Page sections for the FieldLab site.
//!
//! Home sections in page order, then the field sub-page blocks.

mod black_intro;
mod data_flow;
mod field_panel;
mod field_scroller;
mod fit_matrix;
mod footer_cta;
mod hero;
mod lightbox_gallery;
mod navbar;
mod sensor_grid;
mod signal_sweep;
mod tech_showcase;

pub use black_intro::{BlackIntroSection, AFTER_INTRO_ID};
pub use data_flow::DataFlowPath;
pub use field_panel::TrialPanel;
pub use field_scroller::FieldScroller;
pub use fit_matrix::FitMatrix;
pub use footer_cta::FooterCTA;
pub use hero::{Hero, INTRO_ID};
pub use lightbox_gallery::LightboxGallery;
pub use navbar::Navbar;
pub use sensor_grid::SensorGridConnect;
pub use signal_sweep::SignalSweepIntro;
pub use tech_showcase::TechShowcase;
