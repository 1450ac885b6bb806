//! Page components for FieldLab.

mod field_page;
mod home;
mod not_found;

pub use field_page::{ClimateSmart, FieldPage, Hpi};
pub use home::Home;
pub use not_found::NotFound;
