//! Studio tooling on top of `ct_math`: settings loading and the graphics and vision cameras.

use ct_logging::LogCategory;

mod error;
pub use error::*;

pub mod settings;
pub mod camera;

pub const LOG_CAT : LogCategory = LogCategory::new("Studio");
