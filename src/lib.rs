//! Previous/next section navigation for multitopic courses.

pub mod config;
pub mod course;
pub mod error;
pub mod links;
pub mod logging;
pub mod navigation;
pub mod render;

pub use error::{Error, Result};
