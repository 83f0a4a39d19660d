//! CLI library components for the SPARK shell driver.

pub mod logging;
pub mod render;
pub mod script;
