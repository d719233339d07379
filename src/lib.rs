pub mod config;
pub mod geometry;
pub mod logging;
pub mod pipeline;
pub mod pose;
pub mod render;
#[cfg(feature = "desktop")]
pub mod video;
