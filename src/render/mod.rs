pub mod annotate;
pub mod canvas;
#[cfg(feature = "desktop")]
pub mod mat;
pub mod skeleton;

pub use annotate::{Annotator, PanelLayout};
pub use canvas::{Canvas, Color, TextStyle};
pub use skeleton::SKELETON_CONNECTIONS;
