pub mod angles;
#[cfg(feature = "desktop")]
pub mod detector;
pub mod estimator;
pub mod landmark;
pub mod letterbox;
pub mod output;
#[cfg(feature = "desktop")]
pub mod preprocess;

pub use angles::{AngleKind, AngleReading, AngleReadings};
#[cfg(feature = "desktop")]
pub use detector::OnnxPoseEstimator;
pub use estimator::PoseEstimator;
pub use landmark::{
    project, JointSet, Landmark, NormalizedLandmark, PixelPoint, PoseLandmarks, ProjectedPose,
};
pub use letterbox::Letterbox;
pub use output::landmarks_from_output;
#[cfg(feature = "desktop")]
pub use preprocess::{preprocess_for_landmarker, LANDMARKER_INPUT_SIZE};
