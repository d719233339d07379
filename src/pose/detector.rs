use anyhow::{Context, Result};
use opencv::core::Mat;
use ort::session::builder::GraphOptimizationLevel;
use ort::session::Session;
use ort::value::Tensor;

use crate::config::ModelConfig;

use super::estimator::PoseEstimator;
use super::landmark::PoseLandmarks;
use super::output::landmarks_from_output;
use super::preprocess::preprocess_for_landmarker;

/// 全身ランドマークモデル（33点）を ONNX Runtime で実行する推定器
///
/// フレーム全体をレターボックスして入力し、最大1人を返す。
pub struct OnnxPoseEstimator {
    session: Session,
    model: ModelConfig,
}

impl OnnxPoseEstimator {
    pub fn new(model: &ModelConfig) -> Result<Self> {
        let builder = Session::builder()?.with_optimization_level(GraphOptimizationLevel::Level3)?;

        #[cfg(feature = "cuda")]
        let builder = builder.with_execution_providers([
            ort::execution_providers::CUDAExecutionProvider::default().build(),
        ])?;

        let session = builder
            .commit_from_file(&model.path)
            .with_context(|| format!("Failed to load pose model: {}", model.path))?;

        Ok(Self {
            session,
            model: model.clone(),
        })
    }
}

impl PoseEstimator<Mat> for OnnxPoseEstimator {
    fn infer(&mut self, frame: &Mat) -> Result<Vec<PoseLandmarks>> {
        let (input, letterbox) = preprocess_for_landmarker(frame)?;
        let outputs = self
            .session
            .run(ort::inputs![self.model.input_name.as_str() => Tensor::from_array(input)?])
            .context("Pose model inference failed")?;

        let presence: ndarray::ArrayViewD<f32> = outputs[self.model.presence_output.as_str()]
            .try_extract_array()
            .context("Failed to extract presence tensor")?;
        let landmarks: ndarray::ArrayViewD<f32> = outputs[self.model.landmarks_output.as_str()]
            .try_extract_array()
            .context("Failed to extract landmark tensor")?;

        let score = presence.iter().next().copied().unwrap_or(0.0);
        let values: Vec<f32> = landmarks.iter().copied().collect();
        landmarks_from_output(&values, score, self.model.presence_threshold, &letterbox)
    }
}
