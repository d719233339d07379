use anyhow::Result;

use super::landmark::PoseLandmarks;

/// 姿勢推定モデルとの境界
///
/// 1フレームにつき1回呼ばれ、検出された人物ごとのランドマーク列を返す。
/// 人物が検出されなければ空の Vec。
pub trait PoseEstimator<F> {
    fn infer(&mut self, frame: &F) -> Result<Vec<PoseLandmarks>>;
}
