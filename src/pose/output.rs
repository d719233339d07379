use anyhow::{bail, Result};

use super::landmark::{Landmark, NormalizedLandmark, PoseLandmarks};
use super::letterbox::Letterbox;

/// 1ランドマークあたりの出力要素数 (x, y, z, visibility, presence)
pub const VALUES_PER_LANDMARK: usize = 5;

/// ランドマークモデルの生出力を人物リストに変換
///
/// - presence が threshold 未満なら人物なし（空）
/// - 座標は入力画像のピクセル単位。レターボックスを外して元フレームの正規化座標にする
/// - 33点以降の補助ランドマークは捨てる
pub fn landmarks_from_output(
    values: &[f32],
    presence: f32,
    threshold: f32,
    letterbox: &Letterbox,
) -> Result<Vec<PoseLandmarks>> {
    let required = Landmark::COUNT * VALUES_PER_LANDMARK;
    if values.len() < required {
        bail!(
            "Landmark tensor too small: {} values, expected at least {}",
            values.len(),
            required
        );
    }

    if presence < threshold {
        return Ok(Vec::new());
    }

    let landmarks = values
        .chunks_exact(VALUES_PER_LANDMARK)
        .take(Landmark::COUNT)
        .map(|v| {
            let (x, y) = letterbox.map_to_frame(v[0], v[1]);
            NormalizedLandmark::new(x, y)
        })
        .collect();

    Ok(vec![PoseLandmarks::new(landmarks)])
}
