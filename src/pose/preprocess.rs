use anyhow::{ensure, Result};
use ndarray::Array4;
use opencv::{
    core::{self, AlgorithmHint, Mat, Scalar, Size, Vec3f, CV_32FC3},
    imgproc,
    prelude::*,
};

use super::letterbox::Letterbox;

/// ランドマークモデルの入力サイズ（正方形）
pub const LANDMARKER_INPUT_SIZE: u32 = 256;

/// BGR フレームをランドマークモデルの入力 [1, 256, 256, 3] (RGB, 0.0-1.0) にする
///
/// 縦横比を保って縮小し、余白は黒で埋める。出力座標を戻すための配置も返す。
pub fn preprocess_for_landmarker(frame: &Mat) -> Result<(Array4<f32>, Letterbox)> {
    ensure!(frame.cols() > 0 && frame.rows() > 0, "Empty frame");
    let (width, height) = (frame.cols() as u32, frame.rows() as u32);
    let letterbox = Letterbox::new(width, height, LANDMARKER_INPUT_SIZE);

    let mut resized = Mat::default();
    imgproc::resize(
        frame,
        &mut resized,
        Size::new(letterbox.resized_width as i32, letterbox.resized_height as i32),
        0.0,
        0.0,
        imgproc::INTER_AREA,
    )?;

    let mut padded = Mat::default();
    core::copy_make_border(
        &resized,
        &mut padded,
        letterbox.pad_top as i32,
        letterbox.pad_bottom() as i32,
        letterbox.pad_left as i32,
        letterbox.pad_right() as i32,
        core::BORDER_CONSTANT,
        Scalar::all(0.0),
    )?;

    let mut rgb = Mat::default();
    imgproc::cvt_color(
        &padded,
        &mut rgb,
        imgproc::COLOR_BGR2RGB,
        0,
        AlgorithmHint::ALGO_HINT_DEFAULT,
    )?;

    let mut normalized = Mat::default();
    rgb.convert_to(&mut normalized, CV_32FC3, 1.0 / 255.0, 0.0)?;

    let side = LANDMARKER_INPUT_SIZE as usize;
    let values: Vec<f32> = normalized
        .data_typed::<Vec3f>()?
        .iter()
        .flat_map(|px| [px[0], px[1], px[2]])
        .collect();
    let tensor = Array4::from_shape_vec((1, side, side, 3), values)?;

    Ok((tensor, letterbox))
}
