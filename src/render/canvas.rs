use anyhow::Result;

use crate::pose::PixelPoint;

/// RGB色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// 文字描画のスタイル
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// フォントスケール
    pub scale: f64,
    pub color: Color,
    pub thickness: i32,
}

/// 注釈を描き込む対象のフレームバッファ
///
/// 座標はフレーム外でもよい。実装側でクリップすること。
pub trait Canvas {
    fn line(
        &mut self,
        from: PixelPoint,
        to: PixelPoint,
        color: Color,
        thickness: i32,
    ) -> Result<()>;

    fn filled_circle(&mut self, center: PixelPoint, radius: i32, color: Color) -> Result<()>;

    fn filled_rect(
        &mut self,
        top_left: PixelPoint,
        bottom_right: PixelPoint,
        color: Color,
    ) -> Result<()>;

    /// origin はベースライン左端
    fn text(&mut self, text: &str, origin: PixelPoint, style: &TextStyle) -> Result<()>;
}
