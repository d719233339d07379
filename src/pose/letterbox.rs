/// フレームを縦横比を保って正方形の入力に収めたときの配置
///
/// 長辺を入力サイズに合わせ、短辺側は上下（左右）に均等に余白を入れる。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Letterbox {
    pub input_size: u32,
    /// リサイズ後の画像サイズ（余白を除く）
    pub resized_width: u32,
    pub resized_height: u32,
    pub pad_left: u32,
    pub pad_top: u32,
}

impl Letterbox {
    pub fn new(frame_width: u32, frame_height: u32, input_size: u32) -> Self {
        let longest = frame_width.max(frame_height).max(1) as f32;
        let scale = input_size as f32 / longest;
        let resized_width = ((frame_width as f32 * scale).round() as u32).clamp(1, input_size);
        let resized_height = ((frame_height as f32 * scale).round() as u32).clamp(1, input_size);

        Self {
            input_size,
            resized_width,
            resized_height,
            pad_left: (input_size - resized_width) / 2,
            pad_top: (input_size - resized_height) / 2,
        }
    }

    pub fn pad_right(&self) -> u32 {
        self.input_size - self.resized_width - self.pad_left
    }

    pub fn pad_bottom(&self) -> u32 {
        self.input_size - self.resized_height - self.pad_top
    }

    /// 入力画像上のピクセル座標 → 元フレームの正規化座標
    pub fn map_to_frame(&self, x: f32, y: f32) -> (f32, f32) {
        (
            (x - self.pad_left as f32) / self.resized_width as f32,
            (y - self.pad_top as f32) / self.resized_height as f32,
        )
    }
}
