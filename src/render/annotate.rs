use anyhow::Result;

use crate::pose::{AngleReadings, Landmark, PixelPoint, ProjectedPose};

use super::canvas::{Canvas, Color, TextStyle};
use super::skeleton::{
    connected_landmarks, JOINT_COLOR, JOINT_RADIUS, SKELETON_COLOR, SKELETON_CONNECTIONS,
    SKELETON_THICKNESS,
};

/// 角度パネルのレイアウト
#[derive(Debug, Clone, PartialEq)]
pub struct PanelLayout {
    /// パネル左上
    pub origin: PixelPoint,
    pub width: i32,
    /// 行間隔（ピクセル）
    pub line_height: i32,
    /// パネル左端からの文字のインデント
    pub text_indent: i32,
    pub background: Color,
    pub header_style: TextStyle,
    pub reading_style: TextStyle,
}

impl Default for PanelLayout {
    fn default() -> Self {
        Self {
            origin: PixelPoint::new(10, 10),
            width: 320,
            line_height: 25,
            text_indent: 10,
            background: Color::rgb(50, 50, 50),
            header_style: TextStyle {
                scale: 0.8,
                color: Color::rgb(0, 255, 0),
                thickness: 2,
            },
            reading_style: TextStyle {
                scale: 0.7,
                color: Color::rgb(255, 255, 255),
                thickness: 2,
            },
        }
    }
}

impl PanelLayout {
    /// ヘッダー1行 + 角度 n 行分の高さ
    pub fn height(&self, readings: usize) -> i32 {
        self.line_height * (readings as i32 + 1)
    }

    pub fn bottom_right(&self, readings: usize) -> PixelPoint {
        self.origin.offset(self.width, self.height(readings))
    }

    /// line 行目（0 = ヘッダー）のベースライン位置
    pub fn line_origin(&self, line: usize) -> PixelPoint {
        self.origin
            .offset(self.text_indent, self.line_height * (line as i32 + 1))
    }
}

pub fn frame_header(frame_index: u64) -> String {
    format!("Frame # = {}", frame_index)
}

/// 骨格と角度パネルをフレームに描き込む
#[derive(Debug, Clone)]
pub struct Annotator {
    connections: &'static [(Landmark, Landmark)],
    layout: PanelLayout,
}

impl Default for Annotator {
    fn default() -> Self {
        Self::new(&SKELETON_CONNECTIONS, PanelLayout::default())
    }
}

impl Annotator {
    pub fn new(connections: &'static [(Landmark, Landmark)], layout: PanelLayout) -> Self {
        Self { connections, layout }
    }

    /// 描画順: 骨格線 → 関節マーカー → パネル背景 → テキスト
    pub fn draw<C: Canvas>(
        &self,
        canvas: &mut C,
        pose: &ProjectedPose,
        readings: &AngleReadings,
        frame_index: u64,
    ) -> Result<()> {
        self.draw_skeleton(canvas, pose)?;
        self.draw_joints(canvas, pose)?;
        self.draw_panel(canvas, readings, frame_index)
    }

    fn draw_skeleton<C: Canvas>(&self, canvas: &mut C, pose: &ProjectedPose) -> Result<()> {
        for &(start, end) in self.connections {
            if let (Some(from), Some(to)) = (pose.get(start), pose.get(end)) {
                canvas.line(from, to, SKELETON_COLOR, SKELETON_THICKNESS)?;
            }
        }
        Ok(())
    }

    fn draw_joints<C: Canvas>(&self, canvas: &mut C, pose: &ProjectedPose) -> Result<()> {
        // 同じピクセル位置には1回だけ描く
        let mut drawn: Vec<PixelPoint> = Vec::new();
        for landmark in connected_landmarks(self.connections) {
            let Some(point) = pose.get(landmark) else {
                continue;
            };
            if drawn.contains(&point) {
                continue;
            }
            canvas.filled_circle(point, JOINT_RADIUS, JOINT_COLOR)?;
            drawn.push(point);
        }
        Ok(())
    }

    fn draw_panel<C: Canvas>(
        &self,
        canvas: &mut C,
        readings: &AngleReadings,
        frame_index: u64,
    ) -> Result<()> {
        let layout = &self.layout;
        canvas.filled_rect(
            layout.origin,
            layout.bottom_right(readings.0.len()),
            layout.background,
        )?;

        canvas.text(
            &frame_header(frame_index),
            layout.line_origin(0),
            &layout.header_style,
        )?;

        for (i, reading) in readings.iter().enumerate() {
            canvas.text(
                &reading.display_text(),
                layout.line_origin(i + 1),
                &layout.reading_style,
            )?;
        }
        Ok(())
    }
}
