use anyhow::Result;
use opencv::{
    core::{Mat, Point, Scalar},
    imgproc,
};

use crate::pose::PixelPoint;

use super::canvas::{Canvas, Color, TextStyle};

fn point(p: PixelPoint) -> Point {
    Point::new(p.x, p.y)
}

/// RGB -> BGR の Scalar
fn scalar(color: Color) -> Scalar {
    Scalar::new(color.b as f64, color.g as f64, color.r as f64, 0.0)
}

/// BGR の Mat にそのまま描き込む。フレーム外の座標は OpenCV 側でクリップされる
impl Canvas for Mat {
    fn line(
        &mut self,
        from: PixelPoint,
        to: PixelPoint,
        color: Color,
        thickness: i32,
    ) -> Result<()> {
        imgproc::line(self, point(from), point(to), scalar(color), thickness, imgproc::LINE_8, 0)?;
        Ok(())
    }

    fn filled_circle(&mut self, center: PixelPoint, radius: i32, color: Color) -> Result<()> {
        imgproc::circle(
            self,
            point(center),
            radius,
            scalar(color),
            imgproc::FILLED,
            imgproc::LINE_8,
            0,
        )?;
        Ok(())
    }

    fn filled_rect(
        &mut self,
        top_left: PixelPoint,
        bottom_right: PixelPoint,
        color: Color,
    ) -> Result<()> {
        imgproc::rectangle_points(
            self,
            point(top_left),
            point(bottom_right),
            scalar(color),
            imgproc::FILLED,
            imgproc::LINE_8,
            0,
        )?;
        Ok(())
    }

    fn text(&mut self, text: &str, origin: PixelPoint, style: &TextStyle) -> Result<()> {
        imgproc::put_text(
            self,
            text,
            point(origin),
            imgproc::FONT_HERSHEY_SIMPLEX,
            style.scale,
            scalar(style.color),
            style.thickness,
            imgproc::LINE_8,
            false,
        )?;
        Ok(())
    }
}
