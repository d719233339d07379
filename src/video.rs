use anyhow::{bail, Context, Result};
use opencv::{
    core::{Mat, Size},
    prelude::*,
    videoio::{self, VideoCapture, VideoWriter},
};

use crate::pipeline::{FrameSink, FrameSource, VideoProperties};

/// OpenCVを使用した動画ファイルの読み込み
pub struct VideoReader {
    capture: VideoCapture,
    properties: VideoProperties,
}

impl VideoReader {
    pub fn open(path: &str) -> Result<Self> {
        let capture = VideoCapture::from_file(path, videoio::CAP_ANY)
            .with_context(|| format!("Failed to open video: {}", path))?;

        if !capture.is_opened()? {
            bail!("Video {} is not readable", path);
        }

        let width = capture.get(videoio::CAP_PROP_FRAME_WIDTH)?;
        let height = capture.get(videoio::CAP_PROP_FRAME_HEIGHT)?;
        let fps = capture.get(videoio::CAP_PROP_FPS)?;
        let total_frames = capture.get(videoio::CAP_PROP_FRAME_COUNT)?;

        // 負値は 0 に潰して VideoProperties::validate で弾く
        let properties = VideoProperties {
            width: width.max(0.0) as u32,
            height: height.max(0.0) as u32,
            fps,
            total_frames: total_frames.max(0.0) as u64,
        };

        Ok(Self { capture, properties })
    }
}

impl FrameSource for VideoReader {
    type Frame = Mat;

    fn properties(&self) -> VideoProperties {
        self.properties
    }

    /// フレームを読み込む（BGR形式）
    fn next_frame(&mut self) -> Result<Option<Mat>> {
        let mut frame = Mat::default();
        let ok = self
            .capture
            .read(&mut frame)
            .context("Failed to read frame")?;

        if !ok || frame.empty() {
            return Ok(None);
        }

        Ok(Some(frame))
    }
}

impl Drop for VideoReader {
    fn drop(&mut self) {
        let _ = self.capture.release();
    }
}

/// 入力と同じサイズ・FPSで動画ファイルを書き出す
pub struct VideoWriterSink {
    writer: VideoWriter,
    path: String,
    released: bool,
}

impl VideoWriterSink {
    pub fn create(path: &str, fourcc: [char; 4], properties: &VideoProperties) -> Result<Self> {
        let [a, b, c, d] = fourcc;
        let code = VideoWriter::fourcc(a, b, c, d)?;
        let writer = VideoWriter::new(
            path,
            code,
            properties.fps,
            Size::new(properties.width as i32, properties.height as i32),
            true,
        )
        .with_context(|| format!("Failed to create video writer: {}", path))?;

        if !writer.is_opened()? {
            let codec: String = fourcc.iter().collect();
            bail!("Output {} is not writable (fourcc {})", path, codec);
        }

        Ok(Self {
            writer,
            path: path.to_string(),
            released: false,
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl FrameSink<Mat> for VideoWriterSink {
    fn emit(&mut self, frame: &Mat) -> Result<()> {
        self.writer
            .write(frame)
            .with_context(|| format!("Failed to write frame to {}", self.path))?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if !self.released {
            self.released = true;
            self.writer.release().context("Failed to finalize output video")?;
        }
        Ok(())
    }
}

impl Drop for VideoWriterSink {
    fn drop(&mut self) {
        let _ = self.finish();
    }
}
