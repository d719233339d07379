//! フレーム処理ループ
//!
//! 取得 → 推論 → 投影 → 角度計算 → 描画 → 書き出し を1フレームずつ逐次実行する。

use crate::pose::{AngleReadings, JointSet, PoseEstimator};
use crate::render::{Annotator, Canvas};

/// 入力動画のメタデータ
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VideoProperties {
    pub width: u32,
    pub height: u32,
    pub fps: f64,
    /// コンテナ申告の総フレーム数（進捗表示にのみ使用）
    pub total_frames: u64,
}

impl VideoProperties {
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.width == 0 || self.height == 0 {
            return Err(PipelineError::Configuration(format!(
                "invalid frame size {}x{}",
                self.width, self.height
            )));
        }
        if !self.fps.is_finite() || self.fps <= 0.0 {
            return Err(PipelineError::Configuration(format!(
                "invalid frame rate {}",
                self.fps
            )));
        }
        Ok(())
    }
}

/// フレームの供給元
pub trait FrameSource {
    type Frame: Canvas;

    fn properties(&self) -> VideoProperties;

    /// 次のフレーム。ストリーム終端なら None
    fn next_frame(&mut self) -> anyhow::Result<Option<Self::Frame>>;
}

/// フレームの書き出し先
pub trait FrameSink<F> {
    fn emit(&mut self, frame: &F) -> anyhow::Result<()>;

    /// 出力を閉じる。ループ終了時に成否を問わず1回だけ呼ばれる
    fn finish(&mut self) -> anyhow::Result<()> {
        Ok(())
    }
}

/// 進捗の通知先 (処理済みフレーム数, 総フレーム数)
pub trait ProgressObserver {
    fn on_progress(&mut self, processed: u64, total: u64);
}

impl<T: FnMut(u64, u64)> ProgressObserver for T {
    fn on_progress(&mut self, processed: u64, total: u64) {
        self(processed, total)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Invalid video properties: {0}")]
    Configuration(String),

    #[error("Failed to acquire frame {frame}: {source:#}")]
    Acquire { frame: u64, source: anyhow::Error },

    #[error("Pose inference failed on frame {frame}: {source:#}")]
    Inference { frame: u64, source: anyhow::Error },

    #[error("Failed to annotate frame {frame}: {source:#}")]
    Render { frame: u64, source: anyhow::Error },

    #[error("Failed to emit frame {frame}: {source:#}")]
    Emit { frame: u64, source: anyhow::Error },

    #[error("Failed to close output: {0:#}")]
    Finish(anyhow::Error),
}

/// 1回の実行結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// 書き出したフレーム数（= 最終フレームインデックス）
    pub frames_processed: u64,
    /// 注釈を描いたフレーム数
    pub frames_annotated: u64,
}

/// 動画全体を処理するドライバ
pub struct FramePipeline {
    annotator: Annotator,
    progress_interval: u64,
}

impl FramePipeline {
    pub fn new(annotator: Annotator, progress_interval: u64) -> Self {
        Self {
            annotator,
            progress_interval,
        }
    }

    /// ストリーム終端まで処理する
    ///
    /// 取得・推論・描画・書き出しの失敗で中断する。どの場合も sink.finish() は呼ばれる。
    pub fn run<S, E, K, P>(
        &self,
        source: &mut S,
        estimator: &mut E,
        sink: &mut K,
        progress: &mut P,
    ) -> Result<RunSummary, PipelineError>
    where
        S: FrameSource,
        E: PoseEstimator<S::Frame>,
        K: FrameSink<S::Frame>,
        P: ProgressObserver,
    {
        let properties = source.properties();
        properties.validate()?;

        let mut summary = RunSummary::default();
        let result = self.run_loop(source, estimator, sink, progress, properties, &mut summary);
        let finished = sink.finish().map_err(PipelineError::Finish);

        result?;
        finished?;
        Ok(summary)
    }

    fn run_loop<S, E, K, P>(
        &self,
        source: &mut S,
        estimator: &mut E,
        sink: &mut K,
        progress: &mut P,
        properties: VideoProperties,
        summary: &mut RunSummary,
    ) -> Result<(), PipelineError>
    where
        S: FrameSource,
        E: PoseEstimator<S::Frame>,
        K: FrameSink<S::Frame>,
        P: ProgressObserver,
    {
        let mut frame_index: u64 = 0;

        loop {
            let mut frame = match source.next_frame() {
                Ok(Some(frame)) => frame,
                Ok(None) => break,
                Err(source) => {
                    return Err(PipelineError::Acquire { frame: frame_index, source });
                }
            };

            if self.annotate(&mut frame, estimator, properties, frame_index)? {
                summary.frames_annotated += 1;
            }

            sink.emit(&frame)
                .map_err(|source| PipelineError::Emit { frame: frame_index, source })?;

            frame_index += 1;
            summary.frames_processed = frame_index;

            if self.progress_interval > 0 && frame_index % self.progress_interval == 0 {
                progress.on_progress(frame_index, properties.total_frames);
            }
        }

        Ok(())
    }

    /// 先頭の人物の6関節が揃っていれば描画して true
    fn annotate<F, E>(
        &self,
        frame: &mut F,
        estimator: &mut E,
        properties: VideoProperties,
        frame_index: u64,
    ) -> Result<bool, PipelineError>
    where
        F: Canvas,
        E: PoseEstimator<F>,
    {
        let subjects = estimator
            .infer(frame)
            .map_err(|source| PipelineError::Inference { frame: frame_index, source })?;

        let Some(subject) = subjects.first() else {
            return Ok(false);
        };

        let projected = subject.project(properties.width, properties.height);
        let Some(joints) = JointSet::from_projected(&projected) else {
            return Ok(false);
        };
        let readings = AngleReadings::compute(&joints);

        self.annotator
            .draw(frame, &projected, &readings, frame_index)
            .map_err(|source| PipelineError::Render { frame: frame_index, source })?;
        Ok(true)
    }
}
