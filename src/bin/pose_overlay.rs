//! 動画の各フレームに姿勢の骨格と関節角度を描き込み、別ファイルに書き出す。
//!
//! 使い方: pose_overlay [config.toml]

use anyhow::{Context, Result};

use pose_angle_overlay::config::Config;
use pose_angle_overlay::log;
use pose_angle_overlay::logging::RunLog;
use pose_angle_overlay::pipeline::{FramePipeline, FrameSource};
use pose_angle_overlay::pose::OnnxPoseEstimator;
use pose_angle_overlay::render::Annotator;
use pose_angle_overlay::video::{VideoReader, VideoWriterSink};

const CONFIG_PATH: &str = "config.toml";

fn main() -> Result<()> {
    let config_path = std::env::args().nth(1).unwrap_or_else(|| CONFIG_PATH.to_string());
    let config = Config::load_or_default(&config_path)?;

    let logfile = RunLog::create(&config.log.dir, "pose_overlay")?;
    eprintln!("Log: {}", logfile.path().display());
    log!(logfile, "Pose Overlay {}", env!("POSE_OVERLAY_VERSION"));

    log!(logfile, "Loading model from {}...", config.model.path);
    let mut estimator = OnnxPoseEstimator::new(&config.model)?;

    let mut reader = VideoReader::open(&config.video.input_path)?;
    let props = reader.properties();
    log!(
        logfile,
        "Video info: {}x{} @ {}fps, total frames: {}",
        props.width, props.height, props.fps, props.total_frames
    );
    props.validate()?;

    let fourcc = config.video.fourcc_chars()?;
    let mut writer = VideoWriterSink::create(&config.video.output_path, fourcc, &props)?;

    let pipeline = FramePipeline::new(Annotator::default(), config.pipeline.progress_interval);
    let summary = pipeline
        .run(&mut reader, &mut estimator, &mut writer, &mut |done: u64, total: u64| {
            log!(logfile, "Processed frame {}/{}", done, total);
        })
        .with_context(|| format!("Processing {} failed", config.video.input_path))?;

    log!(
        logfile,
        "Annotated {}/{} frames",
        summary.frames_annotated, summary.frames_processed
    );
    log!(logfile, "Video processing completed! Saved to {}", writer.path());
    Ok(())
}
