use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::ffmpeg::fade::FadeRequest;

mod ffmpeg;

/// A simple frontend to FFMPEG for adding fade-in/fade-out effects
#[derive(Debug, clap::Parser)]
struct VidFadeCli {
    /// Fade in both the audio and video of the first DURATION seconds.
    /// If DURATION is not specified, defaults to: 2
    #[arg(long, alias = "in", value_name = "DURATION", num_args = 0..=1, default_missing_value = "2")]
    fade_in: Option<f64>,
    /// Fade out both the audio and video of the last DURATION seconds.
    /// If DURATION is not specified, defaults to: 2
    #[arg(long, alias = "out", value_name = "DURATION", num_args = 0..=1, default_missing_value = "2")]
    fade_out: Option<f64>,
    /// Fade in the audio of the first DURATION seconds.
    /// Overrides any value set with --fade-in
    #[arg(long, alias = "afi", value_name = "DURATION")]
    audio_fade_in: Option<f64>,
    /// Fade out the audio of the last DURATION seconds.
    /// Overrides any value set with --fade-out
    #[arg(long, alias = "afo", value_name = "DURATION")]
    audio_fade_out: Option<f64>,
    /// Fade in the video of the first DURATION seconds.
    /// Overrides any value set with --fade-in
    #[arg(long, alias = "vfi", value_name = "DURATION")]
    video_fade_in: Option<f64>,
    /// Fade out the video of the last DURATION seconds.
    /// Overrides any value set with --fade-out
    #[arg(long, alias = "vfo", value_name = "DURATION")]
    video_fade_out: Option<f64>,
    /// Input video file
    input_file: PathBuf,
    /// Output video file
    output_file: PathBuf,
}

fn main() -> Result<()> {
    simplelog::SimpleLogger::init(log::LevelFilter::Debug, Default::default())?;

    let args = VidFadeCli::try_parse()?;
    let request = FadeRequest::merge(
        args.fade_in,
        args.fade_out,
        args.video_fade_in,
        args.video_fade_out,
        args.audio_fade_in,
        args.audio_fade_out,
    );

    let duration = ffmpeg::probe_duration(&args.input_file)?;
    log::debug!("{} is {}s long", args.input_file.display(), duration);

    let filter_args = request.to_filter_args(duration);
    ffmpeg::fade_cmd(&args.input_file, &filter_args, &args.output_file)
}
