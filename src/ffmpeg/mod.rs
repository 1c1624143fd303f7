use anyhow::Result;
use regex::Regex;
use std::{
    path::Path,
    process::{Command, Stdio},
};

pub mod fade;

/// Runs `ffmpeg -i <input>` and reads the total duration from its metadata
/// dump. ffmpeg writes the dump to stderr, so only stderr is captured.
pub fn probe_duration(input: &Path) -> Result<f64> {
    let output = Command::new("ffmpeg")
        .arg("-i")
        .arg(input)
        .stderr(Stdio::piped())
        .output()?;
    parse_duration(&String::from_utf8_lossy(&output.stderr))
}

fn parse_duration(metadata: &str) -> Result<f64> {
    let marker = Regex::new(r"DURATION\s*:\s*(\S+)")?;
    let caps = metadata
        .lines()
        .find_map(|line| marker.captures(line))
        .ok_or(anyhow::anyhow!("no DURATION tag in ffmpeg output"))?;
    to_seconds(&caps[1])
}

fn to_seconds(timestamp: &str) -> Result<f64> {
    let pattern = Regex::new(r"(\d+):(\d+):(\d+)\.(\d+)")?;
    let caps = pattern
        .captures(timestamp)
        .ok_or(anyhow::anyhow!("unable to find duration of video"))?;
    let hours: f64 = caps[1].parse()?;
    let minutes: f64 = caps[2].parse()?;
    let seconds: f64 = caps[3].parse()?;
    // "0." + the captured digits, so 03.45 becomes 3.45 and not 3.045
    let fraction: f64 = format!("0.{}", &caps[4]).parse()?;
    Ok(hours * 3600.0 + minutes * 60.0 + seconds + fraction)
}

pub fn fade_cmd(input: &Path, filter_args: &[String], output: &Path) -> Result<()> {
    let args = vec![
        vec!["-i".to_string(), input.display().to_string()],
        filter_args.to_vec(),
        vec![output.display().to_string()],
    ]
    .concat();
    println!("ffmpeg {}", args.join(" "));
    let status = Command::new("ffmpeg").args(&args).status()?;
    if !status.success() {
        log::warn!("ffmpeg exited with {}", status);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{parse_duration, to_seconds};

    #[test]
    fn test_to_seconds() {
        assert!((to_seconds("01:02:03.45").unwrap() - 3723.45).abs() < 1e-9);
        assert_eq!(to_seconds("00:00:00.0").unwrap(), 0.0);
    }

    #[test]
    fn test_to_seconds_rejects_garbage() {
        assert!(to_seconds("abc").is_err());
        assert!(to_seconds("01:02:03").is_err());
    }

    #[test]
    fn test_parse_duration_finds_marker() {
        let metadata = concat!(
            "Input #0, matroska,webm, from 'input.mkv':\n",
            "  Metadata:\n",
            "    ENCODER         : Lavf59.27.100\n",
            "  Duration: 00:01:10.05, start: 0.000000, bitrate: 1205 kb/s\n",
            "    Metadata:\n",
            "      DURATION        : 00:01:10.048000000\n",
        );
        assert!((parse_duration(metadata).unwrap() - 70.048).abs() < 1e-9);
    }

    #[test]
    fn test_parse_duration_without_marker() {
        assert!(parse_duration("Output file #0 does not contain any stream").is_err());
    }
}
