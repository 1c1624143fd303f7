/// Fade lengths in seconds for each stream, `None` when that stream edge
/// should be left untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FadeRequest {
    pub video_in: Option<f64>,
    pub video_out: Option<f64>,
    pub audio_in: Option<f64>,
    pub audio_out: Option<f64>,
}

impl FadeRequest {
    /// The plain --fade-in/--fade-out values fill whichever per-stream slot
    /// was not given explicitly; per-stream values always win.
    pub fn merge(
        fade_in: Option<f64>,
        fade_out: Option<f64>,
        video_in: Option<f64>,
        video_out: Option<f64>,
        audio_in: Option<f64>,
        audio_out: Option<f64>,
    ) -> Self {
        Self {
            video_in: video_in.or(fade_in),
            video_out: video_out.or(fade_out),
            audio_in: audio_in.or(fade_in),
            audio_out: audio_out.or(fade_out),
        }
    }

    /// Returns the ffmpeg filter options for this request, e.g.
    /// `["-filter:v", "fade=in:st=0:d=2.0", "-af", "afade=in:st=0:d=2.0"]`.
    /// Streams without any fade emit no option at all.
    pub fn to_filter_args(&self, total: f64) -> Vec<String> {
        let video = [
            self.video_in.map(|d| fade_in_expr("fade", d)),
            self.video_out.map(|d| fade_out_expr("fade", total, d)),
        ];
        let audio = [
            self.audio_in.map(|d| fade_in_expr("afade", d)),
            self.audio_out.map(|d| fade_out_expr("afade", total, d)),
        ];
        vec![
            filter_option("-filter:v", &video),
            filter_option("-af", &audio),
        ]
        .concat()
    }
}

/// Fade-in and fade-out of one stream share a single option, comma-joined.
fn filter_option(flag: &str, exprs: &[Option<String>]) -> Vec<String> {
    let exprs = exprs.iter().flatten().cloned().collect::<Vec<_>>();
    if exprs.is_empty() {
        vec![]
    } else {
        vec![flag.to_string(), exprs.join(",")]
    }
}

fn fade_in_expr(tag: &str, length: f64) -> String {
    format!("{}=in:st=0:d={}", tag, seconds(length))
}

// No guard against length > total: a too-long fade-out produces a negative
// start time and ffmpeg is left to deal with it.
fn fade_out_expr(tag: &str, total: f64, length: f64) -> String {
    format!("{}=out:st={}:d={}", tag, seconds(total - length), seconds(length))
}

/// Whole seconds keep a trailing ".0" ("2" would also be valid ffmpeg input,
/// but "2.0" is what the printed command has always shown).
fn seconds(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}
