//! Report rendering for the latest-videos lookup.

use crate::youtube::Video;

/// Header line of a successful report.
pub const REPORT_HEADER: &str = "🎓 **CS50 Latest Videos:**";

/// Marker prefixed to every failure report.
pub const WARNING_MARKER: &str = "⚠️";

/// Render the numbered report: header, then one block per video in upstream
/// order (1-indexed title line followed by the watch URL).
pub fn render_report(videos: &[Video]) -> String {
    let mut output = format!("{}\n\n", REPORT_HEADER);

    for (i, video) in videos.iter().enumerate() {
        output.push_str(&format!(
            "{}. {}\n{}\n\n",
            i + 1,
            video.title,
            video.watch_url()
        ));
    }

    output
}

/// Render the failure report carrying the underlying error's message.
pub fn render_failure(message: &str) -> String {
    format!("{} Failed to fetch CS50 videos: {}", WARNING_MARKER, message)
}
