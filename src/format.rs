//! Time formatting for progress displays.

/// Signature of a time formatter: `(seconds, guide) -> text`.
///
/// The guide (usually the media duration) decides how many fields are shown,
/// so every time on one bar renders with the same shape.
pub type TimeFormatter = fn(f64, f64) -> String;

/// Format seconds as `M:SS`, `MM:SS` or `H:MM:SS`.
///
/// # Arguments
/// * `seconds` - Time to format; negative values render as zero
/// * `guide` - Reference length; hours are shown if either value has hours,
///   and minutes are zero-padded when hours are shown or the guide is ten
///   minutes or longer
///
/// # Returns
/// The formatted string, or `-:-` for a non-finite time
pub fn format_time(seconds: f64, guide: f64) -> String {
    if !seconds.is_finite() {
        return "-:-".to_string();
    }

    let seconds = seconds.max(0.0);
    let guide = if guide.is_finite() { guide.max(0.0) } else { 0.0 };

    let total = seconds as u64;
    let s = total % 60;
    let m = (total / 60) % 60;
    let h = total / 3600;

    let guide_total = guide as u64;
    let gm = (guide_total / 60) % 60;
    let gh = guide_total / 3600;

    let show_hours = h > 0 || gh > 0;
    if show_hours {
        format!("{}:{:02}:{:02}", h, m, s)
    } else if gm >= 10 {
        format!("{:02}:{:02}", m, s)
    } else {
        format!("{}:{:02}", m, s)
    }
}
