// src/normalize/time.rs
//
// Finish times. Two encodings survive in the corpus: a clock string
// ("HH:MM:SS", "MM:SS", seconds may carry decimals) and separate numeric
// hour/minute/second fields. Both end up as fractional minutes.

/// Parse a clock string into minutes. `None` unless every part is a valid
/// non-negative number; never panics.
pub fn parse_clock(text: &str) -> Option<f64> {
    let parts: Vec<&str> = text.trim().split(':').map(str::trim).collect();

    let whole = |p: &str| -> Option<f64> {
        if p.is_empty() || !p.bytes().all(|b| b.is_ascii_digit()) { return None; }
        p.parse::<f64>().ok()
    };
    let secs = |p: &str| -> Option<f64> {
        if p.is_empty() || p.starts_with('-') || p.starts_with('+') { return None; }
        p.parse::<f64>().ok().filter(|v| v.is_finite() && *v >= 0.0)
    };

    match parts.as_slice() {
        [h, m, s] => Some(whole(h)? * 60.0 + whole(m)? + secs(s)? / 60.0),
        [m, s] => Some(whole(m)? + secs(s)? / 60.0),
        _ => None,
    }
}

/// Assemble minutes from separate components. Missing components count as
/// zero, but at least one must be present.
pub fn from_parts(hours: Option<f64>, minutes: Option<f64>, seconds: Option<f64>) -> Option<f64> {
    if hours.is_none() && minutes.is_none() && seconds.is_none() {
        return None;
    }
    let total = hours.unwrap_or(0.0) * 60.0 + minutes.unwrap_or(0.0) + seconds.unwrap_or(0.0) / 60.0;
    (total.is_finite() && total >= 0.0).then_some(total)
}

/// Minutes -> "HH:MM:SS" (rounded to the second).
pub fn format_minutes(minutes: f64) -> String {
    let total_secs = (minutes * 60.0).round().max(0.0) as u64;
    let h = total_secs / 3600;
    let m = (total_secs % 3600) / 60;
    let s = total_secs % 60;
    format!("{h:02}:{m:02}:{s:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool { (a - b).abs() < 1e-9 }

    #[test]
    fn clock_three_and_two_parts() {
        assert!(approx(parse_clock("01:02:03").unwrap(), 62.05));
        assert!(approx(parse_clock("12:30").unwrap(), 12.5));
        assert!(approx(parse_clock("04:07.5").unwrap(), 4.125));
    }

    #[test]
    fn clock_rejects_partial_garbage() {
        assert_eq!(parse_clock("1:xx:03"), None);
        assert_eq!(parse_clock("62.5"), None);
        assert_eq!(parse_clock(""), None);
        assert_eq!(parse_clock("1:2:3:4"), None);
        assert_eq!(parse_clock("-1:30"), None);
    }

    #[test]
    fn parts_need_one_component() {
        assert_eq!(from_parts(None, None, None), None);
        assert!(approx(from_parts(None, Some(7.0), None).unwrap(), 7.0));
        assert!(approx(from_parts(Some(1.0), None, Some(30.0)).unwrap(), 60.5));
    }

    #[test]
    fn format_rounds_to_second() {
        assert_eq!(format_minutes(62.05), "01:02:03");
        assert_eq!(format_minutes(0.0), "00:00:00");
    }
}
