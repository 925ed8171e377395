//! Display helpers for result cards and pagination controls

use chrono::{DateTime, Utc};

/// Maximum number of page buttons shown at once
pub const PAGE_WINDOW: u32 = 5;

/// `m:ss`, or `h:mm:ss` past one hour. Negative and NaN render as `0:00`.
pub fn format_timestamp(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    let (hours, minutes, secs) = (total / 3600, (total % 3600) / 60, total % 60);

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{}:{:02}", minutes, secs)
    }
}

/// "1:05 – 1:20" when both ends are known, "from 1:05" with only a start
pub fn format_segment(start: Option<f64>, end: Option<f64>) -> Option<String> {
    match (start, end) {
        (Some(start), Some(end)) => Some(format!("{} – {}", format_timestamp(start), format_timestamp(end))),
        (Some(start), None) => Some(format!("from {}", format_timestamp(start))),
        _ => None,
    }
}

/// Relevance score (0..1) as a whole percentage
pub fn relevance_percent(score: f64) -> u32 {
    if !score.is_finite() {
        return 0;
    }
    (score.clamp(0.0, 1.0) * 100.0).round() as u32
}

pub fn format_created_at(created_at: &DateTime<Utc>) -> String {
    created_at.format("%Y-%m-%d").to_string()
}

/// Page numbers to offer, centred on `current` and clamped to `1..=total`
pub fn page_window(current: u32, total: u32) -> Vec<u32> {
    if total == 0 {
        return Vec::new();
    }

    let current = current.clamp(1, total);
    let width = PAGE_WINDOW.min(total);
    let start = current
        .saturating_sub(width / 2)
        .max(1)
        .min(total - width + 1);

    (start..start + width).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(0.0), "0:00");
        assert_eq!(format_timestamp(65.9), "1:05");
        assert_eq!(format_timestamp(3725.0), "1:02:05");
        assert_eq!(format_timestamp(-3.0), "0:00");
        assert_eq!(format_timestamp(f64::NAN), "0:00");
    }

    #[test]
    fn test_format_segment() {
        assert_eq!(format_segment(Some(65.0), Some(80.0)), Some("1:05 – 1:20".to_string()));
        assert_eq!(format_segment(Some(5.0), None), Some("from 0:05".to_string()));
        assert_eq!(format_segment(None, Some(5.0)), None);
    }

    #[test]
    fn test_relevance_percent() {
        assert_eq!(relevance_percent(0.874), 87);
        assert_eq!(relevance_percent(1.5), 100);
        assert_eq!(relevance_percent(-0.2), 0);
    }

    #[test]
    fn test_format_created_at() {
        let date = Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0).unwrap();
        assert_eq!(format_created_at(&date), "2025-03-01");
    }

    #[test]
    fn test_page_window() {
        assert_eq!(page_window(1, 0), Vec::<u32>::new());
        assert_eq!(page_window(1, 3), vec![1, 2, 3]);
        assert_eq!(page_window(1, 10), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(6, 10), vec![4, 5, 6, 7, 8]);
        assert_eq!(page_window(10, 10), vec![6, 7, 8, 9, 10]);
        assert_eq!(page_window(12, 10), vec![6, 7, 8, 9, 10]);
    }
}
