//! Formatting utilities used for CLI outputs.

/// 95.0 → "01h 35m"; fractional minutes are rounded.
pub fn mins2readable(mins: f64) -> String {
    if !mins.is_finite() {
        return "--".to_string();
    }
    let total = mins.round() as i64;
    format!("{:02}h {:02}m", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readable_durations() {
        assert_eq!(mins2readable(95.0), "01h 35m");
        assert_eq!(mins2readable(29.6), "00h 30m");
        assert_eq!(mins2readable(f64::NAN), "--");
    }
}
