//! Input coercion helpers
//!
//! These mirror the form-level coercions the presentation layer applies to
//! free-text input, kept as pure functions so they are testable without a
//! rendering harness.

/// Derive the target-exercise list from the raw comma-separated text.
///
/// Entries are trimmed, empty entries are dropped, order is preserved. The
/// raw text itself is kept by the preferences store so in-progress typing
/// survives; only this derived list is submitted.
pub fn parse_target_exercises(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(String::from)
        .collect()
}

/// Coerce numeric text input to a number.
///
/// Invalid text yields `NaN`, which is surfaced as-is; rejecting
/// out-of-range or non-finite values is the analysis service's job.
pub fn parse_number(text: &str) -> f64 {
    text.trim().parse().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Bench Press,  Squat ,,Deadlift", vec!["Bench Press", "Squat", "Deadlift"])]
    #[case("", vec![])]
    #[case(" , ,", vec![])]
    #[case("Overhead Press", vec!["Overhead Press"])]
    #[case("a,b,a", vec!["a", "b", "a"])]
    fn test_parse_target_exercises(#[case] text: &str, #[case] expected: Vec<&str>) {
        assert_eq!(parse_target_exercises(text), expected);
    }

    #[rstest]
    #[case("175", 175.0)]
    #[case(" 1.55 ", 1.55)]
    #[case("-2.5", -2.5)]
    fn test_parse_number_valid(#[case] text: &str, #[case] expected: f64) {
        assert_eq!(parse_number(text), expected);
    }

    #[rstest]
    #[case("abc")]
    #[case("")]
    #[case("1,75")]
    fn test_parse_number_invalid_yields_nan(#[case] text: &str) {
        assert!(parse_number(text).is_nan());
    }
}
