// ABOUTME: Formatting of the average grade for the grade column header.

/// Suffix appended to the grade header, e.g. `" (2.10)"`.
///
/// Returns `None` for the NaN sentinel so the header is left untouched.
pub fn header_suffix(average: f64) -> Option<String> {
    if average.is_nan() {
        return None;
    }
    Some(format!(" ({})", two_decimals(average)))
}

/// Header text with the suffix appended.
pub fn annotate_label(label: &str, average: f64) -> Option<String> {
    header_suffix(average).map(|suffix| format!("{label}{suffix}"))
}

/// Two decimals, exact halves rounded away from zero.
///
/// A double lies exactly between two hundredths only when it is an odd
/// multiple of 1/8, and `{:.2}` rounds those to even.
fn two_decimals(value: f64) -> String {
    let eighths = value * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 != 0.0 {
        return format!("{:.2}", (value * 100.0).round() / 100.0);
    }
    format!("{:.2}", value)
}
