//! Numeric text helpers shared by the GML and GRD codecs
//!
//! Both file formats need a textual form of `f64` that does not depend on
//! locale and reads back to the same value.

/// Round a value to two decimal places, halves rounding away from zero.
///
/// Rounding works on the shortest decimal text of the value, so a written
/// `1.005` rounds to `1.01` even though its binary form is slightly below.
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let text = format!("{}", value.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));
    if frac_part.len() <= 2 {
        return if value == 0.0 { 0.0 } else { value };
    }

    let digits = format!("{}{}", int_part, &frac_part[..2]);
    let Ok(mut cents) = digits.parse::<u128>() else {
        // far beyond two-decimal precision anyway
        return value;
    };
    if frac_part.as_bytes()[2] >= b'5' {
        cents += 1;
    }
    if cents == 0 {
        return 0.0;
    }

    let magnitude: f64 = format!("{}.{:02}", cents / 100, cents % 100)
        .parse()
        .unwrap_or(value.abs());
    magnitude.copysign(value)
}

/// Render a number in its shortest round-trip form, always keeping at
/// least one fractional digit (`18.0`, `3.25`, `-2.5`).
pub fn number_text(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// Render a number for a report: rounded to two decimals first.
pub fn report_number(value: f64) -> String {
    number_text(round2(value))
}

/// Parse a number written by [`number_text`] (or any plain decimal).
pub fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2_half_up() {
        assert_eq!(round2(1.125), 1.13);
        assert_eq!(round2(1.005), 1.01);
        assert_eq!(round2(0.285), 0.29);
        assert_eq!(round2(2.675), 2.68);
        assert_eq!(round2(-1.005), -1.01);
        assert_eq!(round2(2.344), 2.34);
        assert_eq!(round2(10.0), 10.0);
        assert_eq!(round2(-0.001), 0.0);
    }

    #[test]
    fn test_number_text_keeps_fraction() {
        assert_eq!(number_text(18.0), "18.0");
        assert_eq!(number_text(3.5), "3.5");
        assert_eq!(number_text(3.25), "3.25");
        assert_eq!(number_text(-2.0), "-2.0");
        assert_eq!(number_text(0.0), "0.0");
    }

    #[test]
    fn test_number_text_reads_back() {
        for value in [0.1, 1.0 / 3.0, 99.99, 1234.5678, -0.25] {
            assert_eq!(parse_number(&number_text(value)), Some(value));
        }
    }

    #[test]
    fn test_report_number_rounds() {
        assert_eq!(report_number(1.0 / 3.0), "0.33");
        assert_eq!(report_number(17.999), "18.0");
    }
}
