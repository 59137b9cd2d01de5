// Permissive numeric parsing for imported cells.
//
// Every numeric cell in an import goes through `parse_number_or_zero`, so
// the "bad input becomes zero" rule lives in exactly one place.

/// Parse a cell as a number, yielding `0.0` for anything that is not a
/// finite number.
///
/// Surrounding whitespace is ignored. Negative and fractional values are
/// accepted as written.
pub fn parse_number_or_zero(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Parse a cell into a counting stat.
///
/// Built on `parse_number_or_zero`; fractions truncate toward zero and
/// negative values clamp to zero because counts are unsigned.
pub fn parse_count(raw: &str) -> u32 {
    let v = parse_number_or_zero(raw);
    if v <= 0.0 {
        0
    } else if v >= u32::MAX as f64 {
        u32::MAX
    } else {
        v.trunc() as u32
    }
}

/// Parse the inning of a plate appearance. A missing or zero inning is
/// recorded as the first inning.
pub fn parse_inning(raw: &str) -> u32 {
    match parse_count(raw) {
        0 => 1,
        n => n,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_numbers_parse() {
        assert!((parse_number_or_zero("12") - 12.0).abs() < f64::EPSILON);
        assert!((parse_number_or_zero("4.2") - 4.2).abs() < f64::EPSILON);
    }

    #[test]
    fn whitespace_is_ignored() {
        assert!((parse_number_or_zero("  7 ") - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_and_text_become_zero() {
        assert_eq!(parse_number_or_zero(""), 0.0);
        assert_eq!(parse_number_or_zero("   "), 0.0);
        assert_eq!(parse_number_or_zero("abc"), 0.0);
        assert_eq!(parse_number_or_zero("3点"), 0.0);
    }

    #[test]
    fn non_finite_becomes_zero() {
        assert_eq!(parse_number_or_zero("NaN"), 0.0);
        assert_eq!(parse_number_or_zero("inf"), 0.0);
    }

    #[test]
    fn negative_numbers_are_accepted() {
        assert!((parse_number_or_zero("-3") + 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn counts_truncate_and_clamp() {
        assert_eq!(parse_count("5"), 5);
        assert_eq!(parse_count("5.9"), 5);
        assert_eq!(parse_count("-2"), 0);
        assert_eq!(parse_count("x"), 0);
    }

    #[test]
    fn inning_defaults_to_first() {
        assert_eq!(parse_inning(""), 1);
        assert_eq!(parse_inning("0"), 1);
        assert_eq!(parse_inning("6"), 6);
    }
}
