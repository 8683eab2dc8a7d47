//! Numeric ranges embedded in option descriptions.
//!
//! Float options carry their bounds as free text, e.g.
//! `"opacity of active windows [0.0 - 1.0]"`.  [`extract_range`] pulls the
//! `(min, max)` pair out of the **last** bracketed group and falls back to
//! [`DEFAULT_RANGE`] for anything it cannot read.

/// Range used when a description has no readable bracketed range.
pub const DEFAULT_RANGE: (f64, f64) = (0.0, 1.0);

/// Extract a `(min, max)` range hint from `description`.
///
/// Malformed hints are never an error; they yield [`DEFAULT_RANGE`].  No
/// ordering check is done on the result.
///
/// ```
/// use hyprcc::range::extract_range;
/// assert_eq!(extract_range("Opacity value [0.1 - 0.9]"), (0.1, 0.9));
/// assert_eq!(extract_range("No range here"), (0.0, 1.0));
/// ```
pub fn extract_range(description: &str) -> (f64, f64) {
    let Some(open) = description.rfind('[') else {
        return DEFAULT_RANGE;
    };
    let rest = &description[open + 1..];
    let Some(close) = rest.find(']') else {
        return DEFAULT_RANGE;
    };
    let inner = rest[..close].trim();
    if inner.is_empty() {
        return DEFAULT_RANGE;
    }
    split_bounds(inner).unwrap_or(DEFAULT_RANGE)
}

/// Try every `-` as the separator so that signed bounds (`-5 - 5`) work.
/// `NaN` and infinite bounds are not a range.
fn split_bounds(text: &str) -> Option<(f64, f64)> {
    text.match_indices('-').find_map(|(i, _)| {
        let min = parse_bound(&text[..i])?;
        let max = parse_bound(&text[i + 1..])?;
        Some((min, max))
    })
}

fn parse_bound(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_bracketed_range() {
        assert_eq!(extract_range("Opacity value [0.1 - 0.9]"), (0.1, 0.9));
        assert_eq!(extract_range("rounding power [2.0-10.0]"), (2.0, 10.0));
    }

    #[test]
    fn missing_or_empty_brackets_use_default() {
        assert_eq!(extract_range("No range here"), (0.0, 1.0));
        assert_eq!(extract_range("Empty brackets []"), (0.0, 1.0));
        assert_eq!(extract_range("Blank brackets [   ]"), (0.0, 1.0));
        assert_eq!(extract_range("Unclosed [0 - 5"), (0.0, 1.0));
    }

    #[test]
    fn last_bracket_wins() {
        assert_eq!(extract_range("see [docs] for [0 - 3]"), (0.0, 3.0));
    }

    #[test]
    fn closing_bracket_is_the_first_after_opening() {
        assert_eq!(extract_range("range [1 - 2] trailing ]"), (1.0, 2.0));
    }

    #[test]
    fn negative_bounds() {
        assert_eq!(extract_range("offset [-5 - 5]"), (-5.0, 5.0));
        assert_eq!(extract_range("shift [-10 - -2]"), (-10.0, -2.0));
    }

    #[test]
    fn garbage_uses_default() {
        assert_eq!(extract_range("a [b - c]"), (0.0, 1.0));
        assert_eq!(extract_range("one bound [5]"), (0.0, 1.0));
        assert_eq!(extract_range("three [1 - 2 - 3]"), (0.0, 1.0));
    }

    #[test]
    fn non_finite_bounds_use_default() {
        assert_eq!(extract_range("x [nan - 1]"), (0.0, 1.0));
        assert_eq!(extract_range("x [inf - 2]"), (0.0, 1.0));
        assert_eq!(extract_range("x [0 - infinity]"), (0.0, 1.0));
        assert_eq!(extract_range("x [-inf - 3]"), (0.0, 1.0));
    }

    #[test]
    fn reversed_range_is_returned_as_written() {
        assert_eq!(extract_range("odd [1.0 - 0.0]"), (1.0, 0.0));
    }
}
