//! Rep-notation parsing and transformation.
//!
//! Plan exercises carry a short free-form rep string (`"8-12"`, `"10 each leg"`,
//! `"count: 30s hold"`). This module parses those strings once into a tagged
//! union so volume transforms are exhaustive matches rather than string
//! sniffing. Anything unrecognized becomes [`RepNotation::Opaque`] and passes
//! through every transform unchanged.

use std::fmt;

/// Parsed rep notation
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RepNotation {
    /// Count-prefixed instruction, never adjusted (`"count: 30s hold"`)
    Count(String),
    /// Inclusive rep range (`"8-12"`)
    Range(u32, u32),
    /// Reps per side (`"12 each side"`)
    PerSide(u32),
    /// Reps per leg (`"10 each leg"`)
    PerLeg(u32),
    /// Plain rep count (`"10"`)
    Plain(u32),
    /// Unparseable notation, preserved verbatim
    Opaque(String),
}

/// Parse the leading unsigned integer out of a string, if any
fn leading_number(s: &str) -> Option<u32> {
    let digits: String = s.trim().chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

/// Add a signed delta to a rep count, never dropping below 1
fn shifted(n: u32, delta: i32) -> u32 {
    (i64::from(n) + i64::from(delta)).max(1) as u32
}

/// Scale a rep count by a factor, rounded, never dropping below 1
fn scaled(n: u32, factor: f64) -> u32 {
    if !factor.is_finite() || factor <= 0.0 {
        return n;
    }
    (f64::from(n) * factor).round().max(1.0) as u32
}

impl RepNotation {
    /// Parse a rep-notation string. Total: never fails, never panics.
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();
        let lower = trimmed.to_lowercase();

        if lower.starts_with("count") {
            return Self::Count(s.to_string());
        }

        if let Some((lhs, rhs)) = trimmed.split_once('-') {
            if let (Ok(min), Ok(max)) =
                (lhs.trim().parse::<u32>(), rhs.trim().parse::<u32>())
            {
                return Self::Range(min, max);
            }
        }

        if lower.contains("each side") {
            if let Some(n) = leading_number(trimmed) {
                return Self::PerSide(n);
            }
            return Self::Opaque(s.to_string());
        }

        if lower.contains("each leg") {
            if let Some(n) = leading_number(trimmed) {
                return Self::PerLeg(n);
            }
            return Self::Opaque(s.to_string());
        }

        if let Ok(n) = trimmed.parse::<u32>() {
            return Self::Plain(n);
        }

        Self::Opaque(s.to_string())
    }

    /// Shift the numeric part(s) by `delta`. `Count` and `Opaque` pass through.
    pub fn shift(&self, delta: i32) -> Self {
        match self {
            Self::Count(raw) => Self::Count(raw.clone()),
            Self::Range(min, max) => Self::Range(shifted(*min, delta), shifted(*max, delta)),
            Self::PerSide(n) => Self::PerSide(shifted(*n, delta)),
            Self::PerLeg(n) => Self::PerLeg(shifted(*n, delta)),
            Self::Plain(n) => Self::Plain(shifted(*n, delta)),
            Self::Opaque(raw) => Self::Opaque(raw.clone()),
        }
    }

    /// Scale the numeric part(s) by `factor`, rounding to the nearest rep.
    /// `Count` and `Opaque` pass through.
    pub fn scale(&self, factor: f64) -> Self {
        match self {
            Self::Count(raw) => Self::Count(raw.clone()),
            Self::Range(min, max) => Self::Range(scaled(*min, factor), scaled(*max, factor)),
            Self::PerSide(n) => Self::PerSide(scaled(*n, factor)),
            Self::PerLeg(n) => Self::PerLeg(scaled(*n, factor)),
            Self::Plain(n) => Self::Plain(scaled(*n, factor)),
            Self::Opaque(raw) => Self::Opaque(raw.clone()),
        }
    }

    /// Reps assumed per set for calorie estimation.
    ///
    /// Ranges report their lower bound; notations without a leading number
    /// fall back to 10.
    pub fn leading_rep_count(&self) -> u32 {
        match self {
            Self::Range(min, _) => *min,
            Self::PerSide(n) | Self::PerLeg(n) | Self::Plain(n) => *n,
            Self::Count(raw) | Self::Opaque(raw) => leading_number(raw).unwrap_or(10),
        }
    }
}

impl fmt::Display for RepNotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(raw) | Self::Opaque(raw) => f.write_str(raw),
            Self::Range(min, max) => write!(f, "{}-{}", min, max),
            Self::PerSide(n) => write!(f, "{} each side", n),
            Self::PerLeg(n) => write!(f, "{} each leg", n),
            Self::Plain(n) => write!(f, "{}", n),
        }
    }
}

/// Shift a rep-notation string by `delta`, preserving its shape.
///
/// Convenience wrapper used by the intensity adapter.
pub fn format_reps(notation: &str, delta: i32) -> String {
    RepNotation::parse(notation).shift(delta).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_shapes() {
        assert_eq!(RepNotation::parse("8-12"), RepNotation::Range(8, 12));
        assert_eq!(RepNotation::parse("12 each side"), RepNotation::PerSide(12));
        assert_eq!(RepNotation::parse("10 each leg"), RepNotation::PerLeg(10));
        assert_eq!(RepNotation::parse("10"), RepNotation::Plain(10));
        assert_eq!(
            RepNotation::parse("count: 30s hold"),
            RepNotation::Count("count: 30s hold".into())
        );
        assert_eq!(
            RepNotation::parse("to failure"),
            RepNotation::Opaque("to failure".into())
        );
    }

    #[test]
    fn test_count_prefix_is_case_insensitive() {
        assert!(matches!(
            RepNotation::parse("Count: 20s each side"),
            RepNotation::Count(_)
        ));
    }

    #[test]
    fn test_shift_range() {
        assert_eq!(format_reps("8-12", 2), "10-14");
    }

    #[test]
    fn test_shift_per_side() {
        assert_eq!(format_reps("12 each side", 2), "14 each side");
    }

    #[test]
    fn test_shift_per_leg() {
        assert_eq!(format_reps("10 each leg", 2), "12 each leg");
    }

    #[test]
    fn test_shift_plain() {
        assert_eq!(format_reps("10", 2), "12");
    }

    #[test]
    fn test_count_passes_through() {
        assert_eq!(format_reps("count: 30s hold", 2), "count: 30s hold");
    }

    #[test]
    fn test_opaque_passes_through() {
        assert_eq!(format_reps("to failure", 2), "to failure");
        assert_eq!(format_reps("", 2), "");
        assert_eq!(format_reps("-5", 2), "-5");
    }

    #[test]
    fn test_negative_shift_clamps_to_one() {
        assert_eq!(format_reps("2", -5), "1");
        assert_eq!(format_reps("1-3", -2), "1-1");
    }

    #[test]
    fn test_scale() {
        assert_eq!(RepNotation::parse("10").scale(0.8).to_string(), "8");
        assert_eq!(RepNotation::parse("8-12").scale(1.2).to_string(), "10-14");
        assert_eq!(
            RepNotation::parse("count: 30s hold").scale(1.2).to_string(),
            "count: 30s hold"
        );
        // Degenerate factors leave the notation alone
        assert_eq!(RepNotation::parse("10").scale(0.0).to_string(), "10");
        assert_eq!(RepNotation::parse("10").scale(f64::NAN).to_string(), "10");
    }

    #[test]
    fn test_scale_never_drops_below_one_rep() {
        assert_eq!(RepNotation::parse("1").scale(0.5).to_string(), "1");
    }

    #[test]
    fn test_leading_rep_count() {
        assert_eq!(RepNotation::parse("8-12").leading_rep_count(), 8);
        assert_eq!(RepNotation::parse("12 each side").leading_rep_count(), 12);
        assert_eq!(RepNotation::parse("10").leading_rep_count(), 10);
        assert_eq!(RepNotation::parse("to failure").leading_rep_count(), 10);
    }

    #[test]
    fn test_display_round_trips() {
        for s in ["8-12", "12 each side", "10 each leg", "10", "count: 30s hold"] {
            assert_eq!(RepNotation::parse(s).to_string(), s);
        }
    }
}
