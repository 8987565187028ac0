use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Error returned when a duration string does not match the
/// magnitude+unit grammar.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unrecognized duration value {text:?}")]
pub struct DurationParseError {
    pub text: String,
}

/// A signed schedule offset with whole-second granularity, e.g. `48h30m`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanvasDuration {
    secs: i64,
}

impl CanvasDuration {
    pub fn from_secs(secs: i64) -> Self {
        Self { secs }
    }

    pub fn as_secs(&self) -> i64 {
        self.secs
    }

    /// Flip the sign, turning an "after" offset into a "before" one.
    pub fn negated(&self) -> Self {
        Self { secs: -self.secs }
    }

    /// Parse a magnitude+unit duration such as `48h`, `30m`, `1h30m45s`,
    /// or `-15m`. One pair of enclosing quote characters is stripped first
    /// when present. Units are hours, minutes, and seconds; fractional
    /// magnitudes are accepted and the total truncates to whole seconds.
    pub fn parse(text: &str) -> Result<Self, DurationParseError> {
        let err = || DurationParseError {
            text: text.to_string(),
        };

        let mut s = text;
        if s.len() >= 2 && s.starts_with('"') && s.ends_with('"') {
            s = &s[1..s.len() - 1];
        }

        let negative = match s.as_bytes().first() {
            Some(b'-') => {
                s = &s[1..];
                true
            }
            Some(b'+') => {
                s = &s[1..];
                false
            }
            _ => false,
        };
        if s.is_empty() {
            return Err(err());
        }
        if s == "0" {
            return Ok(Self { secs: 0 });
        }

        let mut total = 0.0f64;
        let mut rest = s;
        while !rest.is_empty() {
            let digits = rest
                .find(|c: char| !c.is_ascii_digit() && c != '.')
                .unwrap_or(rest.len());
            let (magnitude, tail) = rest.split_at(digits);
            let value: f64 = magnitude.parse().map_err(|_| err())?;

            let unit = tail
                .find(|c: char| c.is_ascii_digit() || c == '.')
                .unwrap_or(tail.len());
            let (unit, tail) = tail.split_at(unit);
            let per_unit = match unit {
                "h" => 3600.0,
                "m" => 60.0,
                "s" => 1.0,
                _ => return Err(err()),
            };

            total += value * per_unit;
            rest = tail;
        }

        let secs = total as i64;
        Ok(Self {
            secs: if negative { -secs } else { secs },
        })
    }
}

impl fmt::Display for CanvasDuration {
    /// Canonical magnitude+unit form: `0s` for zero, otherwise hours,
    /// minutes, and seconds with leading zero-valued units omitted and
    /// inner zeros kept (`48h0m0s`, `1m30s`, `45s`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.secs == 0 {
            return write!(f, "0s");
        }
        let mut rem = self.secs;
        if rem < 0 {
            write!(f, "-")?;
            rem = -rem;
        }
        let hours = rem / 3600;
        let minutes = rem % 3600 / 60;
        let seconds = rem % 60;
        if hours > 0 {
            write!(f, "{}h{}m{}s", hours, minutes, seconds)
        } else if minutes > 0 {
            write!(f, "{}m{}s", minutes, seconds)
        } else {
            write!(f, "{}s", seconds)
        }
    }
}

impl Serialize for CanvasDuration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CanvasDuration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        CanvasDuration::parse(&text).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_unit() {
        assert_eq!(CanvasDuration::parse("48h").unwrap().as_secs(), 48 * 3600);
        assert_eq!(CanvasDuration::parse("30m").unwrap().as_secs(), 1800);
        assert_eq!(CanvasDuration::parse("45s").unwrap().as_secs(), 45);
    }

    #[test]
    fn test_parse_combined_units() {
        assert_eq!(
            CanvasDuration::parse("48h30m").unwrap().as_secs(),
            48 * 3600 + 1800
        );
        assert_eq!(
            CanvasDuration::parse("1h30m45s").unwrap().as_secs(),
            3600 + 1800 + 45
        );
        assert_eq!(
            CanvasDuration::parse("48h0m0s").unwrap().as_secs(),
            48 * 3600
        );
    }

    #[test]
    fn test_parse_signed() {
        assert_eq!(CanvasDuration::parse("-30m").unwrap().as_secs(), -1800);
        assert_eq!(CanvasDuration::parse("+30m").unwrap().as_secs(), 1800);
    }

    #[test]
    fn test_parse_fractional() {
        assert_eq!(CanvasDuration::parse("1.5h").unwrap().as_secs(), 5400);
    }

    #[test]
    fn test_parse_zero() {
        assert_eq!(CanvasDuration::parse("0").unwrap().as_secs(), 0);
        assert_eq!(CanvasDuration::parse("0s").unwrap().as_secs(), 0);
    }

    #[test]
    fn test_parse_quoted() {
        assert_eq!(
            CanvasDuration::parse("\"48h0m0s\"").unwrap().as_secs(),
            48 * 3600
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "-", "h", "12", "12x", "12h3", "twelve"] {
            assert!(
                CanvasDuration::parse(bad).is_err(),
                "expected parse failure for {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_format_canonical() {
        assert_eq!(CanvasDuration::from_secs(0).to_string(), "0s");
        assert_eq!(CanvasDuration::from_secs(45).to_string(), "45s");
        assert_eq!(CanvasDuration::from_secs(90).to_string(), "1m30s");
        assert_eq!(CanvasDuration::from_secs(48 * 3600).to_string(), "48h0m0s");
        assert_eq!(CanvasDuration::from_secs(-3600).to_string(), "-1h0m0s");
    }

    #[test]
    fn test_negated() {
        let d = CanvasDuration::from_secs(1800);
        assert_eq!(d.negated().as_secs(), -1800);
        assert_eq!(d.negated().negated(), d);
    }

    #[test]
    fn test_serde_codec() {
        let d: CanvasDuration = serde_json::from_str(r#""48h0m0s""#).unwrap();
        assert_eq!(d.as_secs(), 48 * 3600);
        assert_eq!(serde_json::to_string(&d).unwrap(), r#""48h0m0s""#);
    }
}
