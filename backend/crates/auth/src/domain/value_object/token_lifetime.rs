//! Token Lifetime
//!
//! Parses time-span strings such as `7d`, `10h`, `2 days` or `1h 30m`.
//! A bare number is a count of milliseconds, so `"120"` is 120 ms.

use chrono::TimeDelta;
use humantime::DurationError;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

const DAY_MS: i64 = 24 * 60 * 60 * 1_000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifetimeError {
    #[error("invalid time span {0:?}")]
    Invalid(String),

    #[error("time span {0:?} must be positive")]
    NotPositive(String),

    #[error("time span {0:?} is too large")]
    OutOfRange(String),
}

/// Positive token lifetime with millisecond precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TokenLifetime {
    millis: i64,
}

impl TokenLifetime {
    pub fn from_millis(millis: i64) -> Result<Self, LifetimeError> {
        if millis <= 0 {
            return Err(LifetimeError::NotPositive(millis.to_string()));
        }
        // Keep `now + lifetime` representable
        TimeDelta::try_milliseconds(millis)
            .ok_or_else(|| LifetimeError::OutOfRange(millis.to_string()))?;
        Ok(Self { millis })
    }

    pub fn days(days: i64) -> Result<Self, LifetimeError> {
        let millis = days
            .checked_mul(DAY_MS)
            .ok_or_else(|| LifetimeError::OutOfRange(format!("{days}d")))?;
        Self::from_millis(millis)
    }

    /// Unit-suffixed spans are case-insensitive and may put spaces between
    /// a number and its unit.
    pub fn parse(input: &str) -> Result<Self, LifetimeError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(LifetimeError::Invalid(input.to_string()));
        }

        if trimmed.bytes().all(|b| b.is_ascii_digit()) {
            let millis: i64 = trimmed
                .parse()
                .map_err(|_| LifetimeError::OutOfRange(input.to_string()))?;
            return Self::from_millis(millis).map_err(|e| match e {
                LifetimeError::NotPositive(_) => LifetimeError::NotPositive(input.to_string()),
                _ => LifetimeError::OutOfRange(input.to_string()),
            });
        }

        let duration = humantime::parse_duration(&join_number_and_unit(trimmed)).map_err(
            |e| match e {
                DurationError::NumberOverflow => LifetimeError::OutOfRange(input.to_string()),
                _ => LifetimeError::Invalid(input.to_string()),
            },
        )?;

        Self::from_duration(duration, input)
    }

    fn from_duration(duration: Duration, input: &str) -> Result<Self, LifetimeError> {
        if duration.as_millis() == 0 {
            return Err(LifetimeError::NotPositive(input.to_string()));
        }
        let millis = i64::try_from(duration.as_millis())
            .map_err(|_| LifetimeError::OutOfRange(input.to_string()))?;
        Self::from_millis(millis).map_err(|_| LifetimeError::OutOfRange(input.to_string()))
    }

    pub fn as_millis(&self) -> i64 {
        self.millis
    }

    /// Whole seconds, rounded down (the granularity of `exp`)
    pub fn as_secs(&self) -> i64 {
        self.millis / 1_000
    }

    pub fn as_time_delta(&self) -> TimeDelta {
        TimeDelta::milliseconds(self.millis)
    }
}

/// Lower-case and drop the blanks between a number and its unit
/// (`"2 Days"` → `"2days"`), the form `humantime` expects.
fn join_number_and_unit(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if c.is_whitespace() && out.ends_with(|p: char| p.is_ascii_digit()) {
            continue;
        }
        out.extend(c.to_lowercase());
    }
    out
}

impl Default for TokenLifetime {
    fn default() -> Self {
        Self { millis: 7 * DAY_MS }
    }
}

impl FromStr for TokenLifetime {
    type Err = LifetimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TokenLifetime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn days(n: i64) -> TokenLifetime {
        TokenLifetime::days(n).unwrap()
    }

    #[test]
    fn test_parse_units() {
        assert_eq!(TokenLifetime::parse("7d").unwrap(), days(7));
        assert_eq!(TokenLifetime::parse("10h").unwrap().as_secs(), 36_000);
        assert_eq!(TokenLifetime::parse("2 days").unwrap(), days(2));
        assert_eq!(TokenLifetime::parse("30m").unwrap().as_secs(), 1_800);
        assert_eq!(TokenLifetime::parse("45 Seconds").unwrap().as_secs(), 45);
        assert_eq!(TokenLifetime::parse("1w").unwrap(), days(7));
        assert_eq!(TokenLifetime::parse("1h 30m").unwrap().as_millis(), 5_400_000);
        assert_eq!(
            TokenLifetime::parse("1y").unwrap().as_millis(),
            31_557_600_000
        );
    }

    #[test]
    fn test_bare_number_is_milliseconds() {
        assert_eq!(TokenLifetime::parse("120").unwrap().as_millis(), 120);
        assert_eq!(TokenLifetime::parse("120").unwrap().as_secs(), 0);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for input in ["seven days", "7 fortnights", "", "   ", "-1d", "+120", "1.5h"] {
            assert!(
                matches!(TokenLifetime::parse(input), Err(LifetimeError::Invalid(_))),
                "{input:?} should be invalid"
            );
        }
    }

    #[test]
    fn test_parse_rejects_zero() {
        assert!(matches!(
            TokenLifetime::parse("0d"),
            Err(LifetimeError::NotPositive(_))
        ));
        assert!(matches!(
            TokenLifetime::parse("0"),
            Err(LifetimeError::NotPositive(_))
        ));
        assert!(matches!(
            TokenLifetime::from_millis(0),
            Err(LifetimeError::NotPositive(_))
        ));
    }

    #[test]
    fn test_parse_rejects_overflow() {
        assert!(matches!(
            TokenLifetime::parse("99999999999999999999y"),
            Err(LifetimeError::OutOfRange(_))
        ));
        assert!(matches!(
            TokenLifetime::parse("99999999999999999999"),
            Err(LifetimeError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_days_is_checked() {
        assert_eq!(days(7).as_secs(), 7 * 24 * 3600);
        assert!(matches!(
            TokenLifetime::days(0),
            Err(LifetimeError::NotPositive(_))
        ));
        assert!(matches!(
            TokenLifetime::days(-3),
            Err(LifetimeError::NotPositive(_))
        ));
        assert!(matches!(
            TokenLifetime::days(i64::MAX),
            Err(LifetimeError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_default_is_seven_days() {
        assert_eq!(TokenLifetime::default(), days(7));
        assert_eq!(TokenLifetime::default().as_time_delta(), TimeDelta::days(7));
    }
}
