//! Unix timestamps as sent by the Bot API.
//!
//! Telegram transmits dates (`date`, `edit_date`, `until_date`,
//! `expire_date`, ...) as integer seconds since the Unix epoch. [`UnixTime`]
//! keeps that integer verbatim on the wire and converts to
//! [`chrono::DateTime<Utc>`] on demand.

mod error;

pub use self::error::UnixTimeParseError;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

/// Seconds since the Unix epoch.
///
/// # serde
///
/// (De)serializes as a plain JSON integer.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct UnixTime(i64);

impl UnixTime {
    /// Create a timestamp from raw seconds.
    pub const fn from_secs(unix_seconds: i64) -> Self {
        Self(unix_seconds)
    }

    /// Raw seconds since the epoch.
    pub const fn as_secs(self) -> i64 {
        self.0
    }

    /// The current time, truncated to whole seconds.
    pub fn now() -> Self {
        Self(Utc::now().timestamp())
    }

    /// Convert to a UTC datetime.
    ///
    /// Returns `None` when the value is outside chrono's representable range.
    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.0, 0)
    }

    /// Parse either raw seconds (`"1628594197"`) or an RFC 3339 datetime
    /// (`"2021-08-10T11:16:37Z"`).
    ///
    /// # Errors
    ///
    /// Returns [`UnixTimeParseError`] when the input is neither.
    pub fn parse(input: &str) -> Result<Self, UnixTimeParseError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(UnixTimeParseError::Empty);
        }

        if let Ok(secs) = input.parse::<i64>() {
            return Ok(Self(secs));
        }

        DateTime::parse_from_rfc3339(input)
            .map(|dt| Self(dt.timestamp()))
            .map_err(UnixTimeParseError::from)
    }
}

impl From<DateTime<Utc>> for UnixTime {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt.timestamp())
    }
}

impl From<UnixTime> for i64 {
    fn from(ts: UnixTime) -> Self {
        ts.0
    }
}

/// Writes RFC 3339 in UTC, or the raw seconds when out of chrono's range.
impl Display for UnixTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.to_datetime() {
            Some(dt) => f.write_str(&dt.to_rfc3339_opts(SecondsFormat::Secs, true)),
            None => write!(f, "{}", self.0),
        }
    }
}

impl FromStr for UnixTime {
    type Err = UnixTimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::{UnixTime, UnixTimeParseError};
    use chrono::{TimeZone, Utc};
    use serde_test::{assert_tokens, Token};
    use std::str::FromStr;

    #[test]
    fn serializes_as_integer() {
        assert_tokens(&UnixTime::from_secs(1_628_594_197), &[Token::I64(1_628_594_197)]);
    }

    #[test]
    fn from_json_integer() {
        let ts: UnixTime = serde_json::from_str("1580608922").unwrap();
        assert_eq!(ts.as_secs(), 1_580_608_922);
    }

    #[test]
    fn to_datetime() {
        let ts = UnixTime::from_secs(1_580_608_922);
        let expected = Utc.with_ymd_and_hms(2020, 2, 2, 2, 2, 2).unwrap();
        assert_eq!(ts.to_datetime(), Some(expected));
        assert_eq!(UnixTime::from(expected), ts);
    }

    #[test]
    fn display_rfc3339() {
        assert_eq!(UnixTime::from_secs(0).to_string(), "1970-01-01T00:00:00Z");
        assert_eq!(
            UnixTime::from_secs(1_628_594_197).to_string(),
            "2021-08-10T11:16:37Z"
        );
    }

    #[test]
    fn parse_seconds_and_rfc3339() {
        assert_eq!(UnixTime::from_str("1628594197").unwrap().as_secs(), 1_628_594_197);
        assert_eq!(
            UnixTime::from_str("2021-08-10T11:16:37+00:00").unwrap().as_secs(),
            1_628_594_197
        );
    }

    #[test]
    fn parse_rejects_garbage() {
        let err = UnixTime::from_str("").unwrap_err();
        assert!(matches!(err, UnixTimeParseError::Empty));

        let err = UnixTime::from_str("yesterday").unwrap_err();
        assert!(matches!(err, UnixTimeParseError::Invalid(_)));
    }
}
