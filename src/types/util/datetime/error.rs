use std::{
    error::Error,
    fmt::{Display, Formatter, Result as FmtResult},
};

/// A string that is neither unix seconds nor an RFC 3339 datetime.
#[derive(Debug)]
pub enum UnixTimeParseError {
    Empty,
    Invalid(chrono::ParseError),
}

impl Display for UnixTimeParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Empty => f.write_str("timestamp is empty"),
            Self::Invalid(e) => write!(f, "timestamp is neither unix seconds nor rfc 3339: {e}"),
        }
    }
}

impl Error for UnixTimeParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Empty => None,
            Self::Invalid(e) => Some(e),
        }
    }
}

impl From<chrono::ParseError> for UnixTimeParseError {
    fn from(e: chrono::ParseError) -> Self {
        Self::Invalid(e)
    }
}

#[cfg(test)]
mod tests {
    use super::UnixTimeParseError;
    use std::error::Error;

    #[test]
    fn empty_has_no_source() {
        let err = UnixTimeParseError::Empty;
        assert_eq!(err.to_string(), "timestamp is empty");
        assert!(err.source().is_none());
    }

    #[test]
    fn invalid_keeps_chrono_error() {
        let inner = chrono::DateTime::parse_from_rfc3339("soon").unwrap_err();
        let err = UnixTimeParseError::from(inner);
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("timestamp is neither"));
    }
}
