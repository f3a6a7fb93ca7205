use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    TooLong { field: &'static str, max: usize, actual: usize },
    InvalidReceptor { input: String },
    InvalidSenderLine { input: String },
    InvalidTagCharacter { input: String },
    TooManyReceptors { max: usize, actual: usize },
    TooManyIds { field: &'static str, max: usize, actual: usize },
    ArrayLengthMismatch { field: &'static str, expected: usize, actual: usize },
    TimestampInPast { field: &'static str },
    TimestampInFuture { field: &'static str },
    EndBeforeStart { startdate: u64, enddate: u64 },
    DateRangeTooWide { max_seconds: u64, actual: u64 },
    TooManySpaces { field: &'static str, max: usize, actual: usize },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::TooLong { field, max, actual } => {
                write!(f, "{field} is too long: {actual} characters (max {max})")
            }
            Self::InvalidReceptor { input } => {
                write!(f, "invalid receptor number: {input} (expected 09xxxxxxxxx)")
            }
            Self::InvalidSenderLine { input } => {
                write!(
                    f,
                    "invalid sender line: {input} (expected 4-15 digits with optional + or 00 prefix)"
                )
            }
            Self::InvalidTagCharacter { input } => {
                write!(
                    f,
                    "invalid tag: {input} (only letters, digits, hyphen and underscore are allowed)"
                )
            }
            Self::TooManyReceptors { max, actual } => {
                write!(f, "too many receptors: {actual} (max {max})")
            }
            Self::TooManyIds { field, max, actual } => {
                write!(f, "too many {field} values: {actual} (max {max})")
            }
            Self::ArrayLengthMismatch {
                field,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{field} length mismatch: {actual} entries (expected {expected})"
                )
            }
            Self::TimestampInPast { field } => write!(f, "{field} must not be in the past"),
            Self::TimestampInFuture { field } => write!(f, "{field} must not be in the future"),
            Self::EndBeforeStart { startdate, enddate } => {
                write!(
                    f,
                    "enddate {enddate} must not be earlier than startdate {startdate}"
                )
            }
            Self::DateRangeTooWide {
                max_seconds,
                actual,
            } => {
                write!(
                    f,
                    "date range is too wide: {actual} seconds (max {max_seconds})"
                )
            }
            Self::TooManySpaces { field, max, actual } => {
                write!(f, "{field} contains too many spaces: {actual} (max {max})")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::ValidationError;

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::Empty { field: "receptor" };
        assert_eq!(err.to_string(), "receptor must not be empty");

        let err = ValidationError::TooManyReceptors {
            max: 200,
            actual: 201,
        };
        assert_eq!(err.to_string(), "too many receptors: 201 (max 200)");

        let err = ValidationError::InvalidReceptor {
            input: "12345".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "invalid receptor number: 12345 (expected 09xxxxxxxxx)"
        );

        let err = ValidationError::ArrayLengthMismatch {
            field: "localid",
            expected: 3,
            actual: 2,
        };
        assert_eq!(
            err.to_string(),
            "localid length mismatch: 2 entries (expected 3)"
        );

        let err = ValidationError::DateRangeTooWide {
            max_seconds: 86_400,
            actual: 90_000,
        };
        assert_eq!(
            err.to_string(),
            "date range is too wide: 90000 seconds (max 86400)"
        );
    }
}
