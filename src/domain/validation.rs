use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    HostTooShort { host: String },
    InvalidUrl { input: String },
    InvalidPhoneNumber { input: String },
    MaxSmsPerMessageOutOfRange { actual: i32 },
    EmptySegment { index: usize },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::HostTooShort { host } => {
                write!(
                    f,
                    "host too short: {host:?} (expected at least 4 characters)"
                )
            }
            Self::InvalidUrl { input } => write!(f, "invalid endpoint url: {input}"),
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
            Self::MaxSmsPerMessageOutOfRange { actual } => {
                write!(f, "maxSmsPerMessage must be positive, got {actual}")
            }
            Self::EmptySegment { index } => {
                write!(f, "binary message segment {index} is empty")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
