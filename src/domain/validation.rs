use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    Empty { field: &'static str },
    UnknownEnvironment { input: String },
    InvalidBaseUrl { input: String },
    InvalidCountryCode { input: String },
    InvalidCurrency { input: String },
    InvalidFaxNumber { input: String },
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::UnknownEnvironment { input } => {
                write!(f, "the specified environment does not exist: {input}")
            }
            Self::InvalidBaseUrl { input } => write!(f, "invalid base url: {input}"),
            Self::InvalidCountryCode { input } => {
                write!(f, "invalid country code: {input} (expected ISO 3166-1 alpha-2)")
            }
            Self::InvalidCurrency { input } => {
                write!(f, "invalid currency: {input} (expected ISO 4217 code)")
            }
            Self::InvalidFaxNumber { input } => write!(f, "invalid fax number: {input}"),
        }
    }
}

impl std::error::Error for ConfigurationError {}
