use std::fmt;
use std::str::FromStr;

use crate::domain::validation::ConfigurationError;

#[derive(Clone, PartialEq, Eq, Hash)]
/// Pingen API access token.
///
/// Invariant: non-empty after trimming. The token travels inside the request URL, so its
/// `Debug` output is redacted.
pub struct Token(String);

impl Token {
    /// Name of the URL segment preceding the token (`/token/{token}`).
    pub const FIELD: &'static str = "token";

    /// Create a validated [`Token`].
    pub fn new(value: impl Into<String>) -> Result<Self, ConfigurationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ConfigurationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(<redacted>)")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Pingen environment selecting the API base URL.
pub enum Environment {
    /// `https://api.pingen.com`
    #[default]
    Production,
    /// `https://stage-api.pingen.com`
    Staging,
}

impl Environment {
    /// Legacy numeric mode for production.
    pub const MODE_PRODUCTION: i64 = 1;
    /// Legacy numeric mode for staging.
    pub const MODE_STAGING: i64 = 2;

    /// Resolve the legacy numeric mode (`1` production, `2` staging).
    pub fn from_mode(mode: i64) -> Result<Self, ConfigurationError> {
        match mode {
            Self::MODE_PRODUCTION => Ok(Self::Production),
            Self::MODE_STAGING => Ok(Self::Staging),
            other => Err(ConfigurationError::UnknownEnvironment {
                input: other.to_string(),
            }),
        }
    }

    /// Base URL of the API for this environment (no trailing slash).
    pub fn base_url(self) -> &'static str {
        match self {
            Self::Production => "https://api.pingen.com",
            Self::Staging => "https://stage-api.pingen.com",
        }
    }
}

impl FromStr for Environment {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(Self::Production),
            "staging" | "stage" => Ok(Self::Staging),
            _ => Err(ConfigurationError::UnknownEnvironment {
                input: s.to_owned(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Delivery speed for postal sendings.
pub enum Speed {
    #[default]
    Priority,
    Economy,
}

impl Speed {
    /// JSON/path field name (`speed`).
    pub const FIELD: &'static str = "speed";

    /// Numeric value used on the wire.
    pub fn code(self) -> u8 {
        match self {
            Self::Priority => 1,
            Self::Economy => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Print mode.
pub enum Color {
    BlackAndWhite,
    #[default]
    Color,
}

impl Color {
    /// JSON field name (`color`).
    pub const FIELD: &'static str = "color";

    /// Numeric value used on the wire.
    pub fn code(self) -> u8 {
        match self {
            Self::BlackAndWhite => 0,
            Self::Color => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Sort direction for list endpoints (`sorttype`).
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// ISO 3166-1 alpha-2 country code.
///
/// Invariant: exactly two ASCII letters, stored uppercase.
pub struct CountryCode(String);

impl CountryCode {
    /// Path segment name (`country`).
    pub const FIELD: &'static str = "country";

    /// Create a validated [`CountryCode`].
    pub fn new(value: impl Into<String>) -> Result<Self, ConfigurationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ConfigurationError::Empty { field: Self::FIELD });
        }
        if trimmed.len() != 2 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigurationError::InvalidCountryCode {
                input: trimmed.to_owned(),
            });
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    /// Switzerland, the default country of the post calculator.
    pub fn switzerland() -> Self {
        Self("CH".to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// ISO 4217 currency code used by the calculator endpoints.
///
/// Invariant: exactly three ASCII letters, stored uppercase.
pub struct Currency(String);

impl Currency {
    /// Path segment name (`currency`).
    pub const FIELD: &'static str = "currency";

    /// Create a validated [`Currency`].
    pub fn new(value: impl Into<String>) -> Result<Self, ConfigurationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ConfigurationError::Empty { field: Self::FIELD });
        }
        if trimmed.len() != 3 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigurationError::InvalidCurrency {
                input: trimmed.to_owned(),
            });
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self("CHF".to_owned())
    }
}

#[derive(Debug, Clone)]
/// Fax number with an explicit international prefix, normalized to E.164.
///
/// Equality and hashing are based on the E.164 form.
pub struct FaxNumber {
    e164: String,
}

impl FaxNumber {
    /// Path segment name (`number`).
    pub const FIELD: &'static str = "number";

    /// Parse a fax number starting with `+` and the country code.
    pub fn parse(input: impl Into<String>) -> Result<Self, ConfigurationError> {
        let input = input.into();
        let raw = input.trim();
        if raw.is_empty() {
            return Err(ConfigurationError::Empty { field: Self::FIELD });
        }

        let parsed = phonenumber::parse(None, raw).map_err(|_| {
            ConfigurationError::InvalidFaxNumber {
                input: raw.to_owned(),
            }
        })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self { e164 })
    }

    /// Normalized E.164 representation (for example `+41445551234`).
    pub fn e164(&self) -> &str {
        &self.e164
    }
}

impl PartialEq for FaxNumber {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for FaxNumber {}

impl std::hash::Hash for FaxNumber {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.e164.hash(state);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// How body parameters of non-upload POST requests are put on the wire.
pub enum PostEncoding {
    /// Raw JSON request body.
    #[default]
    Json,
    /// JSON string inside a urlencoded `data` form field.
    FormField,
}
