use crate::domain::validation::ValidationError;

use phonenumber::country;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Gateway account username for HTTP basic authentication.
///
/// Invariant: non-empty after trimming.
pub struct Username(String);

impl Username {
    /// Field name used in error messages (`username`).
    pub const FIELD: &'static str = "username";

    /// Create a validated [`Username`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated username.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Gateway account password for HTTP basic authentication.
///
/// Invariant: must not be empty (whitespace is preserved and allowed).
pub struct Password(String);

impl Password {
    /// Field name used in error messages (`password`).
    pub const FIELD: &'static str = "password";

    /// Create a validated [`Password`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the password as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Bearer token for `Authorization: Bearer` authentication.
///
/// Invariant: non-empty after trimming.
pub struct AccessToken(String);

impl AccessToken {
    /// Field name used in error messages (`access_token`).
    pub const FIELD: &'static str = "access_token";

    /// Create a validated [`AccessToken`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Message originator (`senderAddress`).
///
/// Invariant: non-empty after trimming. The value must be enabled for your
/// gateway account.
pub struct SenderAddress(String);

impl SenderAddress {
    /// JSON field name used by the gateway (`senderAddress`).
    pub const FIELD: &'static str = "senderAddress";

    /// Create a validated [`SenderAddress`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated sender address.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Type qualifier for [`SenderAddress`] (`senderAddressType`).
pub enum SenderAddressType {
    National,
    International,
    Alphanumeric,
    Shortcode,
}

impl SenderAddressType {
    /// JSON field name used by the gateway (`senderAddressType`).
    pub const FIELD: &'static str = "senderAddressType";

    /// Wire name as expected by the gateway.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::National => "national",
            Self::International => "international",
            Self::Alphanumeric => "alphanumeric",
            Self::Shortcode => "shortcode",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Text message body (`messageContent`).
///
/// Invariant: non-empty after trimming. The original value (including
/// whitespace) is preserved.
pub struct MessageContent(String);

impl MessageContent {
    /// JSON field name used by the gateway (`messageContent`).
    pub const FIELD: &'static str = "messageContent";

    /// Create validated message content.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the message content as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Recipient MSISDN in international format (`recipientAddressList` entry).
///
/// Invariant: digits only after an optional leading `+`, which is stripped so
/// the stored value matches the wire format (e.g. `4367612345678`). This type
/// does not normalize beyond that; if you want E.164 parsing, go through
/// [`PhoneNumber`] and convert it into [`Recipient`].
pub struct Recipient(String);

impl Recipient {
    /// JSON field name used by the gateway (`recipientAddressList`).
    pub const FIELD: &'static str = "recipientAddressList";

    /// Create a validated recipient address.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::InvalidPhoneNumber {
                input: trimmed.to_owned(),
            });
        }
        Ok(Self(digits.to_owned()))
    }

    /// The address as sent to the gateway (digits, no `+` prefix).
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<PhoneNumber> for Recipient {
    /// Convert an already-parsed phone number into the gateway wire form
    /// (E.164 digits without the `+` prefix).
    fn from(value: PhoneNumber) -> Self {
        let digits = value.e164.strip_prefix('+').unwrap_or(&value.e164);
        Self(digits.to_owned())
    }
}

#[derive(Debug, Clone)]
/// Parsed phone number with an E.164 representation.
///
/// Equality, ordering, and hashing are based on the E.164 form.
pub struct PhoneNumber {
    raw: String,
    e164: String,
    parsed: phonenumber::PhoneNumber,
}

impl PhoneNumber {
    /// Parse and normalize a phone number into E.164.
    ///
    /// `default_region` is used when the input does not contain an explicit
    /// country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty {
                field: Recipient::FIELD,
            });
        }

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self { raw, e164, parsed })
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Normalized E.164 representation.
    pub fn e164(&self) -> &str {
        &self.e164
    }

    /// The parsed phone number from the `phonenumber` crate.
    pub fn parsed(&self) -> &phonenumber::PhoneNumber {
        &self.parsed
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for PhoneNumber {}

impl std::hash::Hash for PhoneNumber {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.e164.hash(state);
    }
}

impl std::cmp::PartialOrd for PhoneNumber {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::cmp::Ord for PhoneNumber {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.e164.cmp(&other.e164)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Cap on recipients per physical SMS segment (`maxSmsPerMessage`).
///
/// Invariant: strictly positive.
pub struct MaxSmsPerMessage(u32);

impl MaxSmsPerMessage {
    /// JSON field name used by the gateway (`maxSmsPerMessage`).
    pub const FIELD: &'static str = "maxSmsPerMessage";

    /// Create a validated cap. Zero and negative values are rejected.
    pub fn new(value: i32) -> Result<Self, ValidationError> {
        if value <= 0 {
            return Err(ValidationError::MaxSmsPerMessageOutOfRange { actual: value });
        }
        Ok(Self(value as u32))
    }

    /// Get the underlying cap.
    pub fn value(self) -> u32 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Business status code returned in the gateway's JSON response (`statusCode`).
///
/// This value is preserved as-is even when the code is unknown to this crate.
pub struct StatusCode(i32);

impl StatusCode {
    /// JSON field name used by the gateway (`statusCode`).
    pub const FIELD: &'static str = "statusCode";

    /// Construct a status code from its integer representation.
    pub fn new(code: i32) -> Self {
        Self(code)
    }

    /// Get the integer code as provided by the gateway.
    pub fn as_i32(self) -> i32 {
        self.0
    }

    /// The gateway's success range is exactly `2000..=2001` (accepted, and
    /// accepted-but-queued).
    pub fn is_success(self) -> bool {
        (2000..=2001).contains(&self.0)
    }

    /// Map this code to a known status code variant, if one exists.
    pub fn known_kind(self) -> Option<KnownStatusCode> {
        KnownStatusCode::from_code(self.0)
    }

    /// Returns `true` if this status code indicates rejected credentials.
    pub fn is_auth_error(self) -> bool {
        matches!(
            self.known_kind(),
            Some(kind) if kind.is_auth_error()
        )
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Known gateway status codes supported by this crate.
///
/// Unknown codes are preserved as [`StatusCode`] and return `None` from
/// [`KnownStatusCode::from_code`].
pub enum KnownStatusCode {
    Ok,
    OkQueued,
    MalformedRequest,
    InvalidCredentials,
    InvalidRecipient,
    InvalidSender,
    InvalidMessageType,
    InvalidMessageData,
    InternalError,
}

impl KnownStatusCode {
    /// Convert a raw gateway integer code into a known variant.
    pub fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            2000 => Self::Ok,
            2001 => Self::OkQueued,
            4000 => Self::MalformedRequest,
            4001 => Self::InvalidCredentials,
            4002 => Self::InvalidRecipient,
            4003 => Self::InvalidSender,
            4004 => Self::InvalidMessageType,
            4008 => Self::InvalidMessageData,
            5000 => Self::InternalError,
            _ => return None,
        })
    }

    /// Whether this status indicates invalid/expired credentials.
    pub fn is_auth_error(self) -> bool {
        matches!(self, Self::InvalidCredentials)
    }
}
