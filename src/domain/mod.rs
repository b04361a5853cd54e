//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{BinarySmsMessage, SendOptions, SmsMessage, TextSmsMessage};
pub use response::{RawHttpResponse, SendResponse};
pub use validation::ValidationError;
pub use value::{
    AccessToken, KnownStatusCode, MaxSmsPerMessage, MessageContent, Password, PhoneNumber,
    Recipient, SenderAddress, SenderAddressType, StatusCode, Username,
};
