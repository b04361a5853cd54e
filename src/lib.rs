//! Typed Rust client for the websms.com SMS gateway HTTP API.
//!
//! The crate is split into a domain layer of strong types, a transport layer
//! for wire-format details, and a small client layer orchestrating the one
//! request/response exchange a send is.
//!
//! ```rust,no_run
//! use websms::{Auth, MessageContent, Recipient, SendOptions, SmsMessage, WebsmsClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), websms::WebsmsError> {
//!     let client = WebsmsClient::new(Auth::access_token("...")?)?;
//!     let recipient = Recipient::new("4367612345678")?;
//!     let message = SmsMessage::text(vec![recipient], MessageContent::new("hello")?)?;
//!     let response = client.send(&message, &SendOptions::default()).await?;
//!     println!("transfer id: {:?}", response.transfer_id);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{Auth, Endpoint, WebsmsClient, WebsmsClientBuilder, WebsmsError};
pub use domain::{
    AccessToken, BinarySmsMessage, KnownStatusCode, MaxSmsPerMessage, MessageContent, Password,
    PhoneNumber, RawHttpResponse, Recipient, SendOptions, SendResponse, SenderAddress,
    SenderAddressType, SmsMessage, StatusCode, TextSmsMessage, Username, ValidationError,
};
