use crate::domain::value::StatusCode;

#[derive(Debug, Clone, PartialEq, Eq)]
/// The raw HTTP exchange kept for diagnostics.
pub struct RawHttpResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Decoded result of a successful send.
///
/// Constructed only after the full round trip succeeded: HTTP 200, a JSON
/// content type, and a business status code in the success range.
pub struct SendResponse {
    pub status_code: StatusCode,
    pub status_message: String,
    /// Gateway-assigned dispatch identifier for this transfer.
    pub transfer_id: Option<String>,
    /// Echo of the caller-supplied message id, when one was sent.
    pub client_message_id: Option<String>,
    /// Number of physical SMS segments the gateway produced.
    pub sms_count: Option<u32>,
    pub http: RawHttpResponse,
}
