use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::Deserialize;
use serde_json::{Map, Value, json};

use crate::domain::{
    BinarySmsMessage, MaxSmsPerMessage, MessageContent, Recipient, SendOptions, SenderAddress,
    SenderAddressType, SmsMessage, StatusCode, TextSmsMessage,
};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Deserialize)]
struct SendJsonResponse {
    #[serde(rename = "statusCode")]
    status_code: i32,
    #[serde(rename = "statusMessage")]
    status_message: String,
    #[serde(default, rename = "transferId")]
    transfer_id: Option<String>,
    #[serde(default, rename = "clientMessageId")]
    client_message_id: Option<String>,
    #[serde(default, rename = "smsCount")]
    sms_count: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Decoded gateway reply, before the client attaches the raw HTTP exchange.
pub struct DecodedSendResponse {
    pub status_code: StatusCode,
    pub status_message: String,
    pub transfer_id: Option<String>,
    pub client_message_id: Option<String>,
    pub sms_count: Option<u32>,
}

pub fn encode_send_json(message: &SmsMessage, options: &SendOptions, test: bool) -> Value {
    let mut body = Map::new();

    match message {
        SmsMessage::Text(text) => push_text_fields(&mut body, text),
        SmsMessage::Binary(binary) => push_binary_fields(&mut body, binary),
    }

    if let Some(max) = options.max_sms_per_message {
        body.insert(MaxSmsPerMessage::FIELD.to_owned(), json!(max.value()));
    }
    // The flag is always present so the gateway never falls back to an
    // account-level default.
    body.insert("test".to_owned(), json!(test));

    Value::Object(body)
}

fn push_text_fields(body: &mut Map<String, Value>, text: &TextSmsMessage) {
    body.insert(
        Recipient::FIELD.to_owned(),
        encode_recipients(text.recipients()),
    );
    body.insert(
        MessageContent::FIELD.to_owned(),
        json!(text.content().as_str()),
    );
    if let Some(sender) = text.sender_address() {
        body.insert(SenderAddress::FIELD.to_owned(), json!(sender.as_str()));
    }
    if let Some(sender_type) = text.sender_address_type() {
        body.insert(
            SenderAddressType::FIELD.to_owned(),
            json!(sender_type.as_str()),
        );
    }
}

fn push_binary_fields(body: &mut Map<String, Value>, binary: &BinarySmsMessage) {
    body.insert(
        Recipient::FIELD.to_owned(),
        encode_recipients(binary.recipients()),
    );
    let segments = binary
        .segments()
        .iter()
        .map(|segment| json!(BASE64.encode(segment)))
        .collect::<Vec<_>>();
    body.insert(MessageContent::FIELD.to_owned(), Value::Array(segments));
    body.insert(
        "userDataHeaderPresent".to_owned(),
        json!(binary.user_data_header_present()),
    );
}

fn encode_recipients(recipients: &[Recipient]) -> Value {
    // The gateway expects numeric MSISDNs. A value the numeric form cannot
    // represent losslessly (leading zeros, u64 overflow) is passed through as
    // a string rather than corrupted.
    let list = recipients
        .iter()
        .map(|recipient| {
            let raw = recipient.as_str();
            match raw.parse::<u64>() {
                Ok(number) if number.to_string() == raw => json!(number),
                _ => json!(raw),
            }
        })
        .collect::<Vec<_>>();
    Value::Array(list)
}

pub fn decode_send_json_response(json: &str) -> Result<DecodedSendResponse, TransportError> {
    let parsed: SendJsonResponse = serde_json::from_str(json)?;
    Ok(DecodedSendResponse {
        status_code: StatusCode::new(parsed.status_code),
        status_message: parsed.status_message,
        transfer_id: parsed.transfer_id,
        client_message_id: parsed.client_message_id,
        sms_count: parsed.sms_count,
    })
}
