//! Transport layer: wire-format details (JSON encoding/decoding).

mod send_sms;

pub use send_sms::{decode_send_json_response, encode_send_json};
