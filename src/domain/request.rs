use crate::domain::validation::ValidationError;
use crate::domain::value::{
    MaxSmsPerMessage, MessageContent, Recipient, SenderAddress, SenderAddressType,
};

#[derive(Debug, Clone, Default)]
/// Per-call options for [`crate::WebsmsClient::send`].
pub struct SendOptions {
    /// Cap on physical SMS segments per message; omitted from the request
    /// body when unset.
    pub max_sms_per_message: Option<MaxSmsPerMessage>,
}

#[derive(Debug, Clone)]
/// An SMS message to submit to the gateway.
///
/// The variant selects the sub-endpoint: text messages go to
/// `smsmessaging/text`, binary messages to `smsmessaging/binary`.
pub enum SmsMessage {
    Text(TextSmsMessage),
    Binary(BinarySmsMessage),
}

#[derive(Debug, Clone)]
pub struct TextSmsMessage {
    recipients: Vec<Recipient>,
    content: MessageContent,
    sender_address: Option<SenderAddress>,
    sender_address_type: Option<SenderAddressType>,
}

#[derive(Debug, Clone)]
pub struct BinarySmsMessage {
    recipients: Vec<Recipient>,
    segments: Vec<Vec<u8>>,
    user_data_header_present: bool,
}

impl SmsMessage {
    /// Create a text message for one or more recipients.
    pub fn text(
        recipients: Vec<Recipient>,
        content: MessageContent,
    ) -> Result<Self, ValidationError> {
        Ok(Self::Text(TextSmsMessage::new(recipients, content)?))
    }

    /// Create a binary message from raw SMS segments.
    ///
    /// `user_data_header_present` tells the gateway that each segment starts
    /// with a user data header (required for multi-segment binary payloads).
    pub fn binary(
        recipients: Vec<Recipient>,
        segments: Vec<Vec<u8>>,
        user_data_header_present: bool,
    ) -> Result<Self, ValidationError> {
        Ok(Self::Binary(BinarySmsMessage::new(
            recipients,
            segments,
            user_data_header_present,
        )?))
    }

    /// The `smsmessaging` sub-endpoint this message is submitted to.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Binary(_) => "binary",
        }
    }

    /// The recipient list, regardless of variant.
    pub fn recipients(&self) -> &[Recipient] {
        match self {
            Self::Text(text) => text.recipients(),
            Self::Binary(binary) => binary.recipients(),
        }
    }
}

impl TextSmsMessage {
    fn new(recipients: Vec<Recipient>, content: MessageContent) -> Result<Self, ValidationError> {
        if recipients.is_empty() {
            return Err(ValidationError::Empty {
                field: Recipient::FIELD,
            });
        }
        Ok(Self {
            recipients,
            content,
            sender_address: None,
            sender_address_type: None,
        })
    }

    /// Set the message originator (must be enabled for your account).
    pub fn with_sender(
        mut self,
        address: SenderAddress,
        address_type: SenderAddressType,
    ) -> Self {
        self.sender_address = Some(address);
        self.sender_address_type = Some(address_type);
        self
    }

    pub fn recipients(&self) -> &[Recipient] {
        &self.recipients
    }

    pub fn content(&self) -> &MessageContent {
        &self.content
    }

    pub fn sender_address(&self) -> Option<&SenderAddress> {
        self.sender_address.as_ref()
    }

    pub fn sender_address_type(&self) -> Option<SenderAddressType> {
        self.sender_address_type
    }
}

impl BinarySmsMessage {
    fn new(
        recipients: Vec<Recipient>,
        segments: Vec<Vec<u8>>,
        user_data_header_present: bool,
    ) -> Result<Self, ValidationError> {
        if recipients.is_empty() {
            return Err(ValidationError::Empty {
                field: Recipient::FIELD,
            });
        }
        if segments.is_empty() {
            return Err(ValidationError::Empty {
                field: MessageContent::FIELD,
            });
        }
        for (index, segment) in segments.iter().enumerate() {
            if segment.is_empty() {
                return Err(ValidationError::EmptySegment { index });
            }
        }
        Ok(Self {
            recipients,
            segments,
            user_data_header_present,
        })
    }

    pub fn recipients(&self) -> &[Recipient] {
        &self.recipients
    }

    pub fn segments(&self) -> &[Vec<u8>] {
        &self.segments
    }

    pub fn user_data_header_present(&self) -> bool {
        self.user_data_header_present
    }
}
