use std::io;

use websms::{Auth, MessageContent, Recipient, SendOptions, SmsMessage, WebsmsClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let token = std::env::var("WEBSMS_ACCESS_TOKEN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "WEBSMS_ACCESS_TOKEN environment variable is required",
        )
    })?;
    let recipient_raw = std::env::var("WEBSMS_RECIPIENT").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "WEBSMS_RECIPIENT environment variable is required",
        )
    })?;
    let message = std::env::var("WEBSMS_MESSAGE")
        .unwrap_or_else(|_| "Hello from the websms example.".to_owned());

    // Test mode keeps the gateway from actually dispatching (and charging).
    let client = WebsmsClient::new(Auth::access_token(token)?)?.with_test_mode(true);
    let recipient = Recipient::new(recipient_raw)?;
    let content = MessageContent::new(message)?;
    let request = SmsMessage::text(vec![recipient], content)?;

    let response = client.send(&request, &SendOptions::default()).await?;
    println!(
        "statusCode: {}, statusMessage: {}, transferId: {:?}, smsCount: {:?}",
        response.status_code, response.status_message, response.transfer_id, response.sms_count
    );

    Ok(())
}
