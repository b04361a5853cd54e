use std::io;

use websms::{Auth, Recipient, SendOptions, SmsMessage, WebsmsClient};

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

    // Two segments of a concatenated SMS; each starts with a user data
    // header, so the flag below is set.
    let segments = vec![
        vec![0x05, 0x00, 0x03, 0xfc, 0x02, 0x01, 0x48, 0x65, 0x6c, 0x6c, 0x6f],
        vec![0x05, 0x00, 0x03, 0xfc, 0x02, 0x02, 0x57, 0x6f, 0x72, 0x6c, 0x64],
    ];

    let client = WebsmsClient::new(Auth::access_token(token)?)?.with_test_mode(true);
    let recipient = Recipient::new(recipient_raw)?;
    let request = SmsMessage::binary(vec![recipient], segments, true)?;

    let response = client.send(&request, &SendOptions::default()).await?;
    println!(
        "statusCode: {}, statusMessage: {}, transferId: {:?}",
        response.status_code, response.status_message, response.transfer_id
    );

    Ok(())
}
