use std::io;

use kavenegar::{ApiKey, KavenegarClient, MessageBody, Receptor, SendMessage, SendOptions};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("KAVENEGAR_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "KAVENEGAR_API_KEY environment variable is required",
        )
    })?;
    let receptor_raw = std::env::var("KAVENEGAR_RECEPTOR").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "KAVENEGAR_RECEPTOR environment variable is required (09xxxxxxxxx)",
        )
    })?;
    let message = std::env::var("KAVENEGAR_MESSAGE")
        .unwrap_or_else(|_| "Hello from the kavenegar example.".to_owned());

    let client = KavenegarClient::new(ApiKey::new(api_key)?)?;
    let receptor = Receptor::new(receptor_raw)?;
    let body = MessageBody::new(message)?;
    let request = SendMessage::to_one(receptor, body, SendOptions::default())?;

    let reports = client.send(request).await?;
    for report in reports {
        println!(
            "messageid: {}, status: {:?}, cost: {}",
            report.messageid, report.status, report.cost
        );
    }

    Ok(())
}
