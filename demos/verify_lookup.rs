use std::io;

use kavenegar::{
    ApiKey, KavenegarClient, Receptor, Template, VerifyLookup, VerifyLookupOptions, VerifyToken,
};

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
    let template_raw = std::env::var("KAVENEGAR_TEMPLATE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "KAVENEGAR_TEMPLATE environment variable is required",
        )
    })?;
    let token_raw = std::env::var("KAVENEGAR_TOKEN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "KAVENEGAR_TOKEN environment variable is required",
        )
    })?;

    let client = KavenegarClient::new(ApiKey::new(api_key)?)?;
    let request = VerifyLookup::new(
        Receptor::new(receptor_raw)?,
        Template::new(template_raw)?,
        VerifyToken::new(token_raw)?,
        VerifyLookupOptions::default(),
    );

    let report = client.verify_lookup(request).await?;
    println!(
        "messageid: {}, status: {:?}, statustext: {}",
        report.messageid, report.status, report.statustext
    );

    Ok(())
}
