use std::io;

use kavenegar::{ApiKey, KavenegarClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("KAVENEGAR_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "KAVENEGAR_API_KEY environment variable is required",
        )
    })?;

    let client = KavenegarClient::new(ApiKey::new(api_key)?)?;

    let info = client.info().await?;
    println!(
        "remaincredit: {}, expiredate: {}, type: {}",
        info.remaincredit, info.expiredate, info.account_type
    );

    let config = client.config().await?;
    println!(
        "apilogs: {:?}, defaultsender: {}, mincreditalarm: {}",
        config.apilogs, config.defaultsender, config.mincreditalarm
    );

    Ok(())
}
