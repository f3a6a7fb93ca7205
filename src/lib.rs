//! Typed Rust client for the Kavenegar SMS and voice gateway.
//!
//! The crate is layered: a domain layer of strong types (validated request
//! objects, response DTOs, the provider's closed code tables), a transport
//! layer for wire-format quirks (query/form encoding, the response envelope),
//! and a client layer performing one HTTP call per operation against
//! `https://api.kavenegar.com/v1/{apiKey}/{method}.json`.
//!
//! ```rust,no_run
//! use kavenegar::{ApiKey, KavenegarClient, MessageBody, Receptor, SendMessage, SendOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), kavenegar::KavenegarError> {
//!     let client = KavenegarClient::new(ApiKey::new("...")?)?;
//!     let receptor = Receptor::new("09123456789")?;
//!     let message = MessageBody::new("سلام دنیا")?;
//!     let request = SendMessage::to_one(receptor, message, SendOptions::default())?;
//!     let reports = client.send(request).await?;
//!     for report in reports {
//!         println!("{}: {}", report.messageid, report.statustext);
//!     }
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
pub mod helper;
mod transport;

pub use client::{KavenegarClient, KavenegarClientBuilder, KavenegarError};
pub use domain::{
    AccountConfig, AccountInfo, ApiErrorCode, ApiKey, ApiLogsState, Cancel, ConfigState,
    CountOutbox, LatestOutbox, LocalId, LocalStatusQuery, MakeTts, MessageBody, MessageId,
    MessageReport, MessageStatus, MessageType, Receptor, Select, SelectOutbox, SendArray,
    SendArrayOptions, SendMessage, SendOptions, SenderLine, StatusByReceptor, StatusQuery,
    StatusReport, Tag, Template, UnixTimestamp, ValidationError, VerifyLookup,
    VerifyLookupOptions, VerifyToken, VerifyToken10, VerifyToken20,
};
pub use helper::{Environment, HelperConfig, Templates, VerifyHelper, VerifyOutcome};
