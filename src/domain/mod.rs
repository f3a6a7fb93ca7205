//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{
    Cancel, CountOutbox, LatestOutbox, LocalStatusQuery, MakeTts, Select, SelectOutbox,
    SendArray, SendArrayOptions, SendMessage, SendOptions, StatusByReceptor, StatusQuery,
    VerifyLookup, VerifyLookupOptions, LATEST_OUTBOX_MAX_PAGESIZE, MAX_IDS_PER_QUERY,
    SEND_ARRAY_MAX_ENTRIES, SEND_MAX_RECEPTORS,
};
pub use response::{AccountConfig, AccountInfo, MessageReport, StatusReport};
pub use validation::ValidationError;
pub use value::{
    check_date_range, ApiErrorCode, ApiKey, ApiLogsState, ConfigState, LocalId, MessageBody,
    MessageId, MessageStatus, MessageType, Receptor, SenderLine, Tag, Template, UnixTimestamp,
    VerifyToken, VerifyToken10, VerifyToken20, MAX_DATE_RANGE_SECONDS,
};
