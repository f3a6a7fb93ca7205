//! Transport layer: wire-format details (query/form encoding, envelope and
//! entry decoding).

mod account;
mod envelope;
mod message;
mod outbox;
mod status;
mod verify;

pub use account::{decode_account_config_entry, decode_account_info_entry};
pub use envelope::{decode_envelope, Envelope, ReturnBlock, TransportError, ENVELOPE_SUCCESS};
pub use message::{decode_message_entry, encode_send_array_form, encode_send_params};
pub use outbox::{
    decode_count_entry, encode_cancel_params, encode_count_outbox_params,
    encode_latest_outbox_params, encode_select_outbox_params, encode_select_params,
};
pub use status::{
    decode_status_entry, encode_local_status_params, encode_status_by_receptor_params,
    encode_status_params,
};
pub use verify::{encode_make_tts_params, encode_verify_lookup_params};
