use serde::Deserialize;

use super::envelope::TransportError;
use crate::domain::{
    LocalId, MessageBody, MessageReport, MessageStatus, MessageType, Receptor, SendArray,
    SendMessage, SenderLine, Tag,
};

#[derive(Debug, Clone, Deserialize)]
struct MessageJsonEntry {
    messageid: u64,
    message: String,
    status: i64,
    statustext: String,
    sender: String,
    receptor: String,
    date: u64,
    cost: i64,
}

/// Decode one `entries` element of a send/select/outbox response.
///
/// Missing fields and unrecognized status codes are decode failures, never
/// silent defaults.
pub fn decode_message_entry(entry: serde_json::Value) -> Result<MessageReport, TransportError> {
    let parsed: MessageJsonEntry = serde_json::from_value(entry)?;
    let status = MessageStatus::from_code(parsed.status)
        .ok_or(TransportError::UnknownMessageStatus { code: parsed.status })?;
    Ok(MessageReport {
        messageid: parsed.messageid,
        message: parsed.message,
        status,
        statustext: parsed.statustext,
        sender: parsed.sender,
        receptor: parsed.receptor,
        date: parsed.date,
        cost: parsed.cost,
    })
}

/// Query parameters for `sms/send`.
///
/// `default_sender` is the client-level fallback, applied only when the
/// request carries no sender of its own.
pub fn encode_send_params(
    request: &SendMessage,
    default_sender: Option<&SenderLine>,
) -> Vec<(String, String)> {
    let mut params = Vec::<(String, String)>::new();

    let receptor = request
        .receptors()
        .iter()
        .map(Receptor::as_str)
        .collect::<Vec<_>>()
        .join(",");
    params.push((Receptor::FIELD.to_owned(), receptor));
    params.push((
        MessageBody::FIELD.to_owned(),
        request.message().as_str().to_owned(),
    ));

    let options = request.options();
    if let Some(sender) = options.sender.as_ref().or(default_sender) {
        params.push((SenderLine::FIELD.to_owned(), sender.as_str().to_owned()));
    }
    if let Some(date) = options.date {
        params.push(("date".to_owned(), date.value().to_string()));
    }
    if let Some(message_type) = options.message_type {
        params.push((MessageType::FIELD.to_owned(), message_type.code().to_string()));
    }
    if let Some(localids) = options.localids.as_ref() {
        let joined = localids
            .iter()
            .map(LocalId::as_str)
            .collect::<Vec<_>>()
            .join(",");
        params.push((LocalId::FIELD.to_owned(), joined));
    }
    if options.hide {
        params.push(("hide".to_owned(), "1".to_owned()));
    }
    if let Some(tag) = options.tag.as_ref() {
        params.push((Tag::FIELD.to_owned(), tag.as_str().to_owned()));
    }
    if let Some(policy) = options.policy.as_ref() {
        params.push(("policy".to_owned(), policy.clone()));
    }

    params
}

/// Form body for `sms/sendarray`. The parallel arrays are expanded into
/// indexed bracket keys (`sender[0]`, `receptor[0]`, ...), the shape the
/// provider's form decoder expects.
pub fn encode_send_array_form(request: &SendArray) -> Vec<(String, String)> {
    let mut params = Vec::<(String, String)>::new();

    for (index, sender) in request.senders().iter().enumerate() {
        params.push((
            format!("{}[{index}]", SenderLine::FIELD),
            sender.as_str().to_owned(),
        ));
    }
    for (index, receptor) in request.receptors().iter().enumerate() {
        params.push((
            format!("{}[{index}]", Receptor::FIELD),
            receptor.as_str().to_owned(),
        ));
    }
    for (index, message) in request.messages().iter().enumerate() {
        params.push((
            format!("{}[{index}]", MessageBody::FIELD),
            message.as_str().to_owned(),
        ));
    }

    let options = request.options();
    if let Some(date) = options.date {
        params.push(("date".to_owned(), date.value().to_string()));
    }
    if let Some(types) = options.types.as_ref() {
        for (index, message_type) in types.iter().enumerate() {
            params.push((
                format!("{}[{index}]", MessageType::FIELD),
                message_type.code().to_string(),
            ));
        }
    }
    if let Some(localids) = options.localids.as_ref() {
        for (index, local_id) in localids.iter().enumerate() {
            params.push((
                format!("localmessageids[{index}]"),
                local_id.as_str().to_owned(),
            ));
        }
    }
    if options.hide {
        params.push(("hide".to_owned(), "1".to_owned()));
    }
    if let Some(tag) = options.tag.as_ref() {
        params.push((Tag::FIELD.to_owned(), tag.as_str().to_owned()));
    }
    if let Some(policy) = options.policy.as_ref() {
        params.push(("policy".to_owned(), policy.clone()));
    }

    params
}
