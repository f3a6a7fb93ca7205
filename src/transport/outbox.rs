use serde::Deserialize;

use super::envelope::{IntOrString, TransportError};
use crate::domain::{Cancel, CountOutbox, LatestOutbox, MessageId, Select, SelectOutbox, SenderLine};

pub fn encode_select_params(request: &Select) -> Vec<(String, String)> {
    vec![(
        MessageId::FIELD.to_owned(),
        request
            .message_ids()
            .iter()
            .map(MessageId::to_string)
            .collect::<Vec<_>>()
            .join(","),
    )]
}

pub fn encode_select_outbox_params(request: &SelectOutbox) -> Vec<(String, String)> {
    let mut params = vec![(
        "startdate".to_owned(),
        request.startdate().value().to_string(),
    )];
    if let Some(enddate) = request.enddate() {
        params.push(("enddate".to_owned(), enddate.value().to_string()));
    }
    if let Some(sender) = request.sender() {
        params.push((SenderLine::FIELD.to_owned(), sender.as_str().to_owned()));
    }
    params
}

pub fn encode_latest_outbox_params(request: &LatestOutbox) -> Vec<(String, String)> {
    let mut params = Vec::<(String, String)>::new();
    if let Some(pagesize) = request.pagesize() {
        params.push(("pagesize".to_owned(), pagesize.to_string()));
    }
    if let Some(sender) = request.sender() {
        params.push((SenderLine::FIELD.to_owned(), sender.as_str().to_owned()));
    }
    params
}

pub fn encode_count_outbox_params(request: &CountOutbox) -> Vec<(String, String)> {
    let mut params = vec![(
        "startdate".to_owned(),
        request.startdate().value().to_string(),
    )];
    if let Some(enddate) = request.enddate() {
        params.push(("enddate".to_owned(), enddate.value().to_string()));
    }
    if let Some(status) = request.status() {
        params.push(("status".to_owned(), status.code().to_string()));
    }
    params
}

pub fn encode_cancel_params(request: &Cancel) -> Vec<(String, String)> {
    vec![(
        MessageId::FIELD.to_owned(),
        request
            .message_ids()
            .iter()
            .map(MessageId::to_string)
            .collect::<Vec<_>>()
            .join(","),
    )]
}

#[derive(Debug, Clone, Deserialize)]
struct CountJsonEntry {
    count: IntOrString,
}

/// Decode the single `sms/countoutbox` entry into a plain count.
pub fn decode_count_entry(entry: serde_json::Value) -> Result<i64, TransportError> {
    let parsed: CountJsonEntry = serde_json::from_value(entry)?;
    parsed.count.into_i64("count")
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::domain::{MessageStatus, UnixTimestamp};

    use super::*;

    #[test]
    fn encode_select_outbox_with_all_fields() {
        let request = SelectOutbox::new(
            UnixTimestamp::new(1_700_000_000),
            Some(UnixTimestamp::new(1_700_050_000)),
            Some(SenderLine::new("10004346").unwrap()),
        )
        .unwrap();
        assert_eq!(
            encode_select_outbox_params(&request),
            vec![
                ("startdate".to_owned(), "1700000000".to_owned()),
                ("enddate".to_owned(), "1700050000".to_owned()),
                ("sender".to_owned(), "10004346".to_owned()),
            ]
        );
    }

    #[test]
    fn encode_latest_outbox_can_be_empty() {
        assert!(encode_latest_outbox_params(&LatestOutbox::new(None, None)).is_empty());
        assert_eq!(
            encode_latest_outbox_params(&LatestOutbox::new(Some(50), None)),
            vec![("pagesize".to_owned(), "50".to_owned())]
        );
    }

    #[test]
    fn encode_count_outbox_includes_status_filter() {
        let request = CountOutbox::new(
            UnixTimestamp::new(1_700_000_000),
            None,
            Some(MessageStatus::Delivered),
        )
        .unwrap();
        assert_eq!(
            encode_count_outbox_params(&request),
            vec![
                ("startdate".to_owned(), "1700000000".to_owned()),
                ("status".to_owned(), "10".to_owned()),
            ]
        );
    }

    #[test]
    fn encode_cancel_joins_ids() {
        let request = Cancel::new(vec![MessageId::new(5), MessageId::new(6)]).unwrap();
        assert_eq!(
            encode_cancel_params(&request),
            vec![("messageid".to_owned(), "5,6".to_owned())]
        );
    }

    #[test]
    fn decode_count_entry_accepts_number_or_string() {
        assert_eq!(decode_count_entry(json!({ "count": 17 })).unwrap(), 17);
        assert_eq!(decode_count_entry(json!({ "count": "17" })).unwrap(), 17);
        assert!(decode_count_entry(json!({})).is_err());
    }
}
