use serde::Deserialize;

use super::envelope::TransportError;
use crate::domain::{
    LocalId, LocalStatusQuery, MessageId, MessageStatus, Receptor, StatusByReceptor, StatusQuery,
    StatusReport,
};

#[derive(Debug, Clone, Deserialize)]
struct StatusJsonEntry {
    messageid: u64,
    status: i64,
    statustext: String,
}

/// Decode one `entries` element of a status-check response.
pub fn decode_status_entry(entry: serde_json::Value) -> Result<StatusReport, TransportError> {
    let parsed: StatusJsonEntry = serde_json::from_value(entry)?;
    let status = MessageStatus::from_code(parsed.status)
        .ok_or(TransportError::UnknownMessageStatus { code: parsed.status })?;
    Ok(StatusReport {
        messageid: parsed.messageid,
        status,
        statustext: parsed.statustext,
    })
}

pub fn encode_status_params(request: &StatusQuery) -> Vec<(String, String)> {
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

pub fn encode_local_status_params(request: &LocalStatusQuery) -> Vec<(String, String)> {
    vec![(
        LocalId::FIELD.to_owned(),
        request
            .local_ids()
            .iter()
            .map(LocalId::as_str)
            .collect::<Vec<_>>()
            .join(","),
    )]
}

pub fn encode_status_by_receptor_params(request: &StatusByReceptor) -> Vec<(String, String)> {
    let mut params = vec![
        (
            Receptor::FIELD.to_owned(),
            request.receptor().as_str().to_owned(),
        ),
        ("startdate".to_owned(), request.startdate().value().to_string()),
    ];
    if let Some(enddate) = request.enddate() {
        params.push(("enddate".to_owned(), enddate.value().to_string()));
    }
    params
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::domain::UnixTimestamp;

    use super::*;

    #[test]
    fn encode_status_joins_message_ids() {
        let request =
            StatusQuery::new(vec![MessageId::new(100), MessageId::new(200)]).unwrap();
        assert_eq!(
            encode_status_params(&request),
            vec![("messageid".to_owned(), "100,200".to_owned())]
        );
    }

    #[test]
    fn encode_local_status_joins_local_ids() {
        let request = LocalStatusQuery::new(vec![
            LocalId::new("order-1").unwrap(),
            LocalId::new("order-2").unwrap(),
        ])
        .unwrap();
        assert_eq!(
            encode_local_status_params(&request),
            vec![("localid".to_owned(), "order-1,order-2".to_owned())]
        );
    }

    #[test]
    fn encode_status_by_receptor_omits_absent_enddate() {
        let receptor = Receptor::new("09123456789").unwrap();
        let request =
            StatusByReceptor::new(receptor.clone(), UnixTimestamp::new(1_700_000_000), None)
                .unwrap();
        assert_eq!(
            encode_status_by_receptor_params(&request),
            vec![
                ("receptor".to_owned(), "09123456789".to_owned()),
                ("startdate".to_owned(), "1700000000".to_owned()),
            ]
        );

        let request = StatusByReceptor::new(
            receptor,
            UnixTimestamp::new(1_700_000_000),
            Some(UnixTimestamp::new(1_700_040_000)),
        )
        .unwrap();
        let params = encode_status_by_receptor_params(&request);
        assert!(params.contains(&("enddate".to_owned(), "1700040000".to_owned())));
    }

    #[test]
    fn decode_status_entry_maps_code_to_enum() {
        let entry = json!({
            "messageid": 8792343,
            "status": 10,
            "statustext": "رسیده به گیرنده"
        });
        let report = decode_status_entry(entry).unwrap();
        assert_eq!(report.messageid, 8_792_343);
        assert!(report.is_delivered());
    }

    #[test]
    fn decode_status_entry_rejects_unknown_code() {
        let entry = json!({ "messageid": 1, "status": 42, "statustext": "?" });
        assert!(matches!(
            decode_status_entry(entry),
            Err(TransportError::UnknownMessageStatus { code: 42 })
        ));
    }
}
