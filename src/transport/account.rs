use serde::Deserialize;

use super::envelope::{IntOrString, TransportError};
use crate::domain::{AccountConfig, AccountInfo, ApiLogsState, ConfigState};

#[derive(Debug, Clone, Deserialize)]
struct AccountInfoJsonEntry {
    remaincredit: i64,
    expiredate: u64,
    #[serde(rename = "type")]
    account_type: String,
}

pub fn decode_account_info_entry(
    entry: serde_json::Value,
) -> Result<AccountInfo, TransportError> {
    let parsed: AccountInfoJsonEntry = serde_json::from_value(entry)?;
    Ok(AccountInfo {
        remaincredit: parsed.remaincredit,
        expiredate: parsed.expiredate,
        account_type: parsed.account_type,
    })
}

#[derive(Debug, Clone, Deserialize)]
struct AccountConfigJsonEntry {
    apilogs: String,
    dailyreport: String,
    debugmode: String,
    defaultsender: String,
    mincreditalarm: IntOrString,
    resendfailed: String,
}

fn parse_toggle(field: &'static str, value: String) -> Result<ConfigState, TransportError> {
    ConfigState::from_api_value(&value)
        .ok_or(TransportError::UnknownConfigValue { field, value })
}

pub fn decode_account_config_entry(
    entry: serde_json::Value,
) -> Result<AccountConfig, TransportError> {
    let parsed: AccountConfigJsonEntry = serde_json::from_value(entry)?;
    let apilogs = ApiLogsState::from_api_value(&parsed.apilogs).ok_or(
        TransportError::UnknownConfigValue {
            field: "apilogs",
            value: parsed.apilogs.clone(),
        },
    )?;
    Ok(AccountConfig {
        apilogs,
        dailyreport: parse_toggle("dailyreport", parsed.dailyreport)?,
        debugmode: parse_toggle("debugmode", parsed.debugmode)?,
        defaultsender: parsed.defaultsender,
        mincreditalarm: parsed.mincreditalarm.into_i64("mincreditalarm")?,
        resendfailed: parse_toggle("resendfailed", parsed.resendfailed)?,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn decode_account_info_entry_maps_fields() {
        let entry = json!({
            "remaincredit": 1_500_000,
            "expiredate": 1_800_000_000_u64,
            "type": "master"
        });
        let info = decode_account_info_entry(entry).unwrap();
        assert_eq!(info.remaincredit, 1_500_000);
        assert_eq!(info.expiredate, 1_800_000_000);
        assert_eq!(info.account_type, "master");
        assert!(info.has_credit());
    }

    #[test]
    fn decode_account_config_normalizes_mixed_toggle_encodings() {
        let entry = json!({
            "apilogs": "justfaults",
            "dailyreport": "true",
            "debugmode": "0",
            "defaultsender": "10004346",
            "mincreditalarm": "10000",
            "resendfailed": "enabled"
        });
        let config = decode_account_config_entry(entry).unwrap();
        assert!(config.apilogs.is_just_faults());
        assert!(config.dailyreport.is_enabled());
        assert!(config.debugmode.is_disabled());
        assert_eq!(config.defaultsender, "10004346");
        assert_eq!(config.mincreditalarm, 10_000);
        assert!(config.resendfailed.is_enabled());
    }

    #[test]
    fn decode_account_config_rejects_unknown_toggle() {
        let entry = json!({
            "apilogs": "enabled",
            "dailyreport": "sometimes",
            "debugmode": "0",
            "defaultsender": "10004346",
            "mincreditalarm": 0,
            "resendfailed": "0"
        });
        assert!(matches!(
            decode_account_config_entry(entry),
            Err(TransportError::UnknownConfigValue {
                field: "dailyreport",
                ..
            })
        ));
    }
}
