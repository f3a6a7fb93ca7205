use std::time::{SystemTime, UNIX_EPOCH};

use crate::domain::value::{ApiLogsState, ConfigState, MessageStatus};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Full message record returned by send, select and outbox operations.
pub struct MessageReport {
    pub messageid: u64,
    pub message: String,
    pub status: MessageStatus,
    pub statustext: String,
    pub sender: String,
    pub receptor: String,
    /// Send time as a unix timestamp.
    pub date: u64,
    /// Cost of the message in Rials.
    pub cost: i64,
}

impl MessageReport {
    pub fn is_delivered(&self) -> bool {
        self.status.is_delivered()
    }

    pub fn is_failed(&self) -> bool {
        self.status.is_failed()
    }

    pub fn is_pending(&self) -> bool {
        self.status.is_pending()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Narrow record returned by the status-check operations.
pub struct StatusReport {
    pub messageid: u64,
    pub status: MessageStatus,
    pub statustext: String,
}

impl StatusReport {
    pub fn is_delivered(&self) -> bool {
        self.status.is_delivered()
    }

    pub fn is_failed(&self) -> bool {
        self.status.is_failed()
    }

    pub fn is_pending(&self) -> bool {
        self.status.is_pending()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Account credit and expiry returned by `account/info`.
pub struct AccountInfo {
    /// Remaining credit in Rials.
    pub remaincredit: i64,
    /// Account expiry as a unix timestamp.
    pub expiredate: u64,
    /// Account type label, e.g. `master`.
    pub account_type: String,
}

impl AccountInfo {
    pub fn has_credit(&self) -> bool {
        self.remaincredit > 0
    }

    pub fn is_expired(&self) -> bool {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or(0);
        self.expiredate < now
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Account settings returned by `account/config`.
pub struct AccountConfig {
    pub apilogs: ApiLogsState,
    pub dailyreport: ConfigState,
    pub debugmode: ConfigState,
    pub defaultsender: String,
    /// Credit threshold below which the panel raises an alarm, in Rials.
    pub mincreditalarm: i64,
    pub resendfailed: ConfigState,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(status: MessageStatus) -> MessageReport {
        MessageReport {
            messageid: 123_456,
            message: "Test message".to_owned(),
            status,
            statustext: status.text().to_owned(),
            sender: "10004346".to_owned(),
            receptor: "09123456789".to_owned(),
            date: 1_700_000_000,
            cost: 120,
        }
    }

    #[test]
    fn report_predicates_delegate_to_status() {
        assert!(report(MessageStatus::Delivered).is_delivered());
        assert!(report(MessageStatus::Blocked).is_failed());
        assert!(report(MessageStatus::InQueue).is_pending());

        let invalid = report(MessageStatus::Invalid);
        assert!(!invalid.is_delivered());
        assert!(!invalid.is_failed());
        assert!(!invalid.is_pending());
    }

    #[test]
    fn account_info_predicates() {
        let info = AccountInfo {
            remaincredit: 5_000,
            expiredate: u64::MAX,
            account_type: "master".to_owned(),
        };
        assert!(info.has_credit());
        assert!(!info.is_expired());

        let drained = AccountInfo {
            remaincredit: 0,
            expiredate: 1_000,
            account_type: "child".to_owned(),
        };
        assert!(!drained.has_credit());
        assert!(drained.is_expired());
    }
}
