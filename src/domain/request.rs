use crate::domain::validation::ValidationError;
use crate::domain::value::{
    check_date_range, LocalId, MessageBody, MessageId, MessageStatus, MessageType, Receptor,
    SenderLine, Tag, Template, UnixTimestamp, VerifyToken, VerifyToken10, VerifyToken20,
};

/// Maximum receptors in a single `sms/send` call.
pub const SEND_MAX_RECEPTORS: usize = 200;
/// Maximum parallel entries in a `sms/sendarray` call.
pub const SEND_ARRAY_MAX_ENTRIES: usize = 200;
/// Maximum ids per status / select / cancel call.
pub const MAX_IDS_PER_QUERY: usize = 500;
/// Maximum page size of `sms/latestoutbox`; larger values are clamped.
pub const LATEST_OUTBOX_MAX_PAGESIZE: u32 = 500;

fn check_id_count<T>(field: &'static str, ids: &[T]) -> Result<(), ValidationError> {
    if ids.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    if ids.len() > MAX_IDS_PER_QUERY {
        return Err(ValidationError::TooManyIds {
            field,
            max: MAX_IDS_PER_QUERY,
            actual: ids.len(),
        });
    }
    Ok(())
}

#[derive(Debug, Clone, Default)]
/// Optional parameters shared by [`SendMessage`].
pub struct SendOptions {
    /// Sender line; when absent the client substitutes its configured default.
    pub sender: Option<SenderLine>,
    /// Scheduled send time. Use [`UnixTimestamp::not_in_past`] to build it.
    pub date: Option<UnixTimestamp>,
    pub message_type: Option<MessageType>,
    /// Duplicate-prevention ids, one per receptor.
    pub localids: Option<Vec<LocalId>>,
    /// Hide the receptor number in panel logs.
    pub hide: bool,
    pub tag: Option<Tag>,
    pub policy: Option<String>,
}

#[derive(Debug, Clone)]
/// `sms/send`: one message body to up to 200 receptors.
pub struct SendMessage {
    receptors: Vec<Receptor>,
    message: MessageBody,
    options: SendOptions,
}

impl SendMessage {
    pub fn new(
        receptors: Vec<Receptor>,
        message: MessageBody,
        options: SendOptions,
    ) -> Result<Self, ValidationError> {
        if receptors.is_empty() {
            return Err(ValidationError::Empty {
                field: Receptor::FIELD,
            });
        }
        if receptors.len() > SEND_MAX_RECEPTORS {
            return Err(ValidationError::TooManyReceptors {
                max: SEND_MAX_RECEPTORS,
                actual: receptors.len(),
            });
        }
        if let Some(localids) = options.localids.as_ref() {
            if localids.len() != receptors.len() {
                return Err(ValidationError::ArrayLengthMismatch {
                    field: LocalId::FIELD,
                    expected: receptors.len(),
                    actual: localids.len(),
                });
            }
        }
        Ok(Self {
            receptors,
            message,
            options,
        })
    }

    /// Convenience constructor for the single-receptor case.
    pub fn to_one(
        receptor: Receptor,
        message: MessageBody,
        options: SendOptions,
    ) -> Result<Self, ValidationError> {
        Self::new(vec![receptor], message, options)
    }

    pub fn receptors(&self) -> &[Receptor] {
        &self.receptors
    }

    pub fn message(&self) -> &MessageBody {
        &self.message
    }

    pub fn options(&self) -> &SendOptions {
        &self.options
    }
}

#[derive(Debug, Clone, Default)]
/// Optional parameters of [`SendArray`].
pub struct SendArrayOptions {
    pub date: Option<UnixTimestamp>,
    /// Display type per entry; length must match the primary arrays.
    pub types: Option<Vec<MessageType>>,
    /// Duplicate-prevention ids per entry; length must match the primary arrays.
    pub localids: Option<Vec<LocalId>>,
    pub hide: bool,
    pub tag: Option<Tag>,
    pub policy: Option<String>,
}

#[derive(Debug, Clone)]
/// `sms/sendarray`: different messages to different receptors from different
/// senders, as three parallel arrays of equal length.
pub struct SendArray {
    senders: Vec<SenderLine>,
    receptors: Vec<Receptor>,
    messages: Vec<MessageBody>,
    options: SendArrayOptions,
}

impl SendArray {
    pub fn new(
        senders: Vec<SenderLine>,
        receptors: Vec<Receptor>,
        messages: Vec<MessageBody>,
        options: SendArrayOptions,
    ) -> Result<Self, ValidationError> {
        if senders.is_empty() {
            return Err(ValidationError::Empty {
                field: SenderLine::FIELD,
            });
        }
        if senders.len() > SEND_ARRAY_MAX_ENTRIES {
            return Err(ValidationError::TooManyReceptors {
                max: SEND_ARRAY_MAX_ENTRIES,
                actual: senders.len(),
            });
        }
        // All array lengths are checked against the senders array, optional
        // arrays included; optional arrays are never cross-checked against
        // each other.
        if receptors.len() != senders.len() {
            return Err(ValidationError::ArrayLengthMismatch {
                field: Receptor::FIELD,
                expected: senders.len(),
                actual: receptors.len(),
            });
        }
        if messages.len() != senders.len() {
            return Err(ValidationError::ArrayLengthMismatch {
                field: MessageBody::FIELD,
                expected: senders.len(),
                actual: messages.len(),
            });
        }
        if let Some(types) = options.types.as_ref() {
            if types.len() != senders.len() {
                return Err(ValidationError::ArrayLengthMismatch {
                    field: MessageType::FIELD,
                    expected: senders.len(),
                    actual: types.len(),
                });
            }
        }
        if let Some(localids) = options.localids.as_ref() {
            if localids.len() != senders.len() {
                return Err(ValidationError::ArrayLengthMismatch {
                    field: LocalId::FIELD,
                    expected: senders.len(),
                    actual: localids.len(),
                });
            }
        }
        Ok(Self {
            senders,
            receptors,
            messages,
            options,
        })
    }

    pub fn senders(&self) -> &[SenderLine] {
        &self.senders
    }

    pub fn receptors(&self) -> &[Receptor] {
        &self.receptors
    }

    pub fn messages(&self) -> &[MessageBody] {
        &self.messages
    }

    pub fn options(&self) -> &SendArrayOptions {
        &self.options
    }
}

#[derive(Debug, Clone)]
/// `sms/status`: delivery status for up to 500 provider message ids.
pub struct StatusQuery {
    message_ids: Vec<MessageId>,
}

impl StatusQuery {
    pub fn new(message_ids: Vec<MessageId>) -> Result<Self, ValidationError> {
        check_id_count(MessageId::FIELD, &message_ids)?;
        Ok(Self { message_ids })
    }

    pub fn one(message_id: MessageId) -> Self {
        Self {
            message_ids: vec![message_id],
        }
    }

    pub fn message_ids(&self) -> &[MessageId] {
        &self.message_ids
    }
}

#[derive(Debug, Clone)]
/// `sms/statuslocalmessageid`: delivery status for up to 500 local ids.
pub struct LocalStatusQuery {
    local_ids: Vec<LocalId>,
}

impl LocalStatusQuery {
    pub fn new(local_ids: Vec<LocalId>) -> Result<Self, ValidationError> {
        check_id_count(LocalId::FIELD, &local_ids)?;
        Ok(Self { local_ids })
    }

    pub fn local_ids(&self) -> &[LocalId] {
        &self.local_ids
    }
}

#[derive(Debug, Clone)]
/// `sms/statusbyreceptor`: messages sent to one receptor within a date range
/// of at most one day.
pub struct StatusByReceptor {
    receptor: Receptor,
    startdate: UnixTimestamp,
    enddate: Option<UnixTimestamp>,
}

impl StatusByReceptor {
    pub fn new(
        receptor: Receptor,
        startdate: UnixTimestamp,
        enddate: Option<UnixTimestamp>,
    ) -> Result<Self, ValidationError> {
        if let Some(enddate) = enddate {
            check_date_range(startdate, enddate)?;
        }
        Ok(Self {
            receptor,
            startdate,
            enddate,
        })
    }

    pub fn receptor(&self) -> &Receptor {
        &self.receptor
    }

    pub fn startdate(&self) -> UnixTimestamp {
        self.startdate
    }

    pub fn enddate(&self) -> Option<UnixTimestamp> {
        self.enddate
    }
}

#[derive(Debug, Clone)]
/// `sms/select`: full details for up to 500 provider message ids.
pub struct Select {
    message_ids: Vec<MessageId>,
}

impl Select {
    pub fn new(message_ids: Vec<MessageId>) -> Result<Self, ValidationError> {
        check_id_count(MessageId::FIELD, &message_ids)?;
        Ok(Self { message_ids })
    }

    pub fn message_ids(&self) -> &[MessageId] {
        &self.message_ids
    }
}

#[derive(Debug, Clone)]
/// `sms/selectoutbox`: sent messages within a date range of at most one day.
pub struct SelectOutbox {
    startdate: UnixTimestamp,
    enddate: Option<UnixTimestamp>,
    sender: Option<SenderLine>,
}

impl SelectOutbox {
    pub fn new(
        startdate: UnixTimestamp,
        enddate: Option<UnixTimestamp>,
        sender: Option<SenderLine>,
    ) -> Result<Self, ValidationError> {
        if let Some(enddate) = enddate {
            check_date_range(startdate, enddate)?;
        }
        Ok(Self {
            startdate,
            enddate,
            sender,
        })
    }

    pub fn startdate(&self) -> UnixTimestamp {
        self.startdate
    }

    pub fn enddate(&self) -> Option<UnixTimestamp> {
        self.enddate
    }

    pub fn sender(&self) -> Option<&SenderLine> {
        self.sender.as_ref()
    }
}

#[derive(Debug, Clone, Default)]
/// `sms/latestoutbox`: the most recent sent messages.
///
/// Page sizes above [`LATEST_OUTBOX_MAX_PAGESIZE`] are clamped, not rejected.
pub struct LatestOutbox {
    pagesize: Option<u32>,
    sender: Option<SenderLine>,
}

impl LatestOutbox {
    pub fn new(pagesize: Option<u32>, sender: Option<SenderLine>) -> Self {
        Self {
            pagesize: pagesize.map(|size| size.min(LATEST_OUTBOX_MAX_PAGESIZE)),
            sender,
        }
    }

    pub fn pagesize(&self) -> Option<u32> {
        self.pagesize
    }

    pub fn sender(&self) -> Option<&SenderLine> {
        self.sender.as_ref()
    }
}

#[derive(Debug, Clone)]
/// `sms/countoutbox`: count of sent messages within a date range of at most
/// one day, optionally filtered by status.
pub struct CountOutbox {
    startdate: UnixTimestamp,
    enddate: Option<UnixTimestamp>,
    status: Option<MessageStatus>,
}

impl CountOutbox {
    pub fn new(
        startdate: UnixTimestamp,
        enddate: Option<UnixTimestamp>,
        status: Option<MessageStatus>,
    ) -> Result<Self, ValidationError> {
        if let Some(enddate) = enddate {
            check_date_range(startdate, enddate)?;
        }
        Ok(Self {
            startdate,
            enddate,
            status,
        })
    }

    pub fn startdate(&self) -> UnixTimestamp {
        self.startdate
    }

    pub fn enddate(&self) -> Option<UnixTimestamp> {
        self.enddate
    }

    pub fn status(&self) -> Option<MessageStatus> {
        self.status
    }
}

#[derive(Debug, Clone)]
/// `sms/cancel`: cancel up to 500 scheduled messages before dispatch.
pub struct Cancel {
    message_ids: Vec<MessageId>,
}

impl Cancel {
    pub fn new(message_ids: Vec<MessageId>) -> Result<Self, ValidationError> {
        check_id_count(MessageId::FIELD, &message_ids)?;
        Ok(Self { message_ids })
    }

    pub fn message_ids(&self) -> &[MessageId] {
        &self.message_ids
    }
}

#[derive(Debug, Clone, Default)]
/// Optional token slots and display type of [`VerifyLookup`].
pub struct VerifyLookupOptions {
    pub token2: Option<VerifyToken>,
    pub token3: Option<VerifyToken>,
    pub token10: Option<VerifyToken10>,
    pub token20: Option<VerifyToken20>,
    pub message_type: Option<MessageType>,
}

#[derive(Debug, Clone)]
/// `verify/lookup`: template-based verification send.
///
/// All fields are validated by their own constructors, so assembling the
/// request cannot fail.
pub struct VerifyLookup {
    receptor: Receptor,
    template: Template,
    token: VerifyToken,
    options: VerifyLookupOptions,
}

impl VerifyLookup {
    pub fn new(
        receptor: Receptor,
        template: Template,
        token: VerifyToken,
        options: VerifyLookupOptions,
    ) -> Self {
        Self {
            receptor,
            template,
            token,
            options,
        }
    }

    pub fn receptor(&self) -> &Receptor {
        &self.receptor
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn token(&self) -> &VerifyToken {
        &self.token
    }

    pub fn options(&self) -> &VerifyLookupOptions {
        &self.options
    }
}

#[derive(Debug, Clone)]
/// `call/maketts`: text-to-speech voice call to one receptor.
pub struct MakeTts {
    receptor: Receptor,
    message: MessageBody,
    date: Option<UnixTimestamp>,
    localids: Option<Vec<LocalId>>,
}

impl MakeTts {
    pub fn new(
        receptor: Receptor,
        message: MessageBody,
        date: Option<UnixTimestamp>,
        localids: Option<Vec<LocalId>>,
    ) -> Self {
        Self {
            receptor,
            message,
            date,
            localids,
        }
    }

    pub fn receptor(&self) -> &Receptor {
        &self.receptor
    }

    pub fn message(&self) -> &MessageBody {
        &self.message
    }

    pub fn date(&self) -> Option<UnixTimestamp> {
        self.date
    }

    pub fn localids(&self) -> Option<&[LocalId]> {
        self.localids.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn receptor(suffix: u32) -> Receptor {
        Receptor::new(format!("0912345{suffix:04}")).unwrap()
    }

    fn sender() -> SenderLine {
        SenderLine::new("10004346").unwrap()
    }

    fn body(text: &str) -> MessageBody {
        MessageBody::new(text).unwrap()
    }

    #[test]
    fn send_message_enforces_receptor_cap() {
        let receptors: Vec<Receptor> = (0..SEND_MAX_RECEPTORS as u32).map(receptor).collect();
        assert!(SendMessage::new(receptors.clone(), body("hi"), SendOptions::default()).is_ok());

        let mut over = receptors;
        over.push(receptor(9999));
        let err = SendMessage::new(over, body("hi"), SendOptions::default()).unwrap_err();
        assert!(matches!(err, ValidationError::TooManyReceptors { .. }));
    }

    #[test]
    fn send_message_rejects_empty_receptors() {
        let err = SendMessage::new(Vec::new(), body("hi"), SendOptions::default()).unwrap_err();
        assert!(matches!(err, ValidationError::Empty { field: "receptor" }));
    }

    #[test]
    fn send_message_checks_localid_parity() {
        let options = SendOptions {
            localids: Some(vec![LocalId::new("a").unwrap()]),
            ..Default::default()
        };
        let err =
            SendMessage::new(vec![receptor(1), receptor(2)], body("hi"), options).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::ArrayLengthMismatch {
                field: "localid",
                expected: 2,
                actual: 1,
            }
        ));
    }

    #[test]
    fn send_array_requires_equal_primary_lengths() {
        let err = SendArray::new(
            vec![sender(), sender()],
            vec![receptor(1)],
            vec![body("a"), body("b")],
            SendArrayOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::ArrayLengthMismatch {
                field: "receptor",
                expected: 2,
                actual: 1,
            }
        ));

        let err = SendArray::new(
            vec![sender(), sender()],
            vec![receptor(1), receptor(2)],
            vec![body("a")],
            SendArrayOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::ArrayLengthMismatch {
                field: "message",
                ..
            }
        ));
    }

    #[test]
    fn send_array_checks_optional_arrays_against_primaries() {
        let options = SendArrayOptions {
            types: Some(vec![MessageType::Normal]),
            ..Default::default()
        };
        let err = SendArray::new(
            vec![sender(), sender()],
            vec![receptor(1), receptor(2)],
            vec![body("a"), body("b")],
            options,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::ArrayLengthMismatch { field: "type", .. }
        ));

        let options = SendArrayOptions {
            localids: Some(vec![LocalId::new("x").unwrap()]),
            ..Default::default()
        };
        let err = SendArray::new(
            vec![sender(), sender()],
            vec![receptor(1), receptor(2)],
            vec![body("a"), body("b")],
            options,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::ArrayLengthMismatch {
                field: "localid",
                ..
            }
        ));
    }

    #[test]
    fn send_array_accepts_boundary_batch_of_200() {
        let count = SEND_ARRAY_MAX_ENTRIES as u32;
        let batch = SendArray::new(
            (0..count).map(|_| sender()).collect(),
            (0..count).map(receptor).collect(),
            (0..count).map(|idx| body(&format!("msg {idx}"))).collect(),
            SendArrayOptions::default(),
        );
        assert!(batch.is_ok());
    }

    #[test]
    fn id_queries_cap_at_500() {
        let ids: Vec<MessageId> = (0..MAX_IDS_PER_QUERY as u64).map(MessageId::new).collect();
        assert!(StatusQuery::new(ids.clone()).is_ok());
        assert!(Select::new(ids.clone()).is_ok());
        assert!(Cancel::new(ids.clone()).is_ok());

        let mut over = ids;
        over.push(MessageId::new(99_999));
        assert!(matches!(
            StatusQuery::new(over.clone()).unwrap_err(),
            ValidationError::TooManyIds { .. }
        ));
        assert!(matches!(
            Select::new(over.clone()).unwrap_err(),
            ValidationError::TooManyIds { .. }
        ));
        assert!(matches!(
            Cancel::new(over).unwrap_err(),
            ValidationError::TooManyIds { .. }
        ));

        assert!(StatusQuery::new(Vec::new()).is_err());
    }

    #[test]
    fn local_status_query_caps_at_500() {
        let ids: Vec<LocalId> = (0..=MAX_IDS_PER_QUERY)
            .map(|idx| LocalId::new(format!("loc-{idx}")).unwrap())
            .collect();
        assert!(matches!(
            LocalStatusQuery::new(ids).unwrap_err(),
            ValidationError::TooManyIds {
                field: "localid",
                ..
            }
        ));
    }

    #[test]
    fn outbox_ranges_enforce_one_day_window() {
        let start = UnixTimestamp::new(1_700_000_000);
        let at_limit = UnixTimestamp::new(1_700_000_000 + 86_400);
        let over_limit = UnixTimestamp::new(1_700_000_000 + 86_401);
        let before = UnixTimestamp::new(1_699_000_000);

        assert!(SelectOutbox::new(start, Some(at_limit), None).is_ok());
        assert!(SelectOutbox::new(start, Some(over_limit), None).is_err());
        assert!(SelectOutbox::new(start, Some(before), None).is_err());
        assert!(SelectOutbox::new(start, None, Some(sender())).is_ok());

        assert!(CountOutbox::new(start, Some(at_limit), Some(MessageStatus::Delivered)).is_ok());
        assert!(CountOutbox::new(start, Some(over_limit), None).is_err());

        let by_receptor = StatusByReceptor::new(receptor(1), start, Some(over_limit));
        assert!(matches!(
            by_receptor.unwrap_err(),
            ValidationError::DateRangeTooWide { .. }
        ));
    }

    #[test]
    fn latest_outbox_clamps_pagesize() {
        assert_eq!(LatestOutbox::new(Some(9_999), None).pagesize(), Some(500));
        assert_eq!(LatestOutbox::new(Some(500), None).pagesize(), Some(500));
        assert_eq!(LatestOutbox::new(Some(10), None).pagesize(), Some(10));
        assert_eq!(LatestOutbox::new(None, None).pagesize(), None);
    }
}
