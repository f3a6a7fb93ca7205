use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::domain::validation::ValidationError;

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0)
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Kavenegar API key, embedded into the request path.
///
/// Invariant: non-empty after trimming.
pub struct ApiKey(String);

impl ApiKey {
    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "api_key" });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Destination mobile number (`receptor`).
///
/// Invariant: exactly 11 ASCII digits starting with `09`.
pub struct Receptor(String);

impl Receptor {
    /// Query field name used by Kavenegar (`receptor`).
    pub const FIELD: &'static str = "receptor";

    /// Create a validated [`Receptor`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        let valid = trimmed.len() == 11
            && trimmed.starts_with("09")
            && trimmed.bytes().all(|byte| byte.is_ascii_digit());
        if !valid {
            return Err(ValidationError::InvalidReceptor {
                input: trimmed.to_owned(),
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated number.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Originating line number (`sender`).
///
/// Invariant: optional `+` or `00` prefix followed by 4-15 ASCII digits.
pub struct SenderLine(String);

impl SenderLine {
    /// Query field name used by Kavenegar (`sender`).
    pub const FIELD: &'static str = "sender";

    /// Create a validated [`SenderLine`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        let digits = trimmed
            .strip_prefix('+')
            .or_else(|| trimmed.strip_prefix("00"))
            .unwrap_or(trimmed);
        let valid = (4..=15).contains(&digits.len())
            && digits.bytes().all(|byte| byte.is_ascii_digit());
        if !valid {
            return Err(ValidationError::InvalidSenderLine {
                input: trimmed.to_owned(),
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated line number.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS message body (`message`).
///
/// Invariant: 1-900 characters. Whitespace is preserved.
pub struct MessageBody(String);

impl MessageBody {
    /// Query field name used by Kavenegar (`message`).
    pub const FIELD: &'static str = "message";

    /// Maximum allowed length in characters.
    pub const MAX_CHARS: usize = 900;

    /// Create a validated message body.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        let chars = value.chars().count();
        if chars > Self::MAX_CHARS {
            return Err(ValidationError::TooLong {
                field: Self::FIELD,
                max: Self::MAX_CHARS,
                actual: chars,
            });
        }
        Ok(Self(value))
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Campaign tag attached to a send (`tag`).
///
/// Invariant: 1-200 characters from `[A-Za-z0-9_-]`.
pub struct Tag(String);

impl Tag {
    /// Query field name used by Kavenegar (`tag`).
    pub const FIELD: &'static str = "tag";

    /// Maximum allowed length in characters.
    pub const MAX_CHARS: usize = 200;

    /// Create a validated [`Tag`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        let chars = value.chars().count();
        if chars > Self::MAX_CHARS {
            return Err(ValidationError::TooLong {
                field: Self::FIELD,
                max: Self::MAX_CHARS,
                actual: chars,
            });
        }
        let valid = value
            .bytes()
            .all(|byte| byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_');
        if !valid {
            return Err(ValidationError::InvalidTagCharacter { input: value });
        }
        Ok(Self(value))
    }

    /// Borrow the validated tag.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Caller-supplied duplicate-prevention id (`localid`).
///
/// Opaque to the provider. Invariant: non-empty after trimming.
pub struct LocalId(String);

impl LocalId {
    /// Query field name used by Kavenegar (`localid`).
    pub const FIELD: &'static str = "localid";

    /// Create a validated [`LocalId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Provider-assigned message id (`messageid`) returned by send operations.
pub struct MessageId(u64);

impl MessageId {
    /// Query field name used by Kavenegar (`messageid`).
    pub const FIELD: &'static str = "messageid";

    /// Wrap a provider message id.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the underlying id.
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Name of a verify-lookup template (`template`).
///
/// Invariant: 1-100 characters. The template must exist in the Kavenegar panel.
pub struct Template(String);

impl Template {
    /// Query field name used by Kavenegar (`template`).
    pub const FIELD: &'static str = "template";

    /// Maximum allowed length in characters.
    pub const MAX_CHARS: usize = 100;

    /// Create a validated [`Template`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        let chars = trimmed.chars().count();
        if chars > Self::MAX_CHARS {
            return Err(ValidationError::TooLong {
                field: Self::FIELD,
                max: Self::MAX_CHARS,
                actual: chars,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    // Known-good built-in template names bypass the length check.
    pub(crate) fn from_static(value: &'static str) -> Self {
        Self(value.to_owned())
    }

    /// Borrow the validated template name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Shared checks for the verify-lookup token slots. The slots differ only in
/// how many embedded spaces the provider tolerates.
fn validate_token(
    field: &'static str,
    value: &str,
    max_spaces: usize,
) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    let chars = value.chars().count();
    if chars > 100 {
        return Err(ValidationError::TooLong {
            field,
            max: 100,
            actual: chars,
        });
    }
    let spaces = value.bytes().filter(|byte| *byte == b' ').count();
    if spaces > max_spaces {
        return Err(ValidationError::TooManySpaces {
            field,
            max: max_spaces,
            actual: spaces,
        });
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Primary verify-lookup token slot (`token`, also `token2`/`token3`).
///
/// Invariant: 1-100 characters, no spaces.
pub struct VerifyToken(String);

impl VerifyToken {
    /// Query field name used by Kavenegar (`token`).
    pub const FIELD: &'static str = "token";

    /// Create a validated [`VerifyToken`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        validate_token(Self::FIELD, &value, 0)?;
        Ok(Self(value))
    }

    /// Borrow the validated token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Extended verify-lookup token slot (`token10`).
///
/// Invariant: 1-100 characters, at most 5 spaces.
pub struct VerifyToken10(String);

impl VerifyToken10 {
    /// Query field name used by Kavenegar (`token10`).
    pub const FIELD: &'static str = "token10";

    /// Create a validated [`VerifyToken10`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        validate_token(Self::FIELD, &value, 5)?;
        Ok(Self(value))
    }

    /// Borrow the validated token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Extended verify-lookup token slot (`token20`).
///
/// Invariant: 1-100 characters, at most 8 spaces.
pub struct VerifyToken20(String);

impl VerifyToken20 {
    /// Query field name used by Kavenegar (`token20`).
    pub const FIELD: &'static str = "token20";

    /// Create a validated [`VerifyToken20`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        validate_token(Self::FIELD, &value, 8)?;
        Ok(Self(value))
    }

    /// Borrow the validated token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Unix timestamp in seconds, used for scheduled sends and outbox ranges.
pub struct UnixTimestamp(u64);

impl UnixTimestamp {
    /// Wrap a timestamp value (no range validation).
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Wrap a timestamp and reject values earlier than the current time.
    ///
    /// Used for schedule dates, which the provider refuses in the past.
    pub fn not_in_past(value: u64, field: &'static str) -> Result<Self, ValidationError> {
        if value < unix_now() {
            return Err(ValidationError::TimestampInPast { field });
        }
        Ok(Self(value))
    }

    /// Wrap a timestamp and reject values later than the current time.
    pub fn not_in_future(value: u64, field: &'static str) -> Result<Self, ValidationError> {
        if value > unix_now() {
            return Err(ValidationError::TimestampInFuture { field });
        }
        Ok(Self(value))
    }

    /// Get the underlying timestamp in seconds.
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Maximum width of an outbox date range in seconds (one day).
pub const MAX_DATE_RANGE_SECONDS: u64 = 86_400;

/// Check an outbox `startdate`/`enddate` pair: the end must not precede the
/// start and the window must not exceed [`MAX_DATE_RANGE_SECONDS`].
pub fn check_date_range(
    startdate: UnixTimestamp,
    enddate: UnixTimestamp,
) -> Result<(), ValidationError> {
    if enddate < startdate {
        return Err(ValidationError::EndBeforeStart {
            startdate: startdate.value(),
            enddate: enddate.value(),
        });
    }
    let delta = enddate.value() - startdate.value();
    if delta > MAX_DATE_RANGE_SECONDS {
        return Err(ValidationError::DateRangeTooWide {
            max_seconds: MAX_DATE_RANGE_SECONDS,
            actual: delta,
        });
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Delivery status of a message as reported by Kavenegar.
///
/// The set is closed; unrecognized codes fail decoding instead of mapping to a
/// default variant.
pub enum MessageStatus {
    InQueue,
    Scheduled,
    SentToOperator1,
    SentToOperator2,
    Failed,
    Delivered,
    Undelivered,
    Cancelled,
    Blocked,
    /// "Invalid id" (code 100). Belongs to none of the delivered / failed /
    /// pending groups.
    Invalid,
}

impl MessageStatus {
    /// Convert a raw Kavenegar status code into a variant.
    pub fn from_code(code: i64) -> Option<Self> {
        Some(match code {
            1 => Self::InQueue,
            2 => Self::Scheduled,
            4 => Self::SentToOperator1,
            5 => Self::SentToOperator2,
            6 => Self::Failed,
            10 => Self::Delivered,
            11 => Self::Undelivered,
            13 => Self::Cancelled,
            14 => Self::Blocked,
            100 => Self::Invalid,
            _ => return None,
        })
    }

    /// The integer code as used on the wire.
    pub fn code(self) -> i64 {
        match self {
            Self::InQueue => 1,
            Self::Scheduled => 2,
            Self::SentToOperator1 => 4,
            Self::SentToOperator2 => 5,
            Self::Failed => 6,
            Self::Delivered => 10,
            Self::Undelivered => 11,
            Self::Cancelled => 13,
            Self::Blocked => 14,
            Self::Invalid => 100,
        }
    }

    /// Status text as documented by Kavenegar (Persian).
    pub fn text(self) -> &'static str {
        match self {
            Self::InQueue => "در صف ارسال",
            Self::Scheduled => "زمان بندی شده",
            Self::SentToOperator1 | Self::SentToOperator2 => "ارسال شده به مخابرات",
            Self::Failed => "خطا در ارسال پیام",
            Self::Delivered => "رسیده به گیرنده",
            Self::Undelivered => "نرسیده به گیرنده",
            Self::Cancelled => "لغو شده",
            Self::Blocked => "بلاک شده",
            Self::Invalid => "شناسه نامعتبر",
        }
    }

    /// Message reached the recipient.
    pub fn is_delivered(self) -> bool {
        self == Self::Delivered
    }

    /// Message definitively failed to reach the recipient.
    pub fn is_failed(self) -> bool {
        matches!(
            self,
            Self::Failed | Self::Undelivered | Self::Cancelled | Self::Blocked
        )
    }

    /// Message is still moving through the provider pipeline.
    pub fn is_pending(self) -> bool {
        matches!(
            self,
            Self::InQueue | Self::Scheduled | Self::SentToOperator1 | Self::SentToOperator2
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// How the SMS is displayed and stored on the recipient device (`type`).
///
/// Only available on 3000-series lines.
pub enum MessageType {
    Flash,
    Normal,
    SimCard,
    ExternalApp,
}

impl MessageType {
    /// Query field name used by Kavenegar (`type`).
    pub const FIELD: &'static str = "type";

    /// Convert a raw Kavenegar type code into a variant.
    pub fn from_code(code: i64) -> Option<Self> {
        Some(match code {
            0 => Self::Flash,
            1 => Self::Normal,
            2 => Self::SimCard,
            3 => Self::ExternalApp,
            _ => return None,
        })
    }

    /// The integer code as used on the wire.
    pub fn code(self) -> i64 {
        match self {
            Self::Flash => 0,
            Self::Normal => 1,
            Self::SimCard => 2,
            Self::ExternalApp => 3,
        }
    }

    /// Description as documented by Kavenegar (Persian).
    pub fn description(self) -> &'static str {
        match self {
            Self::Flash => "پیامک فلش (نمایش مستقیم بدون ذخیره)",
            Self::Normal => "پیامک عادی (ذخیره در حافظه موبایل)",
            Self::SimCard => "ذخیره در سیم‌کارت",
            Self::ExternalApp => "ذخیره در برنامه خارجی",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Result codes returned in the envelope `return.status` field.
///
/// Codes and messages follow the official Kavenegar error table and the
/// messages are kept in Persian, the language the API answers in.
pub enum ApiErrorCode {
    Success,
    IncompleteParams,
    InvalidApiKey,
    OperationFailed,
    AccountInvalid,
    MethodNotFound,
    WrongHttpMethod,
    MandatoryParamsEmpty,
    AccessDenied,
    ServerUnavailable,
    InvalidReceptor,
    InvalidSender,
    InvalidMessage,
    TooManyRecords,
    StartIndexTooLarge,
    IpMismatch,
    InvalidDate,
    InsufficientCredit,
    ArrayLengthMismatch,
    LinkRestricted,
    InvalidCharacter,
    TemplateNotFound,
    AdvancedServiceRequired,
    LineAccessLevelRequired,
    VoiceCallNotPossible,
    IpRestricted,
    InvalidCodeStructure,
    CodeParamNotFound,
    RateLimitExceeded,
    TestModeOnly,
    InvalidTag,
}

impl ApiErrorCode {
    /// Convert a raw envelope status code into a variant.
    pub fn from_code(code: i64) -> Option<Self> {
        Some(match code {
            200 => Self::Success,
            400 => Self::IncompleteParams,
            401 => Self::InvalidApiKey,
            402 => Self::OperationFailed,
            403 => Self::AccountInvalid,
            404 => Self::MethodNotFound,
            405 => Self::WrongHttpMethod,
            406 => Self::MandatoryParamsEmpty,
            407 => Self::AccessDenied,
            409 => Self::ServerUnavailable,
            411 => Self::InvalidReceptor,
            412 => Self::InvalidSender,
            413 => Self::InvalidMessage,
            414 => Self::TooManyRecords,
            415 => Self::StartIndexTooLarge,
            416 => Self::IpMismatch,
            417 => Self::InvalidDate,
            418 => Self::InsufficientCredit,
            419 => Self::ArrayLengthMismatch,
            420 => Self::LinkRestricted,
            422 => Self::InvalidCharacter,
            424 => Self::TemplateNotFound,
            426 => Self::AdvancedServiceRequired,
            427 => Self::LineAccessLevelRequired,
            428 => Self::VoiceCallNotPossible,
            429 => Self::IpRestricted,
            431 => Self::InvalidCodeStructure,
            432 => Self::CodeParamNotFound,
            451 => Self::RateLimitExceeded,
            501 => Self::TestModeOnly,
            607 => Self::InvalidTag,
            _ => return None,
        })
    }

    /// The integer code as used on the wire.
    pub fn code(self) -> i64 {
        match self {
            Self::Success => 200,
            Self::IncompleteParams => 400,
            Self::InvalidApiKey => 401,
            Self::OperationFailed => 402,
            Self::AccountInvalid => 403,
            Self::MethodNotFound => 404,
            Self::WrongHttpMethod => 405,
            Self::MandatoryParamsEmpty => 406,
            Self::AccessDenied => 407,
            Self::ServerUnavailable => 409,
            Self::InvalidReceptor => 411,
            Self::InvalidSender => 412,
            Self::InvalidMessage => 413,
            Self::TooManyRecords => 414,
            Self::StartIndexTooLarge => 415,
            Self::IpMismatch => 416,
            Self::InvalidDate => 417,
            Self::InsufficientCredit => 418,
            Self::ArrayLengthMismatch => 419,
            Self::LinkRestricted => 420,
            Self::InvalidCharacter => 422,
            Self::TemplateNotFound => 424,
            Self::AdvancedServiceRequired => 426,
            Self::LineAccessLevelRequired => 427,
            Self::VoiceCallNotPossible => 428,
            Self::IpRestricted => 429,
            Self::InvalidCodeStructure => 431,
            Self::CodeParamNotFound => 432,
            Self::RateLimitExceeded => 451,
            Self::TestModeOnly => 501,
            Self::InvalidTag => 607,
        }
    }

    /// Message for this code per the official error table (Persian).
    pub fn message(self) -> &'static str {
        match self {
            Self::Success => "تایید شد",
            Self::IncompleteParams => "پارامترها ناقص هستند",
            Self::InvalidApiKey => "حساب کاربری غیرفعال شده است",
            Self::OperationFailed => "عملیات ناموفق بود",
            Self::AccountInvalid => "کد شناسائی API-Key معتبر نمی‌باشد",
            Self::MethodNotFound => "متد نامشخص است",
            Self::WrongHttpMethod => "متد Get/Post اشتباه است",
            Self::MandatoryParamsEmpty => "پارامترهای اجباری خالی ارسال شده اند",
            Self::AccessDenied => "دسترسی به اطلاعات مورد نظر برای شما امکان پذیر نیست",
            Self::ServerUnavailable => "سرور قادر به پاسخگوئی نیست بعدا تلاش کنید",
            Self::InvalidReceptor => "دریافت کننده نامعتبر است",
            Self::InvalidSender => "ارسال کننده نامعتبر است",
            Self::InvalidMessage => "پیام خالی است و یا طول پیام بیش از حد مجاز می‌باشد",
            Self::TooManyRecords => "حجم درخواست بیشتر از حد مجاز است",
            Self::StartIndexTooLarge => "اندیس شروع بزرگ تر از کل تعداد شماره های مورد نظر است",
            Self::IpMismatch => "IP سرویس مبدا با تنظیمات مطابقت ندارد",
            Self::InvalidDate => "تاریخ ارسال اشتباه است و فرمت آن صحیح نمی باشد",
            Self::InsufficientCredit => "اعتبار شما کافی نمی‌باشد",
            Self::ArrayLengthMismatch => "طول آرایه متن و گیرنده و فرستنده هم اندازه نیست",
            Self::LinkRestricted => "استفاده از لینک در متن پیام برای شما محدود شده است",
            Self::InvalidCharacter => "داده ها به دلیل وجود کاراکتر نامناسب قابل پردازش نیست",
            Self::TemplateNotFound => "الگوی مورد نظر پیدا نشد",
            Self::AdvancedServiceRequired => "استفاده از این متد نیازمند سرویس پیشرفته می‌باشد",
            Self::LineAccessLevelRequired => "استفاده از این خط نیازمند ایجاد سطح دسترسی می باشد",
            Self::VoiceCallNotPossible => "ارسال کد از طریق تماس تلفنی امکان پذیر نیست",
            Self::IpRestricted => "IP محدود شده است",
            Self::InvalidCodeStructure => "ساختار کد صحیح نمی‌باشد",
            Self::CodeParamNotFound => "پارامتر کد در متن پیام پیدا نشد",
            Self::RateLimitExceeded => "فراخوانی بیش از حد در بازه زمانی مشخص IP محدود شده",
            Self::TestModeOnly => "فقط امکان ارسال پیام تست به شماره صاحب حساب کاربری وجود دارد",
            Self::InvalidTag => "نام تگ انتخابی اشتباه است",
        }
    }

    /// Whether this code sits in the client-error band (400..500).
    pub fn is_client_error(self) -> bool {
        (400..500).contains(&self.code())
    }

    /// Whether this code sits in the server-error band (>= 500).
    pub fn is_server_error(self) -> bool {
        self.code() >= 500
    }

    /// Whether this code is the success code (200).
    pub fn is_success(self) -> bool {
        self == Self::Success
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Two-state account configuration toggle.
///
/// The API is inconsistent about boolean encodings; all of them are
/// normalized here and nowhere else.
pub enum ConfigState {
    Enabled,
    Disabled,
}

impl ConfigState {
    /// Parse a toggle from any encoding the API is known to return:
    /// `enabled`/`disabled`, `true`/`false`, `1`/`0` (case and whitespace
    /// insensitive).
    pub fn from_api_value(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "enabled" | "true" | "1" => Some(Self::Enabled),
            "disabled" | "false" | "0" => Some(Self::Disabled),
            _ => None,
        }
    }

    /// Canonical wire value (`enabled` / `disabled`).
    pub fn as_api_value(self) -> &'static str {
        match self {
            Self::Enabled => "enabled",
            Self::Disabled => "disabled",
        }
    }

    pub fn is_enabled(self) -> bool {
        self == Self::Enabled
    }

    pub fn is_disabled(self) -> bool {
        self == Self::Disabled
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Three-state API-logging mode from account configuration (`apilogs`).
pub enum ApiLogsState {
    Enabled,
    Disabled,
    JustFaults,
}

impl ApiLogsState {
    /// Parse the logging mode from its wire encoding.
    pub fn from_api_value(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "enabled" => Some(Self::Enabled),
            "disabled" => Some(Self::Disabled),
            "justfaults" => Some(Self::JustFaults),
            _ => None,
        }
    }

    pub fn is_enabled(self) -> bool {
        self == Self::Enabled
    }

    pub fn is_disabled(self) -> bool {
        self == Self::Disabled
    }

    pub fn is_just_faults(self) -> bool {
        self == Self::JustFaults
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn receptor_accepts_iranian_mobile_format_only() {
        let receptor = Receptor::new(" 09123456789 ").unwrap();
        assert_eq!(receptor.as_str(), "09123456789");

        assert!(Receptor::new("").is_err());
        assert!(Receptor::new("0912345678").is_err()); // 10 digits
        assert!(Receptor::new("091234567890").is_err()); // 12 digits
        assert!(Receptor::new("08123456789").is_err()); // wrong prefix
        assert!(Receptor::new("+9123456789").is_err());
        assert!(Receptor::new("0912345678a").is_err());
    }

    #[test]
    fn sender_line_accepts_optional_plus_or_double_zero_prefix() {
        assert_eq!(SenderLine::new("10004346").unwrap().as_str(), "10004346");
        assert_eq!(
            SenderLine::new("+9810004346").unwrap().as_str(),
            "+9810004346"
        );
        assert_eq!(
            SenderLine::new("009810004346").unwrap().as_str(),
            "009810004346"
        );

        assert!(SenderLine::new("").is_err());
        assert!(SenderLine::new("   ").is_err());
        assert!(SenderLine::new("123").is_err()); // too short
        assert!(SenderLine::new("1234567890123456").is_err()); // 16 digits
        assert!(SenderLine::new("+abc123").is_err());
        assert!(SenderLine::new("++10004346").is_err());
    }

    #[test]
    fn message_body_enforces_length_range() {
        assert!(MessageBody::new("x").is_ok());
        assert!(MessageBody::new("x".repeat(900)).is_ok());
        assert!(MessageBody::new("x".repeat(901)).is_err());
        assert!(MessageBody::new("   ").is_err());
    }

    #[test]
    fn tag_enforces_charset_and_length() {
        assert!(Tag::new("promo_2024-a").is_ok());
        assert!(Tag::new("a".repeat(200)).is_ok());
        assert!(Tag::new("a".repeat(201)).is_err());
        assert!(Tag::new("").is_err());
        assert!(Tag::new("has space").is_err());
        assert!(Tag::new("فارسی").is_err());
    }

    #[test]
    fn template_enforces_length() {
        assert!(Template::new("login-verify").is_ok());
        assert!(Template::new("a".repeat(100)).is_ok());
        assert!(Template::new("a".repeat(101)).is_err());
        assert!(Template::new(" ").is_err());
    }

    #[test]
    fn verify_tokens_differ_only_in_allowed_spaces() {
        assert!(VerifyToken::new("123456").is_ok());
        assert!(VerifyToken::new("12 34").is_err());
        assert!(VerifyToken::new("x".repeat(101)).is_err());

        assert!(VerifyToken10::new("one two three four five six").is_ok());
        assert!(VerifyToken10::new("1 2 3 4 5 6 7").is_err()); // 6 spaces

        assert!(VerifyToken20::new("a b c d e f g h i").is_err()); // 9 spaces
        assert!(VerifyToken20::new("a b c d e f g h").is_ok()); // 8 spaces
    }

    #[test]
    fn schedule_timestamp_rejects_past_values() {
        let past = UnixTimestamp::not_in_past(1_000_000, "date");
        assert!(matches!(
            past,
            Err(ValidationError::TimestampInPast { field: "date" })
        ));

        let future = unix_now() + 3_600;
        assert_eq!(
            UnixTimestamp::not_in_past(future, "date").unwrap().value(),
            future
        );

        assert!(UnixTimestamp::not_in_future(future, "startdate").is_err());
        assert!(UnixTimestamp::not_in_future(1_000_000, "startdate").is_ok());
    }

    #[test]
    fn date_range_boundaries() {
        let start = UnixTimestamp::new(1_700_000_000);

        assert!(check_date_range(start, UnixTimestamp::new(1_700_000_000 + 86_400)).is_ok());
        assert!(matches!(
            check_date_range(start, UnixTimestamp::new(1_700_000_000 + 86_401)),
            Err(ValidationError::DateRangeTooWide { .. })
        ));
        assert!(matches!(
            check_date_range(start, UnixTimestamp::new(1_699_999_999)),
            Err(ValidationError::EndBeforeStart { .. })
        ));
    }

    #[test]
    fn message_status_partition_excludes_invalid() {
        let codes = [1, 2, 4, 5, 6, 10, 11, 13, 14, 100];
        for code in codes {
            let status = MessageStatus::from_code(code).unwrap();
            assert_eq!(status.code(), code);

            let groups = [
                status.is_delivered(),
                status.is_failed(),
                status.is_pending(),
            ];
            let members = groups.iter().filter(|hit| **hit).count();
            if code == 100 {
                assert_eq!(members, 0, "code 100 belongs to no group");
            } else {
                assert_eq!(members, 1, "code {code} must be in exactly one group");
            }
        }

        assert!(MessageStatus::from_code(3).is_none());
        assert!(MessageStatus::from_code(99).is_none());
    }

    #[test]
    fn message_status_groups_match_documented_codes() {
        assert!(MessageStatus::Delivered.is_delivered());
        for code in [6, 11, 13, 14] {
            assert!(MessageStatus::from_code(code).unwrap().is_failed());
        }
        for code in [1, 2, 4, 5] {
            assert!(MessageStatus::from_code(code).unwrap().is_pending());
        }
    }

    #[test]
    fn api_error_code_round_trips_and_classifies() {
        for code in [
            200, 400, 401, 402, 403, 404, 405, 406, 407, 409, 411, 412, 413, 414, 415, 416, 417,
            418, 419, 420, 422, 424, 426, 427, 428, 429, 431, 432, 451, 501, 607,
        ] {
            let parsed = ApiErrorCode::from_code(code).unwrap();
            assert_eq!(parsed.code(), code);
            assert!(!parsed.message().is_empty());
        }
        assert!(ApiErrorCode::from_code(999).is_none());
        assert!(ApiErrorCode::from_code(408).is_none());

        assert!(ApiErrorCode::Success.is_success());
        assert!(!ApiErrorCode::Success.is_client_error());
        assert!(ApiErrorCode::InsufficientCredit.is_client_error());
        assert!(!ApiErrorCode::InsufficientCredit.is_server_error());
        assert!(ApiErrorCode::TestModeOnly.is_server_error());
        assert!(ApiErrorCode::InvalidTag.is_server_error());
    }

    #[test]
    fn message_type_codes() {
        assert_eq!(MessageType::from_code(0), Some(MessageType::Flash));
        assert_eq!(MessageType::from_code(3), Some(MessageType::ExternalApp));
        assert_eq!(MessageType::from_code(4), None);
        assert_eq!(MessageType::Normal.code(), 1);
        assert!(!MessageType::SimCard.description().is_empty());
    }

    #[test]
    fn config_state_normalizes_all_known_encodings() {
        for raw in ["enabled", "ENABLED", " true ", "1"] {
            assert_eq!(ConfigState::from_api_value(raw), Some(ConfigState::Enabled));
        }
        for raw in ["disabled", "false", "0"] {
            assert_eq!(
                ConfigState::from_api_value(raw),
                Some(ConfigState::Disabled)
            );
        }
        assert_eq!(ConfigState::from_api_value("maybe"), None);
        assert!(ConfigState::Enabled.is_enabled());
        assert!(ConfigState::Disabled.is_disabled());
        assert_eq!(ConfigState::Enabled.as_api_value(), "enabled");
    }

    #[test]
    fn api_logs_state_parses_three_values() {
        assert_eq!(
            ApiLogsState::from_api_value("justfaults"),
            Some(ApiLogsState::JustFaults)
        );
        assert_eq!(
            ApiLogsState::from_api_value(" Enabled "),
            Some(ApiLogsState::Enabled)
        );
        assert_eq!(ApiLogsState::from_api_value("1"), None);
        assert!(ApiLogsState::JustFaults.is_just_faults());
        assert!(!ApiLogsState::Disabled.is_enabled());
    }
}
