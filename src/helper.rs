//! Opinionated verification-code helpers on top of [`KavenegarClient`].
//!
//! These wrap `verify/lookup` with fixed template slots and skip real sends in
//! development-like environments so local test runs never hit the gateway.

use crate::client::{KavenegarClient, KavenegarError};
use crate::domain::{MessageReport, Receptor, Template, VerifyLookup, VerifyLookupOptions, VerifyToken};

/// Deployment environment, as reported by the hosting application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Testing,
    Production,
}

impl Environment {
    /// Map an environment name to a variant. `local`, `dev` and `development`
    /// count as development; `testing` as testing; everything else is treated
    /// as production so unknown names never silently skip sends.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "local" | "dev" | "development" => Self::Development,
            "testing" => Self::Testing,
            _ => Self::Production,
        }
    }
}

/// Template names used by the helper's three flows.
#[derive(Debug, Clone)]
pub struct Templates {
    pub login: Template,
    pub email_password: Template,
    pub two_factor: Template,
}

impl Default for Templates {
    fn default() -> Self {
        Self {
            login: Template::from_static("login-verify"),
            email_password: Template::from_static("email-pass"),
            two_factor: Template::from_static("email-2fa"),
        }
    }
}

/// Configuration of [`VerifyHelper`].
#[derive(Debug, Clone)]
pub struct HelperConfig {
    /// When true, sends are skipped in development, and in testing for
    /// receptors listed in `test_numbers`.
    pub skip_in_development: bool,
    pub environment: Environment,
    /// Receptors treated as test fixtures in the testing environment.
    pub test_numbers: Vec<Receptor>,
    pub templates: Templates,
}

impl Default for HelperConfig {
    fn default() -> Self {
        Self {
            skip_in_development: true,
            environment: Environment::Production,
            test_numbers: Vec::new(),
            templates: Templates::default(),
        }
    }
}

/// Result of a helper send: either a real gateway report or a deliberate skip.
#[derive(Debug, Clone)]
pub enum VerifyOutcome {
    Sent(MessageReport),
    Skipped,
}

impl VerifyOutcome {
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped)
    }

    /// The gateway report, if the message was actually sent.
    pub fn report(&self) -> Option<&MessageReport> {
        match self {
            Self::Sent(report) => Some(report),
            Self::Skipped => None,
        }
    }
}

/// Sends verification codes through fixed `verify/lookup` templates.
pub struct VerifyHelper {
    client: KavenegarClient,
    config: HelperConfig,
}

impl VerifyHelper {
    pub fn new(client: KavenegarClient, config: HelperConfig) -> Self {
        Self { client, config }
    }

    /// Send a login verification code.
    pub async fn send_login_code(
        &self,
        receptor: Receptor,
        code: &str,
    ) -> Result<VerifyOutcome, KavenegarError> {
        if self.should_skip(&receptor) {
            return Ok(VerifyOutcome::Skipped);
        }
        let request = VerifyLookup::new(
            receptor,
            self.config.templates.login.clone(),
            Self::code_token(code)?,
            VerifyLookupOptions::default(),
        );
        let report = self.client.verify_lookup(request).await?;
        Ok(VerifyOutcome::Sent(report))
    }

    /// Send a password-reset code, with the account email in the second slot.
    pub async fn send_email_password_code(
        &self,
        receptor: Receptor,
        code: &str,
        email: &str,
    ) -> Result<VerifyOutcome, KavenegarError> {
        self.send_with_email(
            receptor,
            self.config.templates.email_password.clone(),
            code,
            email,
        )
        .await
    }

    /// Send a two-factor code, with the account email in the second slot.
    pub async fn send_two_factor_code(
        &self,
        receptor: Receptor,
        code: &str,
        email: &str,
    ) -> Result<VerifyOutcome, KavenegarError> {
        self.send_with_email(
            receptor,
            self.config.templates.two_factor.clone(),
            code,
            email,
        )
        .await
    }

    async fn send_with_email(
        &self,
        receptor: Receptor,
        template: Template,
        code: &str,
        email: &str,
    ) -> Result<VerifyOutcome, KavenegarError> {
        if self.should_skip(&receptor) {
            return Ok(VerifyOutcome::Skipped);
        }
        let request = VerifyLookup::new(
            receptor,
            template,
            Self::code_token(code)?,
            VerifyLookupOptions {
                token2: Some(VerifyToken::new(email)?),
                ..Default::default()
            },
        );
        let report = self.client.verify_lookup(request).await?;
        Ok(VerifyOutcome::Sent(report))
    }

    fn should_skip(&self, receptor: &Receptor) -> bool {
        if !self.config.skip_in_development {
            return false;
        }
        match self.config.environment {
            Environment::Development => true,
            Environment::Testing => self.config.test_numbers.contains(receptor),
            Environment::Production => false,
        }
    }

    // The token slot rejects spaces, so whitespace inside a code is collapsed
    // to hyphens before validation.
    fn code_token(code: &str) -> Result<VerifyToken, KavenegarError> {
        let normalized = code.split_whitespace().collect::<Vec<_>>().join("-");
        Ok(VerifyToken::new(normalized)?)
    }
}
