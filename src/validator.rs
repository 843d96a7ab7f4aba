use crate::error::ApiError;
use crate::messages::{self, Locale};
use crate::model::employee::Employee;
use crate::service::EmployeeService;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::info;

/// The action an incoming payload is validated for. Update, delete and read
/// additionally require the target id to exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum ActionType {
    Create,
    Update,
    Delete,
    Read,
}

/// Error codes emitted by the field checks. The strum serialization of each
/// variant is its message-bundle key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::AsRefStr)]
pub enum ValidatorCode {
    #[strum(serialize = "error_code_first_name_empty")]
    FirstNameEmpty,
    #[strum(serialize = "error_code_last_name_empty")]
    LastNameEmpty,
    #[strum(serialize = "error_code_email_empty")]
    EmailEmpty,
    #[strum(serialize = "error_code_email_invalid")]
    EmailInvalid,
    #[strum(serialize = "error_code_email_already_exist")]
    EmailAlreadyExist,
}

impl ValidatorCode {
    /// Required-field and format failures are reported under `fieldErrors`,
    /// business-rule failures under `errors`.
    fn is_field_error(self) -> bool {
        !matches!(self, ValidatorCode::EmailAlreadyExist)
    }
}

/// Aggregate of every failure found in one request, in check-declaration
/// order. The whole battery runs before anything is reported.
#[derive(Debug, Default)]
pub struct ValidationReport {
    codes: Vec<ValidatorCode>,
}

impl ValidationReport {
    fn push(&mut self, code: ValidatorCode) {
        self.codes.push(code);
    }

    fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    fn into_error(self, action: ActionType, locale: Locale) -> ApiError {
        let mut errors = Vec::new();
        let mut field_errors = Vec::new();
        for code in &self.codes {
            let message = messages::get(code.as_ref(), locale);
            if code.is_field_error() {
                field_errors.push(message);
            } else {
                errors.push(message);
            }
        }
        ApiError::Validation {
            message: messages::format("validation_failed", action, locale),
            errors,
            field_errors,
        }
    }
}

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+)@(\S+)$").expect("email pattern"));

/// Literal spaces are stripped before matching, so an address typed with
/// stray spaces around the `@` still passes.
fn email_format_ok(email: &str) -> bool {
    let normalized = email.replace(' ', "").to_uppercase();
    EMAIL_PATTERN.is_match(&normalized)
}

/// Runs the fixed battery of field checks against an incoming payload and
/// collects every failure into one report instead of stopping at the first.
#[derive(Clone)]
pub struct EmployeeValidator {
    service: EmployeeService,
}

impl EmployeeValidator {
    pub fn new(service: EmployeeService) -> Self {
        Self { service }
    }

    /// Check order: first name, last name, email sub-chain, existence-by-id.
    /// A missing id on update/delete/read propagates immediately as the
    /// not-found condition (same channel as a GET miss), discarding any
    /// collected field errors.
    pub async fn validate(
        &self,
        employee: &Employee,
        action: ActionType,
        locale: Locale,
    ) -> Result<(), ApiError> {
        info!(%action, "Validating employee payload");

        let mut report = ValidationReport::default();

        if employee.first_name.trim().is_empty() {
            report.push(ValidatorCode::FirstNameEmpty);
        }
        if employee.last_name.trim().is_empty() {
            report.push(ValidatorCode::LastNameEmpty);
        }
        if let Some(code) = self.check_email(employee).await? {
            report.push(code);
        }

        if matches!(
            action,
            ActionType::Update | ActionType::Delete | ActionType::Read
        ) {
            self.service.find_by_id(employee.id, locale).await?;
        }

        if report.is_empty() {
            Ok(())
        } else {
            Err(report.into_error(action, locale))
        }
    }

    /// Existence-only validation for id-addressed operations.
    pub async fn validate_id(
        &self,
        id: u64,
        action: ActionType,
        locale: Locale,
    ) -> Result<(), ApiError> {
        info!(%action, id, "Validating employee id");
        self.service.find_by_id(id, locale).await.map(|_| ())
    }

    /// The email sub-chain short-circuits internally: blank wins over format,
    /// format wins over uniqueness, so at most one code is emitted per
    /// request. Uniqueness passes when the matching row is the payload's own
    /// record (unchanged email).
    async fn check_email(&self, employee: &Employee) -> Result<Option<ValidatorCode>, ApiError> {
        if employee.email.trim().is_empty() {
            return Ok(Some(ValidatorCode::EmailEmpty));
        }
        if !email_format_ok(&employee.email) {
            return Ok(Some(ValidatorCode::EmailInvalid));
        }
        match self.service.find_by_email(&employee.email).await? {
            Some(existing) if existing.id != employee.id => {
                Ok(Some(ValidatorCode::EmailAlreadyExist))
            }
            _ => Ok(None),
        }
    }
}
