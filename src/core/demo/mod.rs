//! Demo scheduling requests
//!
//! Types shared between the landing page form and the
//! `POST /api/schedule-demo` endpoint, plus input validation.

#[cfg(feature = "ssr")]
pub mod api;
#[cfg(feature = "ssr")]
mod inbox;

#[cfg(feature = "ssr")]
pub use api::{DemoApiState, ScheduleDemoError, demo_api_router};
#[cfg(feature = "ssr")]
pub use inbox::{DEFAULT_INBOX_CAPACITY, DemoInbox, StoredDemoRequest};

use serde::{Deserialize, Serialize};

pub const MAX_NAME_LEN: usize = 100;
pub const MAX_EMAIL_LEN: usize = 254;
pub const MAX_COMPANY_LEN: usize = 120;
pub const MAX_MESSAGE_LEN: usize = 2000;
pub const MIN_PHONE_DIGITS: usize = 7;
pub const MAX_PHONE_LEN: usize = 20;

/// Body of `POST /api/schedule-demo`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoRequest {
    pub name: String,
    pub email: String,
    pub company: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub message: String,
}

/// Successful response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoResponse {
    pub success: bool,
    pub message: String,
    pub id: String,
}

/// Error response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    pub fn new(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
        }
    }
}

/// Field-level validation failures
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DemoValidationError {
    #[error("Please enter your name")]
    MissingName,

    #[error("Name must be at most 100 characters")]
    NameTooLong,

    #[error("Please enter your email address")]
    MissingEmail,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Please enter your company name")]
    MissingCompany,

    #[error("Company name must be at most 120 characters")]
    CompanyTooLong,

    #[error("Please enter a valid phone number")]
    InvalidPhone,

    #[error("Message must be at most 2000 characters")]
    MessageTooLong,
}

impl DemoValidationError {
    /// Name of the offending field
    pub fn field(&self) -> &'static str {
        match self {
            DemoValidationError::MissingName | DemoValidationError::NameTooLong => "name",
            DemoValidationError::MissingEmail | DemoValidationError::InvalidEmail => "email",
            DemoValidationError::MissingCompany | DemoValidationError::CompanyTooLong => "company",
            DemoValidationError::InvalidPhone => "phone",
            DemoValidationError::MessageTooLong => "message",
        }
    }
}

impl DemoRequest {
    /// Copy with surrounding whitespace removed from every field
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            company: self.company.trim().to_string(),
            phone: self.phone.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }

    /// Validate a trimmed request, reporting the first failing field
    pub fn validate(&self) -> Result<(), DemoValidationError> {
        if self.name.is_empty() {
            return Err(DemoValidationError::MissingName);
        }
        if self.name.chars().count() > MAX_NAME_LEN {
            return Err(DemoValidationError::NameTooLong);
        }

        if self.email.is_empty() {
            return Err(DemoValidationError::MissingEmail);
        }
        if self.email.chars().count() > MAX_EMAIL_LEN || !is_valid_email(&self.email) {
            return Err(DemoValidationError::InvalidEmail);
        }

        if self.company.is_empty() {
            return Err(DemoValidationError::MissingCompany);
        }
        if self.company.chars().count() > MAX_COMPANY_LEN {
            return Err(DemoValidationError::CompanyTooLong);
        }

        if !self.phone.is_empty() && !is_valid_phone(&self.phone) {
            return Err(DemoValidationError::InvalidPhone);
        }

        if self.message.chars().count() > MAX_MESSAGE_LEN {
            return Err(DemoValidationError::MessageTooLong);
        }

        Ok(())
    }

    /// Trim, then validate
    pub fn normalized(&self) -> Result<Self, DemoValidationError> {
        let request = self.trimmed();
        request.validate()?;
        Ok(request)
    }
}

/// Basic `local@domain.tld` check
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }

    domain.contains('.') && domain.split('.').all(|part| !part.is_empty())
}

/// Digits plus common separators, with enough digits to dial
fn is_valid_phone(phone: &str) -> bool {
    if phone.len() > MAX_PHONE_LEN {
        return false;
    }

    let allowed = |c: char| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')' | '.');
    if !phone.chars().all(allowed) {
        return false;
    }

    phone.chars().filter(char::is_ascii_digit).count() >= MIN_PHONE_DIGITS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> DemoRequest {
        DemoRequest {
            name: "Dana Whitfield".to_string(),
            email: "dana@corner-bakery.com".to_string(),
            company: "Corner Bakery".to_string(),
            phone: "+1 (555) 010-2000".to_string(),
            message: "We have three stores and want online booking.".to_string(),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_optional_fields_may_be_empty() {
        let request = DemoRequest {
            phone: String::new(),
            message: String::new(),
            ..valid_request()
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_missing_required_fields() {
        let request = DemoRequest {
            name: "   ".to_string(),
            ..valid_request()
        };
        assert_eq!(
            request.normalized(),
            Err(DemoValidationError::MissingName)
        );

        let request = DemoRequest {
            email: String::new(),
            ..valid_request()
        };
        assert_eq!(request.validate(), Err(DemoValidationError::MissingEmail));

        let request = DemoRequest {
            company: String::new(),
            ..valid_request()
        };
        assert_eq!(
            request.validate(),
            Err(DemoValidationError::MissingCompany)
        );
    }

    #[test]
    fn test_invalid_emails() {
        for email in [
            "plainaddress",
            "@example.com",
            "user@",
            "user@localhost",
            "user@example.",
            "user@@example.com",
            "us er@example.com",
        ] {
            let request = DemoRequest {
                email: email.to_string(),
                ..valid_request()
            };
            assert_eq!(
                request.validate(),
                Err(DemoValidationError::InvalidEmail),
                "{email} should be rejected"
            );
        }
    }

    #[test]
    fn test_phone_rules() {
        for phone in ["555-0100", "+44 20 7946 0958", "(555) 010.2000"] {
            assert!(is_valid_phone(phone), "{phone} should be accepted");
        }
        for phone in ["12345", "555-CALL-NOW", "+1 555 010 2000 ext 44"] {
            assert!(!is_valid_phone(phone), "{phone} should be rejected");
        }
    }

    #[test]
    fn test_length_limits() {
        let request = DemoRequest {
            name: "n".repeat(MAX_NAME_LEN + 1),
            ..valid_request()
        };
        assert_eq!(request.validate(), Err(DemoValidationError::NameTooLong));

        let request = DemoRequest {
            message: "m".repeat(MAX_MESSAGE_LEN + 1),
            ..valid_request()
        };
        assert_eq!(
            request.validate(),
            Err(DemoValidationError::MessageTooLong)
        );
    }

    #[test]
    fn test_email_length_counts_characters() {
        let email = format!("{}@example.com", "é".repeat(200));
        assert!(email.len() > MAX_EMAIL_LEN);
        let request = DemoRequest {
            email,
            ..valid_request()
        };
        assert!(request.validate().is_ok());

        let local = "a".repeat(MAX_EMAIL_LEN - "@example.com".len() + 1);
        let request = DemoRequest {
            email: format!("{local}@example.com"),
            ..valid_request()
        };
        assert_eq!(request.validate(), Err(DemoValidationError::InvalidEmail));
    }

    #[test]
    fn test_normalized_trims_fields() {
        let request = DemoRequest {
            name: "  Dana  ".to_string(),
            email: " dana@corner-bakery.com\n".to_string(),
            ..valid_request()
        };
        let normalized = request.normalized().unwrap();
        assert_eq!(normalized.name, "Dana");
        assert_eq!(normalized.email, "dana@corner-bakery.com");
    }

    #[test]
    fn test_error_field_names() {
        assert_eq!(DemoValidationError::InvalidPhone.field(), "phone");
        assert_eq!(DemoValidationError::CompanyTooLong.field(), "company");
    }

    #[test]
    fn test_request_json_field_names() {
        let json = serde_json::to_value(valid_request()).unwrap();
        for key in ["name", "email", "company", "phone", "message"] {
            assert!(json.get(key).is_some(), "missing {key}");
        }

        let parsed: DemoRequest = serde_json::from_str(
            r#"{"name":"A","email":"a@b.co","company":"C"}"#,
        )
        .unwrap();
        assert!(parsed.phone.is_empty());
        assert!(parsed.message.is_empty());
    }
}
