use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Incoming contact submission, accepted as JSON or an URL-encoded form.
///
/// Missing fields deserialize to empty strings so that validation reports
/// them per field instead of the body being rejected wholesale.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct ContactForm {
    #[validate(length(min = 1, message = "This field is required."))]
    pub full_name: String,

    #[validate(email(message = "Enter a valid email address."))]
    pub email: String,

    #[validate(length(min = 1, message = "This field is required."))]
    pub message: String,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ContactMessage {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_form_fails_every_field() {
        let errors = ContactForm::default().validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("full_name"));
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("message"));
    }

    #[test]
    fn malformed_email_is_rejected() {
        let form = ContactForm {
            full_name: "A".into(),
            email: "not-an-email".into(),
            message: "hi".into(),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.field_errors().len(), 1);
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn valid_form_passes() {
        let form = ContactForm {
            full_name: "A".into(),
            email: "a@example.com".into(),
            message: "hi".into(),
        };
        assert!(form.validate().is_ok());
    }
}
