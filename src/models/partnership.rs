//! Partnership application model

use serde::{Deserialize, Serialize};

use crate::validation::{Attachment, Rule, Validate, ValidationErrors};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Partnership {
    #[serde(default)]
    pub id: String,
    pub organization_name: String,
    pub contact_person: String,
    pub email: String,
    pub phone_number: String,
    pub partnership_type: String,
    pub message: String,
    #[serde(default)]
    pub document_filename: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Partnership form; sent as multipart because it may carry a document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartnershipForm {
    pub organization_name: String,
    pub contact_person: String,
    pub email: String,
    pub phone_number: String,
    pub partnership_type: String,
    pub message: String,
    pub document: Option<Attachment>,
}

impl PartnershipForm {
    /// Text fields in submission order
    pub fn text_fields(&self) -> [(&'static str, &str); 6] {
        [
            ("organization_name", &self.organization_name),
            ("contact_person", &self.contact_person),
            ("email", &self.email),
            ("phone_number", &self.phone_number),
            ("partnership_type", &self.partnership_type),
            ("message", &self.message),
        ]
    }
}

impl Validate for PartnershipForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors
            .check(
                "organization_name",
                &self.organization_name,
                &[
                    Rule::Required("Organization/Individual name is required"),
                    Rule::MinLength(2, "Name must be at least 2 characters"),
                ],
            )
            .check(
                "contact_person",
                &self.contact_person,
                &[
                    Rule::Required("Contact person is required"),
                    Rule::MinLength(2, "Name must be at least 2 characters"),
                ],
            )
            .check(
                "email",
                &self.email,
                &[Rule::Required("Email is required"), Rule::Email("Invalid email address")],
            )
            .check(
                "phone_number",
                &self.phone_number,
                &[
                    Rule::Required("Phone number is required"),
                    Rule::MinLength(10, "Phone number must be at least 10 digits"),
                ],
            )
            .check(
                "partnership_type",
                &self.partnership_type,
                &[Rule::Required("Partnership type is required")],
            )
            .check(
                "message",
                &self.message,
                &[
                    Rule::Required("Message is required"),
                    Rule::MinLength(50, "Please provide more details (minimum 50 characters)"),
                ],
            );
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_message_is_rejected() {
        let form = PartnershipForm {
            organization_name: "Hope Foundation".into(),
            contact_person: "Ada Eze".into(),
            email: "ada@hope.org".into(),
            phone_number: "08031234567".into(),
            partnership_type: "Scholarship Funding".into(),
            message: "We want to help.".into(),
            document: None,
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get("message"),
            Some("Please provide more details (minimum 50 characters)")
        );
    }

    #[test]
    fn test_invalid_email() {
        let form = PartnershipForm { email: "ada.hope.org".into(), ..Default::default() };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("email"), Some("Invalid email address"));
        assert_eq!(errors.first().unwrap().field, "organization_name");
    }
}
