//! Student registration model

use serde::{Deserialize, Serialize};

use crate::validation::{Rule, Validate, ValidationErrors};

/// Registration record as returned by the admin listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Registration {
    #[serde(default)]
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub date_of_birth: String,
    pub gender: String,
    pub address: String,
    pub educational_background: String,
    pub program_applied: String,
    pub study_mode: String,
    #[serde(default)]
    pub document_filename: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Admissions form; serialized as the JSON body of the registration request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationForm {
    pub full_name: String,
    pub date_of_birth: String,
    pub gender: String,
    pub address: String,
    pub email: String,
    pub phone_number: String,
    pub educational_background: String,
    pub program_applied: String,
    pub study_mode: String,
}

impl Validate for RegistrationForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors
            .check(
                "full_name",
                &self.full_name,
                &[
                    Rule::Required("Full name is required"),
                    Rule::MinLength(2, "Name must be at least 2 characters"),
                ],
            )
            .check("date_of_birth", &self.date_of_birth, &[Rule::Required("Date of birth is required")])
            .check("gender", &self.gender, &[Rule::Required("Gender is required")])
            .check("address", &self.address, &[Rule::Required("Address is required")])
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
                "educational_background",
                &self.educational_background,
                &[Rule::Required("Educational background is required")],
            )
            .check(
                "program_applied",
                &self.program_applied,
                &[Rule::Required("Program selection is required")],
            )
            .check("study_mode", &self.study_mode, &[Rule::Required("Study mode is required")]);
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> RegistrationForm {
        RegistrationForm {
            full_name: "Grace Okafor".into(),
            date_of_birth: "1998-04-12".into(),
            gender: "Female".into(),
            address: "37 Amuri Road, Enugu".into(),
            email: "grace@example.com".into(),
            phone_number: "+2349042520176".into(),
            educational_background: "BSc Sociology".into(),
            program_applied: "Diploma in Theology".into(),
            study_mode: "Online".into(),
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(valid_form().validate().is_ok());
    }

    #[test]
    fn test_empty_form_reports_every_field_in_order() {
        let errors = RegistrationForm::default().validate().unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            [
                "full_name",
                "date_of_birth",
                "gender",
                "address",
                "email",
                "phone_number",
                "educational_background",
                "program_applied",
                "study_mode",
            ]
        );
        assert_eq!(errors.first().unwrap().message, "Full name is required");
    }

    #[test]
    fn test_short_phone_number() {
        let form = RegistrationForm { phone_number: "0803".into(), ..valid_form() };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("phone_number"), Some("Phone number must be at least 10 digits"));
    }

    #[test]
    fn test_record_tolerates_missing_server_fields() {
        let json = r#"{
            "full_name": "Grace Okafor", "email": "grace@example.com",
            "phone_number": "08031234567", "date_of_birth": "1998-04-12",
            "gender": "Female", "address": "Enugu", "educational_background": "BSc",
            "program_applied": "PhD in Theology", "study_mode": "Hybrid"
        }"#;
        let record: Registration = serde_json::from_str(json).unwrap();
        assert!(record.id.is_empty());
        assert!(record.document_filename.is_none());
    }
}
