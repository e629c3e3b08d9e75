//! Canned backend records and valid forms

use college_portal::models::{PartnershipForm, RegistrationForm};
use serde_json::{json, Value};

pub const ADMIN_TOKEN: &str = "test-admin-token";

pub fn valid_registration() -> RegistrationForm {
    RegistrationForm {
        full_name: "Grace Okafor".into(),
        date_of_birth: "1998-04-12".into(),
        gender: "Female".into(),
        address: "37 Amuri Road, Enugu".into(),
        email: "grace@example.com".into(),
        phone_number: "+2349042520176".into(),
        educational_background: "BSc Sociology, University of Nigeria".into(),
        program_applied: "Diploma in Theology".into(),
        study_mode: "Online".into(),
    }
}

pub fn valid_partnership() -> PartnershipForm {
    PartnershipForm {
        organization_name: "Hope Foundation".into(),
        contact_person: "Ada Eze".into(),
        email: "ada@hope.org".into(),
        phone_number: "08031234567".into(),
        partnership_type: "Scholarship Funding".into(),
        message: "We would like to fund ten scholarships for the coming academic session.".into(),
        document: None,
    }
}

pub fn registration_json(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "full_name": name,
        "email": "student@example.com",
        "phone_number": "08031234567",
        "date_of_birth": "2000-01-01",
        "gender": "Male",
        "address": "Enugu",
        "educational_background": "WAEC",
        "program_applied": "Certificate in Biblical Studies",
        "study_mode": "On-campus",
        "created_at": "2025-09-13T14:30:00"
    })
}

pub fn partnership_json(id: &str, organization: &str) -> Value {
    json!({
        "id": id,
        "organization_name": organization,
        "contact_person": "Ada Eze",
        "email": "ada@hope.org",
        "phone_number": "08031234567",
        "partnership_type": "Academic Collaboration",
        "message": "We would like to collaborate on research and faculty exchange programmes.",
        "document_filename": "proposal.pdf",
        "created_at": "2025-09-14T09:00:00"
    })
}

pub fn dashboard_json() -> Value {
    json!({
        "stats": {"total_registrations": 2, "total_partnerships": 1, "total_gallery": 3},
        "recent_registrations": [registration_json("r1", "John Obi")],
        "recent_partnerships": [partnership_json("p1", "Hope Foundation")]
    })
}

pub fn gallery_image_json(id: &str, title: &str, category: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": format!("{title} photo"),
        "category": category,
        "filename": format!("{id}.jpg"),
        "created_at": "2025-09-10T10:00:00"
    })
}
