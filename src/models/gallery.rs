//! Gallery image model

use serde::{Deserialize, Serialize};

use crate::catalog::Categorized;
use crate::validation::{Attachment, Rule, Validate, ValidationErrors};

/// Category preselected in the upload form
pub const DEFAULT_UPLOAD_CATEGORY: &str = "events";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    pub filename: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Categorized for GalleryImage {
    fn category(&self) -> &str {
        &self.category
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryUploadForm {
    pub title: String,
    pub description: String,
    pub category: String,
    pub image: Option<Attachment>,
}

impl Default for GalleryUploadForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            category: DEFAULT_UPLOAD_CATEGORY.to_string(),
            image: None,
        }
    }
}

impl Validate for GalleryUploadForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors
            .check("title", &self.title, &[Rule::Required("Title is required")])
            .check("description", &self.description, &[Rule::Required("Description is required")]);
        if self.image.is_none() {
            errors.push("image", "Please select an image file");
        }
        errors.into_result()
    }
}
