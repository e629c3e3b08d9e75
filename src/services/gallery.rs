//! Gallery browsing and administration

use std::sync::{Arc, Mutex, MutexGuard};

use reqwest::multipart::{Form, Part};
use tracing::{debug, info};

use crate::catalog::filter_by_category;
use crate::models::{GalleryImage, GalleryUploadForm};
use crate::services::api::ApiClient;
use crate::services::auth::SessionGuard;
use crate::services::notification::Notifier;
use crate::services::request::RequestScope;
use crate::utils::errors::{PortalError, Result};
use crate::utils::logging::{log_admin_action, log_api_error};
use crate::validation::{Attachment, AttachmentPolicy, FieldError, Validate, ValidationErrors};

pub const UPLOAD_SUCCESS: &str = "Image uploaded successfully!";
pub const UPLOAD_FAILED: &str = "Failed to upload image";
pub const DELETE_SUCCESS: &str = "Image deleted successfully!";
pub const DELETE_FAILED: &str = "Failed to delete image";
pub const FETCH_FAILED: &str = "Failed to fetch gallery images";

/// Asks the user to confirm a destructive action
pub trait Confirmation: Send + Sync {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirmation for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    /// The user said no; nothing was sent
    Declined,
    /// Deleted, with the gallery as re-fetched afterwards; `None` when that
    /// re-fetch failed (already reported) and the listing is stale
    Deleted { remaining: Option<Vec<GalleryImage>> },
}

pub fn delete_prompt(image: &GalleryImage) -> String {
    format!(
        "Are you sure you want to delete \"{}\"? This action cannot be undone.",
        image.title
    )
}

pub struct GalleryService {
    api: ApiClient,
    session: Arc<SessionGuard>,
    notifier: Arc<dyn Notifier>,
    scope: RequestScope,
    policy: AttachmentPolicy,
    images: Mutex<Vec<GalleryImage>>,
}

impl GalleryService {
    pub fn new(
        api: ApiClient,
        session: Arc<SessionGuard>,
        notifier: Arc<dyn Notifier>,
        max_upload_bytes: u64,
    ) -> Self {
        Self {
            api,
            session,
            notifier,
            scope: RequestScope::new(),
            policy: AttachmentPolicy::images(max_upload_bytes),
            images: Mutex::new(Vec::new()),
        }
    }

    fn cache(&self) -> MutexGuard<'_, Vec<GalleryImage>> {
        self.images.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Fetch the public gallery and remember it
    pub async fn refresh(&self) -> Result<Vec<GalleryImage>> {
        match self.scope.run(self.api.get_json::<Vec<GalleryImage>>("/api/gallery", None)).await {
            Ok(images) => {
                debug!(count = images.len(), "Gallery loaded");
                *self.cache() = images.clone();
                Ok(images)
            }
            Err(PortalError::Cancelled) => Err(PortalError::Cancelled),
            Err(e) => {
                log_api_error("/api/gallery", &e.to_string(), None);
                self.notifier.error(FETCH_FAILED);
                Err(e)
            }
        }
    }

    /// Images from the last fetch
    pub fn images(&self) -> Vec<GalleryImage> {
        self.cache().clone()
    }

    /// Images from the last fetch in `category`, or all of them for "all"
    pub fn filtered(&self, category: &str) -> Vec<GalleryImage> {
        let images = self.cache();
        filter_by_category(&images, category)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn image_url(&self, image: &GalleryImage) -> String {
        self.api.upload_url(&image.filename)
    }

    /// Check an image the moment it is picked
    pub fn check_image(&self, image: &Attachment) -> Result<()> {
        if let Err(e) = self.policy.check(image) {
            self.notifier.error(&e.to_string());
            return Err(e.into());
        }
        Ok(())
    }

    /// Upload a new image, then refresh the gallery.
    ///
    /// The form is reset only once the backend has accepted the image.
    pub async fn upload(&self, form: &mut GalleryUploadForm) -> Result<GalleryImage> {
        form.validate()?;
        let Some(image) = form.image.as_ref() else {
            return Err(ValidationErrors::from(vec![FieldError::new("image", "Please select an image file")]).into());
        };
        self.check_image(image)?;

        let part = Part::bytes(image.bytes.clone())
            .file_name(image.file_name.clone())
            .mime_str(&image.content_type)?;
        let multipart = Form::new()
            .text("title", form.title.clone())
            .text("description", form.description.clone())
            .text("category", form.category.clone())
            .part("image", part);

        let api = &self.api;
        let request = self.session.authorized(move |token| async move {
            api.post_multipart::<GalleryImage>("/api/gallery/upload", multipart, Some(&token)).await
        });

        let created = match self.scope.run(request).await {
            Ok(created) => created,
            Err(e) => return Err(self.report_failure("/api/gallery/upload", e, UPLOAD_FAILED)),
        };

        if let Some(session) = self.session.session() {
            log_admin_action(&session.admin_info.username, "gallery_upload", Some(&created.id));
        }
        self.notifier.success(UPLOAD_SUCCESS);
        *form = GalleryUploadForm::default();

        if let Err(e) = self.refresh().await {
            debug!(error = %e, "Gallery refresh after upload failed");
        }
        Ok(created)
    }

    /// Delete `image` once the user confirms, then re-fetch the gallery
    pub async fn delete(&self, image: &GalleryImage, confirmation: &dyn Confirmation) -> Result<DeleteOutcome> {
        if !confirmation.confirm(&delete_prompt(image)) {
            info!(image_id = %image.id, "Gallery delete declined");
            return Ok(DeleteOutcome::Declined);
        }

        let path = format!("/api/gallery/{}", urlencoding::encode(&image.id));
        let api = &self.api;
        let request = self.session.authorized(|token| {
            let path = path.clone();
            async move { api.delete(&path, Some(&token)).await }
        });

        if let Err(e) = self.scope.run(request).await {
            return Err(self.report_failure(&path, e, DELETE_FAILED));
        }

        if let Some(session) = self.session.session() {
            log_admin_action(&session.admin_info.username, "gallery_delete", Some(&image.id));
        }
        self.notifier.success(DELETE_SUCCESS);

        let remaining = match self.refresh().await {
            Ok(images) => Some(images),
            Err(e) => {
                debug!(error = %e, "Gallery refresh after delete failed");
                None
            }
        };
        Ok(DeleteOutcome::Deleted { remaining })
    }

    pub fn cancel_pending(&self) {
        self.scope.cancel_pending();
    }

    /// Abort requests in flight and stop issuing new ones
    pub fn close(&self) {
        self.scope.close();
    }

    fn report_failure(&self, endpoint: &str, error: PortalError, fallback: &str) -> PortalError {
        match &error {
            PortalError::Cancelled => debug!(endpoint = endpoint, "Gallery request cancelled"),
            // The session guard has already told the user
            PortalError::Unauthorized => {}
            _ => {
                log_api_error(endpoint, &error.to_string(), None);
                self.notifier.error(&error.user_message(fallback));
            }
        }
        error
    }
}
