//! Public form submission
//!
//! Admissions registrations go out as JSON; partnership applications as
//! multipart because they may carry a supporting document.

use std::sync::Arc;

use reqwest::multipart::{Form, Part};
use tracing::{debug, info};

use crate::models::{PartnershipForm, RegistrationForm, SubmissionReceipt};
use crate::services::api::ApiClient;
use crate::services::notification::Notifier;
use crate::services::request::RequestScope;
use crate::utils::errors::{PortalError, Result};
use crate::utils::logging::log_submission;
use crate::validation::{Attachment, AttachmentPolicy, Validate};

pub const REGISTRATION_SUCCESS: &str =
    "Registration submitted successfully! Check your email for confirmation.";
pub const REGISTRATION_FAILED: &str = "Registration failed. Please try again.";
pub const PARTNERSHIP_SUCCESS: &str = "Partnership application submitted successfully!";
pub const PARTNERSHIP_FAILED: &str = "Partnership submission failed. Please try again.";

pub struct FormService {
    api: ApiClient,
    notifier: Arc<dyn Notifier>,
    scope: RequestScope,
    document_policy: AttachmentPolicy,
}

impl FormService {
    pub fn new(api: ApiClient, notifier: Arc<dyn Notifier>, max_upload_bytes: u64) -> Self {
        Self {
            api,
            notifier,
            scope: RequestScope::new(),
            document_policy: AttachmentPolicy::documents(max_upload_bytes),
        }
    }

    /// Submit an admissions registration.
    ///
    /// Blocks on the first invalid field without sending anything. The form
    /// is reset only after the backend accepts it.
    pub async fn submit_registration(&self, form: &mut RegistrationForm) -> Result<SubmissionReceipt> {
        form.validate()?;

        let request = self.api.post_json("/api/register-student", &*form, None);
        let result = self.scope.run(request).await;
        match result {
            Ok(receipt) => {
                info!(program = %form.program_applied, study_mode = %form.study_mode, "Registration accepted");
                log_submission("registration", true, None);
                self.notifier.success(REGISTRATION_SUCCESS);
                *form = RegistrationForm::default();
                Ok(receipt)
            }
            Err(e) => Err(self.report_failure("registration", e, REGISTRATION_FAILED)),
        }
    }

    /// Submit a partnership application with its optional document
    pub async fn submit_partnership(&self, form: &mut PartnershipForm) -> Result<SubmissionReceipt> {
        form.validate()?;
        if let Some(document) = &form.document {
            self.check_attachment(document)?;
        }

        let multipart = partnership_multipart(form)?;
        let request = self.api.post_multipart("/api/submit-partnership", multipart, None);
        let result = self.scope.run(request).await;
        match result {
            Ok(receipt) => {
                info!(
                    partnership_type = %form.partnership_type,
                    has_document = form.document.is_some(),
                    "Partnership application accepted"
                );
                log_submission("partnership", true, None);
                self.notifier.success(PARTNERSHIP_SUCCESS);
                *form = PartnershipForm::default();
                Ok(receipt)
            }
            Err(e) => Err(self.report_failure("partnership", e, PARTNERSHIP_FAILED)),
        }
    }

    /// Check a document the moment it is picked, before it joins the form
    pub fn check_attachment(&self, document: &Attachment) -> Result<()> {
        if let Err(e) = self.document_policy.check(document) {
            self.notifier.error(&e.to_string());
            return Err(e.into());
        }
        Ok(())
    }

    /// Abort submissions in flight
    pub fn cancel_pending(&self) {
        self.scope.cancel_pending();
    }

    /// Abort requests in flight and stop issuing new ones
    pub fn close(&self) {
        self.scope.close();
    }

    fn report_failure(&self, form: &str, error: PortalError, fallback: &str) -> PortalError {
        if matches!(error, PortalError::Cancelled) {
            debug!(form = form, "Submission cancelled");
            return error;
        }
        log_submission(form, false, Some(&error.to_string()));
        self.notifier.error(&error.user_message(fallback));
        error
    }
}

fn partnership_multipart(form: &PartnershipForm) -> Result<Form> {
    let mut multipart = Form::new();
    for (name, value) in form.text_fields() {
        multipart = multipart.text(name, value.to_string());
    }
    if let Some(document) = &form.document {
        let part = Part::bytes(document.bytes.clone())
            .file_name(document.file_name.clone())
            .mime_str(&document.content_type)?;
        multipart = multipart.part("document", part);
    }
    Ok(multipart)
}
