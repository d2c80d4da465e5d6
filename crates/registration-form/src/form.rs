//! Registration screen state and its submit flow.

use crate::collaborators::{Router, SignupBackend, LOGIN_SCREEN};
use crate::draft::{reduce, Field, FormAction, RegistrationDraft};
use crate::error::SubmissionError;
use crate::modal::{ModalOutcome, ModalView};
use crate::validation::{validate, ValidationError};
use signup_client::{SignupError, SignupRequest};
use tracing::{debug, info, instrument, warn};

/// Whether a signup request is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
}

/// How a submit attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitResult {
    /// Refused before any request was made.
    Invalid(ValidationError),
    /// Account created.
    Registered,
    /// The request was sent but did not create an account.
    Failed(SubmissionError),
    /// Another submission is still waiting for its response.
    AlreadySubmitting,
}

/// The registration screen: draft, alert modal and submission status.
pub struct RegistrationForm<R> {
    draft: RegistrationDraft,
    modal: Option<ModalOutcome>,
    status: SubmitStatus,
    router: R,
}

impl<R: Router> RegistrationForm<R> {
    /// Mount the screen with an empty draft.
    pub fn new(router: R) -> Self {
        Self {
            draft: RegistrationDraft::new(),
            modal: None,
            status: SubmitStatus::Idle,
            router,
        }
    }

    pub fn draft(&self) -> &RegistrationDraft {
        &self.draft
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn router(&self) -> &R {
        &self.router
    }

    /// Current modal props.
    pub fn modal(&self) -> ModalView<'_> {
        ModalView::of(self.modal.as_ref())
    }

    /// Replace one field of the draft. No validation happens here.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.dispatch(FormAction::FieldChanged {
            field,
            value: value.into(),
        });
    }

    /// Apply an input action to the draft.
    pub fn dispatch(&mut self, action: FormAction) {
        let draft = std::mem::take(&mut self.draft);
        self.draft = reduce(draft, action);
    }

    /// Validate the draft and mark the form as submitting.
    ///
    /// On validation failure the modal shows the reason and the status stays
    /// `Idle`. While a request is in flight every call is refused without
    /// touching the modal.
    pub fn begin_submit(&mut self) -> Result<SignupRequest, SubmitResult> {
        if self.status == SubmitStatus::Submitting {
            warn!("Submit ignored: signup request already in flight");
            return Err(SubmitResult::AlreadySubmitting);
        }

        debug!(draft = ?self.draft, "Register input");

        match validate(&self.draft) {
            Ok(signup) => {
                self.status = SubmitStatus::Submitting;
                Ok(signup.into_request())
            }
            Err(e) => {
                debug!("Validation failed: {}", e);
                self.modal = Some(ModalOutcome::notice(e.message()));
                Err(SubmitResult::Invalid(e))
            }
        }
    }

    /// Record the response of the signup request started by `begin_submit`.
    pub fn finish_submit(&mut self, result: Result<(), SignupError>) -> SubmitResult {
        self.status = SubmitStatus::Idle;

        match result {
            Ok(()) => {
                info!(nickname = %self.draft.username(), "Registration complete");
                self.modal = Some(ModalOutcome::success());
                SubmitResult::Registered
            }
            Err(e) => {
                let err = SubmissionError::from(e);
                warn!("Registration failed: {}", err);
                self.modal = Some(ModalOutcome::notice(err.message()));
                SubmitResult::Failed(err)
            }
        }
    }

    /// Validate, send the signup request and surface the outcome.
    #[instrument(skip(self, backend))]
    pub async fn submit<B>(&mut self, backend: &B) -> SubmitResult
    where
        B: SignupBackend + ?Sized,
    {
        let request = match self.begin_submit() {
            Ok(request) => request,
            Err(result) => return result,
        };

        let result = backend.signup(&request).await;
        self.finish_submit(result)
    }

    /// Dismiss the modal. Navigates to the login screen when the dismissed
    /// outcome was a successful signup; returns whether it navigated.
    pub fn close_modal(&mut self) -> bool {
        match self.modal.take() {
            Some(outcome) if outcome.navigates_on_close() => {
                info!("Navigating to {}", LOGIN_SCREEN);
                self.router.navigate(LOGIN_SCREEN);
                true
            }
            _ => false,
        }
    }

    /// Modal confirm button; same as closing it.
    pub fn confirm_modal(&mut self) -> bool {
        self.close_modal()
    }
}
