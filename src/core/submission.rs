//! Contact-form state and the submission flow shared by both form variants.
//!
//! Status moves `idle -> submitting -> success | error -> idle`. The network
//! call and the reset timer run as spawned tasks that only hold a weak
//! reference to the form state, so nothing is updated once the form is gone.

use crate::domain::model::{
    ContactSubmission, FormField, FormFields, FormVariant, SubmissionStatus,
};
use crate::domain::options::{is_service_area_option, is_service_option};
use crate::domain::ports::{ConfigProvider, Submitter, DEFAULT_STATUS_RESET_DELAY};
use crate::utils::error::{HomecareError, Result, PHONE_SUBMIT_MESSAGE};
use crate::utils::validation::{is_valid_indian_phone, validate_email, validate_required};
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;
use tokio::sync::watch;

/// Inline message shown while typing or on blur.
pub const PHONE_LIVE_MESSAGE: &str = "Please enter a valid Indian phone number";

// 輸入滿 10 個字元才開始即時提示
const LIVE_PHONE_CHECK_MIN_LEN: usize = 10;

struct FormState {
    fields: FormFields,
    status: SubmissionStatus,
    status_changed_at: DateTime<Utc>,
    phone_error: Option<String>,
    // 每次送出遞增，計時器只重設自己那一次的狀態
    generation: u64,
    status_tx: watch::Sender<SubmissionStatus>,
}

impl FormState {
    fn set_status(&mut self, status: SubmissionStatus) {
        tracing::debug!("Submission status: {} -> {}", self.status, status);
        self.status = status;
        self.status_changed_at = Utc::now();
        self.status_tx.send_replace(status);
    }
}

fn lock(state: &Mutex<FormState>) -> MutexGuard<'_, FormState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// One contact form instance. Clones share the same form.
pub struct ContactForm<S: Submitter + 'static> {
    variant: FormVariant,
    state: Arc<Mutex<FormState>>,
    submitter: Arc<S>,
    reset_delay: Duration,
}

impl<S: Submitter + 'static> Clone for ContactForm<S> {
    fn clone(&self) -> Self {
        Self {
            variant: self.variant,
            state: Arc::clone(&self.state),
            submitter: Arc::clone(&self.submitter),
            reset_delay: self.reset_delay,
        }
    }
}

impl<S: Submitter + 'static> ContactForm<S> {
    pub fn new(variant: FormVariant, submitter: S) -> Self {
        Self::with_reset_delay(variant, submitter, DEFAULT_STATUS_RESET_DELAY)
    }

    pub fn with_reset_delay(variant: FormVariant, submitter: S, reset_delay: Duration) -> Self {
        let (status_tx, _) = watch::channel(SubmissionStatus::Idle);
        let state = FormState {
            fields: FormFields::default(),
            status: SubmissionStatus::Idle,
            status_changed_at: Utc::now(),
            phone_error: None,
            generation: 0,
            status_tx,
        };

        Self {
            variant,
            state: Arc::new(Mutex::new(state)),
            submitter: Arc::new(submitter),
            reset_delay,
        }
    }

    pub fn from_config<C: ConfigProvider>(variant: FormVariant, submitter: S, config: &C) -> Self {
        Self::with_reset_delay(variant, submitter, config.status_reset_delay())
    }

    pub fn variant(&self) -> FormVariant {
        self.variant
    }

    pub fn status(&self) -> SubmissionStatus {
        lock(&self.state).status
    }

    pub fn status_changed_at(&self) -> DateTime<Utc> {
        lock(&self.state).status_changed_at
    }

    /// Receiver that sees every status change.
    pub fn subscribe(&self) -> watch::Receiver<SubmissionStatus> {
        lock(&self.state).status_tx.subscribe()
    }

    pub fn fields(&self) -> FormFields {
        lock(&self.state).fields.clone()
    }

    pub fn field(&self, field: FormField) -> String {
        lock(&self.state).fields.get(field).to_string()
    }

    pub fn phone_error(&self) -> Option<String> {
        lock(&self.state).phone_error.clone()
    }

    /// The submit control is disabled while a request is in flight.
    pub fn is_submit_disabled(&self) -> bool {
        self.status() == SubmissionStatus::Submitting
    }

    /// Update one input. Phone edits re-run the live check.
    pub fn set_field(&self, field: FormField, value: impl Into<String>) {
        if !self.variant.collects(field) {
            tracing::warn!("Ignoring {} input: not collected by {:?} form", field, self.variant);
            return;
        }

        let value = value.into();
        let mut state = lock(&self.state);

        if field == FormField::Phone {
            state.phone_error = if value.chars().count() >= LIVE_PHONE_CHECK_MIN_LEN
                && !is_valid_indian_phone(&value)
            {
                Some(PHONE_LIVE_MESSAGE.to_string())
            } else {
                None
            };
        }

        tracing::debug!("Form input changed: {}", field);
        state.fields.set(field, value);
    }

    /// Leaving the phone input flags a non-empty invalid value.
    pub fn blur_phone(&self) {
        let mut state = lock(&self.state);
        if !state.fields.phone.is_empty() && !is_valid_indian_phone(&state.fields.phone) {
            state.phone_error = Some(PHONE_LIVE_MESSAGE.to_string());
        }
    }

    /// Validate and send the current fields. Issues exactly one request when
    /// the fields are accepted and none otherwise.
    pub async fn submit(&self) -> Result<()> {
        let (submission, generation) = self.begin()?;

        let state = Arc::downgrade(&self.state);
        let submitter = Arc::clone(&self.submitter);
        let reset_delay = self.reset_delay;

        // 請求在獨立任務中執行；呼叫端放棄等待時結果仍會套用（若表單還在）
        let request = tokio::spawn(async move {
            let outcome = submitter.submit(&submission).await;
            settle(&state, generation, outcome.as_ref().err(), reset_delay);
            outcome
        });

        match request.await {
            Ok(outcome) => outcome,
            Err(join_error) => {
                let err = HomecareError::TaskError {
                    message: join_error.to_string(),
                };
                settle(
                    &Arc::downgrade(&self.state),
                    generation,
                    Some(&err),
                    reset_delay,
                );
                Err(err)
            }
        }
    }

    fn begin(&self) -> Result<(ContactSubmission, u64)> {
        let mut state = lock(&self.state);

        if state.status == SubmissionStatus::Submitting {
            tracing::warn!("Submit ignored: a submission is already in flight");
            return Err(HomecareError::SubmissionInFlight);
        }

        if !is_valid_indian_phone(&state.fields.phone) {
            tracing::warn!("Submit aborted: invalid phone number");
            state.phone_error = Some(PHONE_SUBMIT_MESSAGE.to_string());
            return Err(HomecareError::InvalidPhone {
                value: state.fields.phone.clone(),
            });
        }

        self.check_fields(&state.fields)?;

        state.generation += 1;
        state.set_status(SubmissionStatus::Submitting);
        tracing::info!("📨 Sending contact submission #{}", state.generation);

        Ok((state.fields.to_submission(self.variant), state.generation))
    }

    fn check_fields(&self, fields: &FormFields) -> Result<()> {
        for &field in self.variant.fields() {
            let value = fields.get(field);
            validate_required(field.as_str(), value)?;

            match field {
                FormField::Email => validate_email(value)?,
                FormField::Service if !is_service_option(value) => {
                    return Err(HomecareError::UnknownOption {
                        field: field.to_string(),
                        value: value.to_string(),
                    });
                }
                FormField::ServiceArea if !is_service_area_option(value) => {
                    return Err(HomecareError::UnknownOption {
                        field: field.to_string(),
                        value: value.to_string(),
                    });
                }
                _ => {}
            }
        }
        Ok(())
    }
}

/// Apply a request outcome and arm the reset timer.
fn settle(
    state: &Weak<Mutex<FormState>>,
    generation: u64,
    failure: Option<&HomecareError>,
    reset_delay: Duration,
) {
    let Some(state) = state.upgrade() else {
        tracing::debug!("Form dropped before submission #{} finished; outcome discarded", generation);
        return;
    };

    {
        let mut guard = lock(&state);
        if guard.generation != generation {
            return;
        }

        match failure {
            None => {
                // 成功後立即清空欄位
                guard.fields.clear();
                guard.phone_error = None;
                guard.set_status(SubmissionStatus::Success);
                tracing::info!("✅ Contact submission #{} delivered", generation);
            }
            Some(e) => {
                guard.set_status(SubmissionStatus::Error);
                tracing::error!("❌ Contact submission #{} failed: {}", generation, e);
            }
        }
    }

    schedule_reset(Arc::downgrade(&state), generation, reset_delay);
}

fn schedule_reset(state: Weak<Mutex<FormState>>, generation: u64, delay: Duration) {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;

        let Some(state) = state.upgrade() else {
            return;
        };
        let mut guard = lock(&state);
        if guard.generation == generation && guard.status.is_settled() {
            guard.set_status(SubmissionStatus::Idle);
        }
    });
}
