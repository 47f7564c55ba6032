use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;
use std::time::Duration;

use crate::domain::CaptureFlow;
use crate::domain::SubmissionResult;
use crate::gateway::SubmissionGateway;
use crate::modal::CaptureFields;
use crate::modal::Field;
use crate::modal::FieldError;
use crate::modal::ModalState;
use crate::modal::ModalView;
use crate::modal::Phase;
use crate::modal::Visibility;
use crate::modal::GENERIC_FAILURE;

/// Long enough for a close animation to finish before the form is cleared.
pub const DEFAULT_RESET_DELAY: Duration = Duration::from_millis(300);

/// What a single `submit` call ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Another submission was in flight; nothing was sent
    AlreadySubmitting,
    /// Rejected locally; nothing was sent
    Invalid(Vec<FieldError>),
    Succeeded,
    Failed,
    /// The modal was closed while the call was in flight; its result was
    /// dropped
    Discarded,
}

struct Inner {
    state: ModalState,
    /// Bumped on every close; a submission started under an older epoch
    /// must not touch the state.
    epoch: u64,
    pending_reset: bool,
    /// Outlives the session that started the call: closing and reopening
    /// resets the phase but not this.
    in_flight: bool,
}

impl Inner {
    fn reset(&mut self) {
        self.state.fields = CaptureFields::default();
        self.state.phase = Phase::Idle;
        self.state.field_errors.clear();
        self.state.submit_error = None;
        self.pending_reset = false;
    }

    fn reset_if_current(
        &mut self,
        epoch: u64,
    ) {
        if self.pending_reset && self.epoch == epoch && self.state.visibility == Visibility::Closed {
            self.reset();
        }
    }
}

/// Shared open/close state and form lifecycle for one modal variant.
///
/// Handles are cheap to clone; every clone drives the same state, so any
/// page element can open the modal without threading it through. The state
/// is only mutated through `open_modal`, `close_modal` and `submit`.
pub struct CaptureModal<G> {
    flow: CaptureFlow,
    gateway: Arc<G>,
    inner: Arc<Mutex<Inner>>,
    reset_delay: Duration,
}

impl<G> Clone for CaptureModal<G> {
    fn clone(&self) -> Self {
        Self {
            flow: self.flow,
            gateway: Arc::clone(&self.gateway),
            inner: Arc::clone(&self.inner),
            reset_delay: self.reset_delay,
        }
    }
}

fn lock(inner: &Mutex<Inner>) -> MutexGuard<'_, Inner> {
    // state is plain data; a panic elsewhere cannot leave it half-written
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Clears `in_flight` when the gateway call settles, or when the submitting
/// future is dropped before it does.
struct InFlight<'a>(&'a Mutex<Inner>);

impl Drop for InFlight<'_> {
    fn drop(&mut self) { lock(self.0).in_flight = false; }
}

impl<G: SubmissionGateway> CaptureModal<G> {
    pub fn new(
        flow: CaptureFlow,
        gateway: Arc<G>,
    ) -> Self {
        Self {
            flow,
            gateway,
            inner: Arc::new(Mutex::new(Inner {
                state: ModalState::default(),
                epoch: 0,
                pending_reset: false,
                in_flight: false,
            })),
            reset_delay: DEFAULT_RESET_DELAY,
        }
    }

    /// A zero delay resets synchronously on close.
    pub fn with_reset_delay(
        mut self,
        delay: Duration,
    ) -> Self {
        self.reset_delay = delay;
        self
    }

    pub fn flow(&self) -> CaptureFlow { self.flow }

    pub fn snapshot(&self) -> ModalState { lock(&self.inner).state.clone() }

    pub fn view(&self) -> ModalView {
        let inner = lock(&self.inner);
        let mut view = ModalView::render(self.flow, &inner.state);
        view.submit_enabled &= !inner.in_flight;
        view
    }

    /// Whether a gateway call is outstanding, whatever the modal shows.
    pub fn in_flight(&self) -> bool { lock(&self.inner).in_flight }

    /// Field that receives focus when the modal opens.
    pub fn primary_field(&self) -> Field {
        match self.flow {
            CaptureFlow::Waitlist => Field::Email,
            CaptureFlow::Feedback => Field::Feedback,
        }
    }

    pub fn open_modal(&self) {
        let mut inner = lock(&self.inner);
        // never show what a previous session left behind
        if inner.pending_reset {
            inner.reset();
        }
        inner.state.visibility = Visibility::Open;
        inner.state.focus = Some(self.primary_field());
        tracing::debug!(flow = %self.flow, "modal opened");
    }

    /// Callable in any phase. An in-flight submission is not cancelled; its
    /// result is discarded once it arrives.
    pub fn close_modal(&self) {
        let epoch = {
            let mut inner = lock(&self.inner);
            inner.state.visibility = Visibility::Closed;
            inner.state.focus = None;
            inner.epoch += 1;
            inner.pending_reset = true;
            inner.epoch
        };
        tracing::debug!(flow = %self.flow, "modal closed");

        let handle = match tokio::runtime::Handle::try_current() {
            Ok(handle) if !self.reset_delay.is_zero() => handle,
            _ => {
                lock(&self.inner).reset_if_current(epoch);
                return;
            }
        };
        let inner = Arc::clone(&self.inner);
        let delay = self.reset_delay;
        handle.spawn(async move {
            tokio::time::sleep(delay).await;
            lock(&inner).reset_if_current(epoch);
        });
    }

    pub fn on_outside_click(&self) { self.close_modal() }

    pub fn on_close_button(&self) { self.close_modal() }

    /// Validate `fields` and, if they pass, forward them through the gateway.
    ///
    /// No-op while another submission is in flight, including one started
    /// before the modal was last closed. Fields stay in the state
    /// whatever happens, so a failed attempt can be resubmitted as is.
    #[tracing::instrument(name = "Submitting capture form", skip(self, fields), fields(flow = %self.flow))]
    pub async fn submit(
        &self,
        fields: CaptureFields,
    ) -> SubmitOutcome {
        let (contact, epoch) = {
            let mut inner = lock(&self.inner);
            if inner.in_flight {
                tracing::debug!("submission already in flight");
                return SubmitOutcome::AlreadySubmitting;
            }
            inner.state.fields = fields;
            inner.state.submit_error = None;
            match inner.state.fields.parse(self.flow) {
                Ok(contact) => {
                    inner.state.phase = Phase::Submitting;
                    inner.state.field_errors.clear();
                    inner.in_flight = true;
                    (contact, inner.epoch)
                }
                Err(errors) => {
                    inner.state.phase = Phase::Invalid;
                    inner.state.field_errors = errors.clone();
                    return SubmitOutcome::Invalid(errors);
                }
            }
        };

        let in_flight = InFlight(&*self.inner);
        let result = self.gateway.submit(self.flow, contact).await;
        drop(in_flight);

        let mut inner = lock(&self.inner);
        if inner.epoch != epoch {
            tracing::info!("modal closed during submission, discarding result");
            return SubmitOutcome::Discarded;
        }
        match result {
            SubmissionResult::Success { .. } => {
                inner.state.phase = Phase::Succeeded;
                SubmitOutcome::Succeeded
            }
            SubmissionResult::Failure { status, message } => {
                // the cause is for operators; users get the generic copy
                tracing::warn!(status, error.message = %message, "submission failed");
                inner.state.phase = Phase::Failed;
                inner.state.submit_error = Some(GENERIC_FAILURE.to_string());
                SubmitOutcome::Failed
            }
        }
    }
}
