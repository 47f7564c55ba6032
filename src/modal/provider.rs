use std::sync::Arc;

use crate::domain::CaptureFlow;
use crate::gateway::SubmissionGateway;
use crate::modal::CaptureModal;

/// Root of the page composition: owns exactly one controller per modal
/// variant. Hand out clones of the handles instead of constructing new
/// `CaptureModal`s; the variants share the gateway but nothing mutable.
pub struct CaptureModals<G> {
    waitlist: CaptureModal<G>,
    feedback: CaptureModal<G>,
}

impl<G: SubmissionGateway> CaptureModals<G> {
    pub fn new(gateway: G) -> Self {
        let gateway = Arc::new(gateway);
        Self {
            waitlist: CaptureModal::new(CaptureFlow::Waitlist, Arc::clone(&gateway)),
            feedback: CaptureModal::new(CaptureFlow::Feedback, gateway),
        }
    }

    pub fn waitlist(&self) -> CaptureModal<G> { self.waitlist.clone() }

    pub fn feedback(&self) -> CaptureModal<G> { self.feedback.clone() }

    pub fn get(
        &self,
        flow: CaptureFlow,
    ) -> CaptureModal<G> {
        match flow {
            CaptureFlow::Waitlist => self.waitlist(),
            CaptureFlow::Feedback => self.feedback(),
        }
    }
}
