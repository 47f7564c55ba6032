use std::future::Future;

use crate::configuration::ContactsSettings;
use crate::contacts_client::ContactsClient;
use crate::domain::CaptureFlow;
use crate::domain::CaptureRequest;
use crate::domain::NewContact;
use crate::domain::SubmissionResult;

/// Whatever the modal controller submits through. Implementations perform at
/// most one outbound call per `submit` and never retry.
pub trait SubmissionGateway: Send + Sync + 'static {
    fn submit(
        &self,
        flow: CaptureFlow,
        contact: NewContact,
    ) -> impl Future<Output = SubmissionResult> + Send;
}

/// Talks to the contacts provider directly, picking the configured list for
/// each flow.
#[derive(Clone)]
pub struct ContactsGateway {
    client: ContactsClient,
    cfg: ContactsSettings,
}

impl ContactsGateway {
    pub fn new(cfg: ContactsSettings) -> Self {
        Self {
            client: cfg.clone().client(),
            cfg,
        }
    }
}

impl SubmissionGateway for ContactsGateway {
    async fn submit(
        &self,
        flow: CaptureFlow,
        contact: NewContact,
    ) -> SubmissionResult {
        let request = CaptureRequest {
            flow,
            contact,
            list_id: flow.list_id(&self.cfg),
        };
        self.client.submit(&request).await
    }
}
