use std::time::Duration;

use capture_gateway::api_client::CaptureApiClient;
use capture_gateway::configuration::get_configuration;
use capture_gateway::gateway::ContactsGateway;
use capture_gateway::modal::CaptureFields;
use capture_gateway::modal::CaptureModals;
use capture_gateway::modal::Field;
use capture_gateway::modal::Phase;
use capture_gateway::modal::SubmitOutcome;
use capture_gateway::modal::Visibility;
use capture_gateway::modal::GENERIC_FAILURE;
use claims::assert_matches;
use secrecy::Secret;
use serde_json::json;
use wiremock::matchers::method;
use wiremock::Mock;
use wiremock::ResponseTemplate;

use crate::helpers::spawn_app;

#[tokio::test]
async fn waitlist_modal_end_to_end() {
    let app = spawn_app().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 42 })))
        .expect(1)
        .mount(&app.provider)
        .await;

    let modals = CaptureModals::new(CaptureApiClient::new(app.addr.clone()));
    let waitlist = modals.waitlist();

    waitlist.open_modal();
    let outcome = waitlist.submit(CaptureFields::email("a@b.com")).await;
    assert_eq!(outcome, SubmitOutcome::Succeeded);
    assert_eq!(waitlist.snapshot().phase, Phase::Succeeded);
    assert_eq!(waitlist.view().heading, "You're on the list!");

    waitlist.close_modal();
    waitlist.open_modal();
    let state = waitlist.snapshot();
    assert_eq!(state.visibility, Visibility::Open);
    assert_eq!(state.fields, CaptureFields::default());
    assert_eq!(state.phase, Phase::Idle);
}

#[tokio::test]
async fn malformed_email_never_leaves_the_modal() {
    let app = spawn_app().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&app.provider)
        .await;

    let modals = CaptureModals::new(CaptureApiClient::new(app.addr.clone()));
    let waitlist = modals.waitlist();
    waitlist.open_modal();

    let outcome = waitlist.submit(CaptureFields::email("not-an-email")).await;
    assert_matches!(outcome, SubmitOutcome::Invalid(_));

    let view = waitlist.view();
    assert_eq!(view.field_errors[0].field, Field::Email);
    assert_eq!(view.submit_error, None);
    assert_eq!(waitlist.snapshot().fields.email, "not-an-email");
}

#[tokio::test]
async fn provider_rejection_shows_generic_error() {
    let app = spawn_app().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({ "message": "Invalid list" })))
        .mount(&app.provider)
        .await;

    let modals = CaptureModals::new(CaptureApiClient::new(app.addr.clone()));
    let feedback = modals.feedback();
    feedback.open_modal();

    let fields = CaptureFields {
        email: "a@b.com".to_string(),
        username: String::new(),
        feedback: "more charts".to_string(),
    };
    assert_eq!(feedback.submit(fields.clone()).await, SubmitOutcome::Failed);

    let state = feedback.snapshot();
    assert_eq!(state.phase, Phase::Failed);
    assert_eq!(state.fields, fields);
    assert_eq!(state.submit_error.as_deref(), Some(GENERIC_FAILURE));
    assert_eq!(
        app.provider_bodies().await[0]["attributes"],
        json!({ "FEEDBACK": "more charts" })
    );
}

#[tokio::test]
async fn direct_gateway_skips_the_api() {
    let app = spawn_app().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 1 })))
        .expect(1)
        .mount(&app.provider)
        .await;

    let mut cfg = get_configuration().unwrap().contacts;
    cfg.base_url = app.provider.uri();
    cfg.api_key = Some(Secret::new("test-key".to_string()));
    let modals = CaptureModals::new(ContactsGateway::new(cfg));

    let waitlist = modals.waitlist();
    waitlist.open_modal();
    assert_eq!(
        waitlist.submit(CaptureFields::email("a@b.com")).await,
        SubmitOutcome::Succeeded
    );
}

#[tokio::test]
async fn close_mid_submission_does_not_cancel_the_call() {
    let app = spawn_app().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({ "id": 1 }))
                .set_delay(Duration::from_millis(200)),
        )
        .expect(1)
        .mount(&app.provider)
        .await;

    let modals = CaptureModals::new(CaptureApiClient::new(app.addr.clone()));
    let waitlist = modals.waitlist();
    waitlist.open_modal();

    let pending = {
        let waitlist = waitlist.clone();
        tokio::spawn(async move { waitlist.submit(CaptureFields::email("a@b.com")).await })
    };
    while waitlist.snapshot().phase != Phase::Submitting {
        tokio::task::yield_now().await;
    }
    waitlist.close_modal();

    assert_eq!(pending.await.unwrap(), SubmitOutcome::Discarded);
    assert_eq!(app.provider_bodies().await.len(), 1);
}
