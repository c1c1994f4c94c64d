use crate::helpers::{filled_form, spawn_app, spawn_app_with_timeout, RecordingView};
use seo_subscribe::domain::FormState;
use seo_subscribe::subscribe_client::SubscribeClient;
use seo_subscribe::subscription_controller::{
    SubmissionState, SubmitOutcome, SubscriptionController, GENERIC_FAILURE_MESSAGE,
};
use std::net::TcpListener;
use std::time::Duration;
use wiremock::matchers::{any, header, method, path};
use wiremock::{Mock, ResponseTemplate};

fn reply(success: bool, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "success": success,
        "message": message,
    }))
}

#[tokio::test]
async fn submit_sends_one_request_matching_the_form() {
    let app = spawn_app(filled_form()).await;

    Mock::given(path("/subscribe"))
        .and(method("POST"))
        .and(header("Content-Type", "application/json"))
        .respond_with(reply(true, "ok"))
        .expect(1)
        .mount(&app.subscribe_server)
        .await;

    app.controller.submit().await;

    let bodies = app.received_bodies().await;
    assert_eq!(
        bodies,
        vec![serde_json::json!({
            "email": "ursula_le_guin@gmail.com",
            "featureUpdates": false,
            "seoTips": true,
        })]
    );
}

#[tokio::test]
async fn submit_reads_the_form_at_submit_time() {
    let app = spawn_app(filled_form()).await;

    Mock::given(any())
        .respond_with(reply(false, "taken"))
        .expect(1)
        .mount(&app.subscribe_server)
        .await;

    app.view().set_form(FormState {
        email: "not even an email".into(),
        feature_updates: true,
        seo_tips: false,
    });
    app.controller.submit().await;

    let bodies = app.received_bodies().await;
    assert_eq!(bodies[0]["email"], "not even an email");
    assert_eq!(bodies[0]["featureUpdates"], true);
    assert_eq!(bodies[0]["seoTips"], false);
}

#[tokio::test]
async fn accepted_subscription_resets_the_form_and_hides_the_modal() {
    let app = spawn_app(filled_form()).await;

    Mock::given(any())
        .respond_with(reply(true, "ok"))
        .expect(1)
        .mount(&app.subscribe_server)
        .await;

    let outcome = app.controller.submit().await;

    assert_eq!(outcome, SubmitOutcome::Subscribed);
    assert_eq!(app.view().notifications(), vec!["ok".to_string()]);
    assert_eq!(app.view().form(), FormState::default());
    assert!(app.view().form().feature_updates);
    assert!(app.view().form().seo_tips);
    assert!(!app.view().modal_visible());
}

#[tokio::test]
async fn refused_subscription_keeps_the_form_and_the_modal() {
    let app = spawn_app(filled_form()).await;

    Mock::given(any())
        .respond_with(reply(false, "taken"))
        .expect(1)
        .mount(&app.subscribe_server)
        .await;

    let outcome = app.controller.submit().await;

    assert_eq!(outcome, SubmitOutcome::Rejected);
    assert_eq!(app.view().notifications(), vec!["taken".to_string()]);
    assert_eq!(app.view().form(), filled_form());
    assert_eq!(app.view().form_writes(), 0);
    assert!(app.view().modal_visible());
}

#[tokio::test]
async fn refusal_with_an_error_status_still_shows_the_server_message() {
    let app = spawn_app(filled_form()).await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "success": false,
            "message": "Please provide an email address",
        })))
        .expect(1)
        .mount(&app.subscribe_server)
        .await;

    let outcome = app.controller.submit().await;

    assert_eq!(outcome, SubmitOutcome::Rejected);
    assert_eq!(
        app.view().notifications(),
        vec!["Please provide an email address".to_string()]
    );
}

#[tokio::test]
async fn network_failure_shows_the_generic_message_and_leaves_the_form_alone() {
    let app = spawn_app_with_timeout(filled_form(), Some(Duration::from_millis(200))).await;

    Mock::given(any())
        .respond_with(reply(true, "ok").set_delay(Duration::from_secs(30)))
        .expect(1)
        .mount(&app.subscribe_server)
        .await;

    let outcome = app.controller.submit().await;

    assert_eq!(outcome, SubmitOutcome::Failed);
    assert_eq!(
        app.view().notifications(),
        vec![GENERIC_FAILURE_MESSAGE.to_string()]
    );
    assert_eq!(app.view().form(), filled_form());
    assert_eq!(app.view().form_writes(), 0);
    assert!(app.view().modal_visible());
}

#[tokio::test]
async fn malformed_response_is_handled_like_a_network_failure() {
    let app = spawn_app(filled_form()).await;
    let test_cases = vec![
        (ResponseTemplate::new(200).set_body_string("Subscribed!"), "plain text body"),
        (
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"success": true})),
            "missing message",
        ),
        (
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"success": "yes", "message": "ok"})),
            "success is not a boolean",
        ),
    ];

    for (response, description) in test_cases {
        let _mock_guard = Mock::given(any())
            .respond_with(response)
            .expect(1)
            .mount_as_scoped(&app.subscribe_server)
            .await;

        let outcome = app.controller.submit().await;

        assert_eq!(outcome, SubmitOutcome::Failed, "{}", description);
        assert_eq!(app.view().form(), filled_form(), "{}", description);
        assert!(app.view().modal_visible(), "{}", description);
    }
    assert_eq!(
        app.view().notifications(),
        vec![GENERIC_FAILURE_MESSAGE.to_string(); 3]
    );
}

#[tokio::test]
async fn a_second_submit_while_in_flight_sends_nothing() {
    let app = spawn_app(filled_form()).await;

    Mock::given(any())
        .respond_with(reply(true, "ok").set_delay(Duration::from_millis(300)))
        .expect(1)
        .mount(&app.subscribe_server)
        .await;

    let (first, second) = tokio::join!(app.controller.submit(), app.controller.submit());

    let mut outcomes = vec![first, second];
    outcomes.sort_by_key(|outcome| *outcome == SubmitOutcome::AlreadyInFlight);
    assert_eq!(
        outcomes,
        vec![SubmitOutcome::Subscribed, SubmitOutcome::AlreadyInFlight]
    );
    assert_eq!(app.view().notifications(), vec!["ok".to_string()]);
    assert_eq!(app.view().form_writes(), 1);
}

#[tokio::test]
async fn the_controller_accepts_a_new_submit_once_the_previous_one_finished() {
    let app = spawn_app(filled_form()).await;

    Mock::given(any())
        .respond_with(reply(false, "taken"))
        .expect(2)
        .mount(&app.subscribe_server)
        .await;

    assert_eq!(app.controller.state(), SubmissionState::Idle);
    assert_eq!(app.controller.submit().await, SubmitOutcome::Rejected);
    assert_eq!(app.controller.state(), SubmissionState::Idle);
    assert_eq!(app.controller.submit().await, SubmitOutcome::Rejected);

    assert_eq!(
        app.view().notifications(),
        vec!["taken".to_string(), "taken".to_string()]
    );
}

#[tokio::test]
async fn a_failed_submit_releases_the_in_flight_guard() {
    let app = spawn_app_with_timeout(filled_form(), Some(Duration::from_millis(200))).await;

    {
        let _mock_guard = Mock::given(any())
            .respond_with(reply(true, "ok").set_delay(Duration::from_secs(30)))
            .expect(1)
            .mount_as_scoped(&app.subscribe_server)
            .await;
        assert_eq!(app.controller.submit().await, SubmitOutcome::Failed);
    }

    Mock::given(any())
        .respond_with(reply(true, "ok"))
        .expect(1)
        .mount(&app.subscribe_server)
        .await;

    assert_eq!(app.controller.submit().await, SubmitOutcome::Subscribed);
    assert!(!app.view().modal_visible());
}

#[tokio::test]
async fn state_is_submitting_while_the_response_is_pending() {
    let app = spawn_app(filled_form()).await;

    Mock::given(any())
        .respond_with(reply(true, "ok").set_delay(Duration::from_millis(500)))
        .expect(1)
        .mount(&app.subscribe_server)
        .await;

    let (outcome, state_while_pending) = tokio::join!(app.controller.submit(), async {
        tokio::time::sleep(Duration::from_millis(100)).await;
        app.controller.state()
    });

    assert_eq!(state_while_pending, SubmissionState::Submitting);
    assert_eq!(outcome, SubmitOutcome::Subscribed);
    assert_eq!(app.controller.state(), SubmissionState::Idle);
}

#[tokio::test]
async fn refused_connection_shows_the_generic_message_and_leaves_the_form_alone() {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
        listener.local_addr().unwrap().port()
    };
    let client = SubscribeClient::new(format!("http://127.0.0.1:{}", port), Duration::from_secs(2))
        .expect("Failed to build the subscribe client.");
    let controller = SubscriptionController::new(client, RecordingView::new(filled_form()));

    let outcome = controller.submit().await;

    assert_eq!(outcome, SubmitOutcome::Failed);
    assert_eq!(
        controller.view().notifications(),
        vec![GENERIC_FAILURE_MESSAGE.to_string()]
    );
    assert_eq!(controller.view().form_writes(), 0);
    assert_eq!(controller.view().form(), filled_form());
    assert!(controller.view().modal_visible());
}
