use httpmock::prelude::*;
use seecure_homecare::{
    ContactForm, FormField, FormVariant, HomecareError, HttpSubmitter, SubmissionStatus,
};
use std::time::{Duration, Instant};

const SHORT_RESET: Duration = Duration::from_millis(300);

fn submitter(url: String) -> HttpSubmitter {
    HttpSubmitter::new(url, Duration::from_secs(5)).unwrap()
}

fn fill_single(form: &ContactForm<HttpSubmitter>) {
    form.set_field(FormField::Name, "Sourav Ghosh");
    form.set_field(FormField::Email, "sourav@example.com");
    form.set_field(FormField::Phone, "+91 9830012345");
    form.set_field(FormField::Service, "cbg-analysis");
    form.set_field(FormField::ServiceArea, "Kestopur");
    form.set_field(FormField::Message, "Diabetic father, weekly CBG check");
}

async fn wait_for_idle(form: &ContactForm<HttpSubmitter>, limit: Duration) {
    let mut rx = form.subscribe();
    tokio::time::timeout(limit, rx.wait_for(|s| *s == SubmissionStatus::Idle))
        .await
        .expect("status did not return to idle in time")
        .expect("form state dropped");
}

#[tokio::test]
async fn test_success_clears_fields_then_returns_to_idle() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/f/meokkgzb")
            .header("content-type", "application/json")
            .json_body(serde_json::json!({
                "name": "Sourav Ghosh",
                "email": "sourav@example.com",
                "phone": "+91 9830012345",
                "service": "cbg-analysis",
                "serviceArea": "Kestopur",
                "message": "Diabetic father, weekly CBG check"
            }));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"next": "/thanks", "ok": true}));
    });

    let form = ContactForm::with_reset_delay(
        FormVariant::SingleName,
        submitter(server.url("/f/meokkgzb")),
        SHORT_RESET,
    );
    fill_single(&form);

    form.submit().await.unwrap();

    api_mock.assert();
    assert_eq!(form.status(), SubmissionStatus::Success);
    assert!(form.fields().is_empty());
    assert!(form.phone_error().is_none());

    wait_for_idle(&form, Duration::from_secs(3)).await;
    assert_eq!(form.status(), SubmissionStatus::Idle);
    assert!(form.fields().is_empty());
}

#[tokio::test]
async fn test_server_error_keeps_fields_for_retry() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/f/meokkgzb");
        then.status(500);
    });

    let form = ContactForm::with_reset_delay(
        FormVariant::SingleName,
        submitter(server.url("/f/meokkgzb")),
        SHORT_RESET,
    );
    fill_single(&form);
    let before = form.fields();

    let err = form.submit().await.unwrap_err();

    api_mock.assert();
    assert!(matches!(err, HomecareError::EndpointRejected { status: 500 }));
    assert_eq!(form.status(), SubmissionStatus::Error);
    assert_eq!(form.fields(), before);

    wait_for_idle(&form, Duration::from_secs(3)).await;
    assert_eq!(form.fields(), before);
}

#[tokio::test]
async fn test_offline_endpoint_is_reported_like_server_error() {
    // 無人監聽的埠，模擬離線
    let form = ContactForm::with_reset_delay(
        FormVariant::SingleName,
        submitter("http://127.0.0.1:9/f/meokkgzb".to_string()),
        SHORT_RESET,
    );
    fill_single(&form);

    let err = form.submit().await.unwrap_err();

    assert!(err.is_transport());
    assert_eq!(form.status(), SubmissionStatus::Error);
    assert_eq!(form.field(FormField::Name), "Sourav Ghosh");
    assert_eq!(
        SubmissionStatus::Error.banner(),
        Some(err.user_friendly_message().as_str())
    );
}

#[tokio::test]
async fn test_invalid_phone_issues_no_request() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/f/meokkgzb");
        then.status(200);
    });

    let form = ContactForm::new(FormVariant::SingleName, submitter(server.url("/f/meokkgzb")));
    fill_single(&form);
    form.set_field(FormField::Phone, "12345 67890");

    let err = form.submit().await.unwrap_err();

    api_mock.assert_hits(0);
    assert!(matches!(err, HomecareError::InvalidPhone { .. }));
    assert!(!form.phone_error().unwrap_or_default().is_empty());
    assert_eq!(form.status(), SubmissionStatus::Idle);
}

#[tokio::test]
async fn test_split_name_form_sends_combined_name() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/f/meokkgzb").json_body(serde_json::json!({
            "name": "Priya Banerjee",
            "firstName": "Priya",
            "lastName": "Banerjee",
            "email": "priya@example.com",
            "phone": "6295328031",
            "service": "other",
            "serviceArea": "other",
            "message": "We live in Dum Dum, can you come?"
        }));
        then.status(201);
    });

    let form = ContactForm::with_reset_delay(
        FormVariant::SplitName,
        submitter(server.url("/f/meokkgzb")),
        SHORT_RESET,
    );
    form.set_field(FormField::FirstName, "Priya");
    form.set_field(FormField::LastName, "Banerjee");
    form.set_field(FormField::Email, "priya@example.com");
    form.set_field(FormField::Phone, "6295328031");
    form.set_field(FormField::Service, "other");
    form.set_field(FormField::ServiceArea, "other");
    form.set_field(FormField::Message, "We live in Dum Dum, can you come?");

    form.submit().await.unwrap();

    api_mock.assert();
    assert_eq!(form.status(), SubmissionStatus::Success);
    assert!(form.fields().is_empty());
}

#[tokio::test]
async fn test_default_reset_delay_is_five_seconds() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/f/meokkgzb");
        then.status(200);
    });

    let form = ContactForm::new(FormVariant::SingleName, submitter(server.url("/f/meokkgzb")));
    fill_single(&form);

    form.submit().await.unwrap();
    let settled = Instant::now();
    api_mock.assert();

    tokio::time::sleep(Duration::from_millis(4500)).await;
    assert_eq!(form.status(), SubmissionStatus::Success);

    wait_for_idle(&form, Duration::from_secs(2)).await;
    assert!(settled.elapsed() >= Duration::from_millis(4900));
}
