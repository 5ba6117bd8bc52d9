use super::http_client::HTTPClient;
use super::http_request::{
    case_detail_get::CaseDetailRequest, case_list_get::CaseListRequest,
    request_common::NoBodyHTTPRequestType,
};
use super::http_response::response_common::ResponseError;
use super::HTTPError;
use crate::case_api::CaseApi;
use std::sync::Arc;

const CASE_LIST_BODY: &str = r#"{
    "cases": [
        {"case_id": "DSP-0001", "company": "Acme Manufacturing", "email_excerpt": "Invoice 1041 is overdue", "attachments": 2},
        {"case_id": "DSP-0002", "company": "Globex", "email_excerpt": "Missing proof of delivery", "attachments": 1},
        {"case_id": "DSP-0003", "company": "Initech", "email_excerpt": "Contract renewal question", "attachments": 0}
    ]
}"#;

const CASE_DETAIL_BODY: &str = r#"{
    "case_id": "abc123",
    "company": "Acme Manufacturing",
    "email_body": "Hello, invoice 1041 is overdue since March.",
    "llm_output": "<p>Recommend escalation.</p>",
    "attachments": [
        {"type": "invoice", "label": "Customer invoice", "filename": "inv_1041.pdf", "download_url": "api/cases/abc123/attachments/invoice"},
        {"type": "pod", "label": "Proof of delivery", "filename": "pod_1041.pdf", "download_url": "api/cases/abc123/attachments/pod"}
    ]
}"#;

#[tokio::test]
async fn case_list_preserves_backend_order() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/cases")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(CASE_LIST_BODY)
        .create_async()
        .await;

    let client = HTTPClient::new(&server.url());
    let response = CaseListRequest {}.send_request(&client).await.unwrap();

    let ids: Vec<&str> = response.cases().iter().map(super::CaseSummary::case_id).collect();
    assert_eq!(ids, vec!["DSP-0001", "DSP-0002", "DSP-0003"]);
    assert_eq!(response.cases()[0].company(), "Acme Manufacturing");
    assert_eq!(response.cases()[0].attachments(), 2);
    assert_eq!(client.failure_count().await, 0);
    mock.assert_async().await;
}

#[tokio::test]
async fn case_detail_hits_exact_path() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/cases/abc123")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(CASE_DETAIL_BODY)
        .create_async()
        .await;

    let client = HTTPClient::new(&server.url());
    let detail = CaseDetailRequest::new("abc123").send_request(&client).await.unwrap();

    assert_eq!(detail.case_id(), "abc123");
    assert_eq!(detail.email_body(), "Hello, invoice 1041 is overdue since March.");
    assert_eq!(detail.llm_output(), "<p>Recommend escalation.</p>");
    assert_eq!(detail.attachments().len(), 2);
    assert_eq!(detail.attachments()[0].kind(), "invoice");
    assert_eq!(detail.attachments()[1].filename(), "pod_1041.pdf");
    mock.assert_async().await;
}

#[tokio::test]
async fn server_error_is_recorded_and_returned() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/cases")
        .with_status(500)
        .with_body("backend exploded")
        .create_async()
        .await;

    let client = HTTPClient::new(&server.url());
    let result = CaseListRequest {}.send_request(&client).await;

    assert!(matches!(
        result,
        Err(HTTPError::HTTPResponseError(ResponseError::InternalServer { .. }))
    ));
    let failures = client.failures().await;
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].endpoint(), "/api/cases");
    assert_eq!(failures[0].status(), Some(reqwest::StatusCode::INTERNAL_SERVER_ERROR));
    assert_eq!(failures[0].body(), "backend exploded");
    mock.assert_async().await;
}

#[tokio::test]
async fn missing_case_maps_to_not_found() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/cases/nope")
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(r#"{"detail": "Case nope not found"}"#)
        .create_async()
        .await;

    let client = HTTPClient::new(&server.url());
    let result = CaseDetailRequest::new("nope").send_request(&client).await;

    match result {
        Err(HTTPError::HTTPResponseError(ResponseError::NotFound(detail))) => {
            assert_eq!(detail, "Case nope not found");
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
    let failures = client.failures().await;
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].status(), Some(reqwest::StatusCode::NOT_FOUND));
    mock.assert_async().await;
}

#[tokio::test]
async fn concurrent_operations_resolve_independently() {
    let mut server = mockito::Server::new_async().await;
    let list_mock = server
        .mock("GET", "/api/cases")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(CASE_LIST_BODY)
        .create_async()
        .await;
    let detail_mock = server
        .mock("GET", "/api/cases/DSP-0001")
        .with_status(500)
        .with_body("boom")
        .create_async()
        .await;

    let api = CaseApi::new(Arc::new(HTTPClient::new(&server.url())));
    let (list_result, detail_result) = tokio::join!(api.list_cases(), api.get_case("DSP-0001"));

    let cases = list_result.unwrap();
    assert_eq!(cases.len(), 3);
    assert!(detail_result.is_err());
    assert_eq!(api.client().failure_count().await, 1);
    list_mock.assert_async().await;
    detail_mock.assert_async().await;
}

#[tokio::test]
async fn attachment_download_returns_exact_bytes() {
    let payload: Vec<u8> = vec![0x25, 0x50, 0x44, 0x46, 0x2d, 0x31, 0x2e, 0x34];
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/cases/DSP-0001/attachments/invoice")
        .with_status(200)
        .with_header("content-type", "application/pdf")
        .with_body(payload.clone())
        .create_async()
        .await;

    let api = CaseApi::new(Arc::new(HTTPClient::new(&server.url())));
    let bytes = api.download_attachment("DSP-0001", "invoice").await.unwrap();

    assert_eq!(bytes, payload);
    mock.assert_async().await;
}

#[tokio::test]
async fn unreachable_backend_is_recorded_as_transport_failure() {
    // Port 9 (discard protocol) is a reliable connection-refused target.
    let client = HTTPClient::new("http://127.0.0.1:9");
    let result = CaseListRequest {}.send_request(&client).await;

    assert!(matches!(result, Err(HTTPError::HTTPRequestError(_))));
    let failures = client.failures().await;
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].endpoint(), "/api/cases");
    assert_eq!(failures[0].status(), None);
}
