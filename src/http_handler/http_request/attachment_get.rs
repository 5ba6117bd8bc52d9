use super::request_common::{HTTPRequestType, NoBodyHTTPRequestType};
use crate::http_handler::http_response::attachment::AttachmentResponse;

/// Request type for the `/api/cases/{case_id}/attachments/{doc_type}`
/// endpoint. `doc_type` is one of the backend's document type keys
/// (e.g. `invoice`, `contract`, `pod`).
#[derive(Debug)]
pub struct AttachmentRequest {
    endpoint: String,
}

impl AttachmentRequest {
    #[must_use]
    pub fn new(case_id: &str, doc_type: &str) -> Self {
        Self { endpoint: format!("/api/cases/{case_id}/attachments/{doc_type}") }
    }
}

impl NoBodyHTTPRequestType for AttachmentRequest {}

impl HTTPRequestType for AttachmentRequest {
    type Response = AttachmentResponse;
    fn endpoint(&self) -> &str { &self.endpoint }
}
