use super::request_common::{HTTPRequestType, NoBodyHTTPRequestType};
use crate::http_handler::http_response::case_detail::CaseDetailResponse;

/// Request type for the `/api/cases/{case_id}` endpoint.
///
/// The identifier is interpolated into the path verbatim; callers are
/// expected to pass a valid path segment.
#[derive(Debug)]
pub struct CaseDetailRequest {
    endpoint: String,
}

impl CaseDetailRequest {
    #[must_use]
    pub fn new(case_id: &str) -> Self {
        Self { endpoint: format!("/api/cases/{case_id}") }
    }
}

impl NoBodyHTTPRequestType for CaseDetailRequest {}

impl HTTPRequestType for CaseDetailRequest {
    type Response = CaseDetailResponse;
    fn endpoint(&self) -> &str { &self.endpoint }
}
