use super::request_common::{HTTPRequestType, NoBodyHTTPRequestType};
use crate::http_handler::http_response::case_list::CaseListResponse;

/// Request type for the `/api/cases` endpoint.
#[derive(Debug)]
pub struct CaseListRequest {}

impl NoBodyHTTPRequestType for CaseListRequest {}

impl HTTPRequestType for CaseListRequest {
    type Response = CaseListResponse;
    fn endpoint(&self) -> &'static str { "/api/cases" }
}
