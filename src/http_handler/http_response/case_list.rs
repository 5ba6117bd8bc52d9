use crate::http_handler::CaseSummary;
use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

/// Response body of the case list endpoint, `{"cases": [...]}`.
#[derive(serde::Deserialize, Debug)]
pub struct CaseListResponse {
    cases: Vec<CaseSummary>,
}

impl SerdeJSONBodyHTTPResponseType for CaseListResponse {}

impl CaseListResponse {
    pub fn cases(&self) -> &[CaseSummary] { &self.cases }
    pub fn into_cases(self) -> Vec<CaseSummary> { self.cases }
}
