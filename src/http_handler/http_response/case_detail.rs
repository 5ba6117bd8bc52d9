use crate::http_handler::CaseAttachment;
use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

/// Full payload of a single case, including the model output rendered by the
/// frontend and the ordered attachment descriptors.
#[derive(serde::Deserialize, Debug)]
pub struct CaseDetailResponse {
    case_id: String,
    company: String,
    email_body: String,
    llm_output: String,
    attachments: Vec<CaseAttachment>,
}

impl SerdeJSONBodyHTTPResponseType for CaseDetailResponse {}

impl CaseDetailResponse {
    pub fn case_id(&self) -> &str { &self.case_id }
    pub fn company(&self) -> &str { &self.company }
    pub fn email_body(&self) -> &str { &self.email_body }
    pub fn llm_output(&self) -> &str { &self.llm_output }
    pub fn attachments(&self) -> &[CaseAttachment] { &self.attachments }
}
