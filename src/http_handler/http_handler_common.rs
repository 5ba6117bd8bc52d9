use super::http_request::request_common::RequestError;
use super::http_response::response_common::ResponseError;
use strum_macros::Display;

/// Summary row for a single case, as returned by the case list endpoint.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone)]
pub struct CaseSummary {
    case_id: String,
    company: String,
    email_excerpt: String,
    attachments: u32,
}

impl CaseSummary {
    pub fn case_id(&self) -> &str { &self.case_id }
    pub fn company(&self) -> &str { &self.company }
    pub fn email_excerpt(&self) -> &str { &self.email_excerpt }
    pub fn attachments(&self) -> u32 { self.attachments }
}

/// Descriptor of a file attached to a case. The wire field `type` carries the
/// backend document type key used in the download path.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone)]
pub struct CaseAttachment {
    #[serde(rename = "type")]
    kind: String,
    label: String,
    filename: String,
    download_url: String,
}

impl CaseAttachment {
    pub fn kind(&self) -> &str { &self.kind }
    pub fn label(&self) -> &str { &self.label }
    pub fn filename(&self) -> &str { &self.filename }
    pub fn download_url(&self) -> &str { &self.download_url }
}

#[derive(Debug, Display)]
pub enum HTTPError {
    #[strum(to_string = "{0}")]
    HTTPRequestError(RequestError),
    #[strum(to_string = "{0}")]
    HTTPResponseError(ResponseError),
}

impl std::error::Error for HTTPError {}
