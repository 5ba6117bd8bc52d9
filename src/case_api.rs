use crate::http_handler::http_client::HTTPClient;
use crate::http_handler::http_request::{
    attachment_get::AttachmentRequest, case_detail_get::CaseDetailRequest,
    case_list_get::CaseListRequest, request_common::{NoBodyHTTPRequestType, RequestError},
};
use crate::http_handler::http_response::case_detail::CaseDetailResponse;
use crate::http_handler::{CaseSummary, HTTPError};
use futures::StreamExt;
use std::sync::Arc;

/// Typed facade over the case review API.
///
/// Holds a shared [`HTTPClient`] and exposes one method per backend
/// operation. All operations are read-only; no caching, pagination or input
/// validation is performed. Failures are recorded in the client's failure
/// sink and propagated unchanged.
pub struct CaseApi {
    request_client: Arc<HTTPClient>,
}

impl CaseApi {
    #[must_use]
    pub fn new(request_client: Arc<HTTPClient>) -> Self { Self { request_client } }

    /// Provides a cloned reference to the underlying HTTP client.
    #[must_use]
    pub fn client(&self) -> Arc<HTTPClient> { Arc::clone(&self.request_client) }

    /// Fetches all case summaries, in backend order.
    pub async fn list_cases(&self) -> Result<Vec<CaseSummary>, HTTPError> {
        let response = CaseListRequest {}.send_request(&self.request_client).await?;
        Ok(response.into_cases())
    }

    /// Fetches the full payload of a single case.
    pub async fn get_case(&self, case_id: &str) -> Result<CaseDetailResponse, HTTPError> {
        CaseDetailRequest::new(case_id).send_request(&self.request_client).await
    }

    /// Downloads a case attachment and collects the byte stream into memory.
    pub async fn download_attachment(
        &self,
        case_id: &str,
        doc_type: &str,
    ) -> Result<Vec<u8>, HTTPError> {
        let response_stream =
            AttachmentRequest::new(case_id, doc_type).send_request(&self.request_client).await?;

        let mut collected: Vec<u8> = Vec::new();
        futures::pin_mut!(response_stream);

        while let Some(chunk_result) = response_stream.next().await {
            let chunk = chunk_result.map_err(|err| {
                HTTPError::HTTPRequestError(RequestError::FailedToSend(err.to_string()))
            })?;
            collected.extend_from_slice(&chunk[..]);
        }

        Ok(collected)
    }
}
