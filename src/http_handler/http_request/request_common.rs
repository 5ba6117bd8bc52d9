use crate::http_handler::HTTPError;
use crate::http_handler::http_client::{FailedRequest, HTTPClient};
use crate::http_handler::http_response::response_common::{HTTPResponseType, ResponseError};
use strum_macros::Display;

#[derive(Debug, Display)]
pub enum RequestError {
    #[strum(to_string = "failed to send request: {0}")]
    FailedToSend(String),
}

impl std::error::Error for RequestError {}

pub(crate) trait HTTPRequestType {
    type Response: HTTPResponseType;

    fn endpoint(&self) -> &str;

    fn header_params(&self) -> reqwest::header::HeaderMap {
        reqwest::header::HeaderMap::default()
    }
}

/// Requests without a request body, sent as plain GETs. Every operation of
/// the case API falls into this category.
pub(crate) trait NoBodyHTTPRequestType: HTTPRequestType {
    /// Issues the request against the client's base URL and parses the
    /// response. Any transport failure or non-2xx response is appended to the
    /// client's failure sink before the error is returned unchanged.
    async fn send_request(
        &self,
        client: &HTTPClient,
    ) -> Result<<Self::Response as HTTPResponseType>::ParsedResponseType, HTTPError> {
        let url = format!("{}{}", client.url(), self.endpoint());
        let response = match client
            .client()
            .get(&url)
            .headers(self.header_params())
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                client
                    .record_failure(FailedRequest::new(self.endpoint(), None, err.to_string()))
                    .await;
                return Err(HTTPError::HTTPRequestError(RequestError::FailedToSend(
                    err.to_string(),
                )));
            }
        };
        match Self::Response::read_response(response).await {
            Ok(parsed) => Ok(parsed),
            Err(err) => {
                client.record_failure(failed_request_from(self.endpoint(), &err)).await;
                Err(HTTPError::HTTPResponseError(err))
            }
        }
    }
}

fn failed_request_from(endpoint: &str, err: &ResponseError) -> FailedRequest {
    match err {
        ResponseError::InternalServer { status, body } => {
            FailedRequest::new(endpoint, Some(*status), body)
        }
        ResponseError::BadRequest(ret) => {
            FailedRequest::new(endpoint, Some(reqwest::StatusCode::BAD_REQUEST), ret.detail())
        }
        ResponseError::NotFound(detail) => {
            FailedRequest::new(endpoint, Some(reqwest::StatusCode::NOT_FOUND), detail)
        }
        other => FailedRequest::new(endpoint, None, other.to_string()),
    }
}
