use strum_macros::Display;

pub(crate) trait JSONBodyHTTPResponseType: HTTPResponseType {
    async fn parse_json_body(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError>
    where Self::ParsedResponseType: for<'de> serde::Deserialize<'de> {
        Ok(response.json::<Self::ParsedResponseType>().await?)
    }
}

/// Marker trait for responses whose parsed type is their own serde shape.
pub(crate) trait SerdeJSONBodyHTTPResponseType {}

impl<T> JSONBodyHTTPResponseType for T
where
    T: SerdeJSONBodyHTTPResponseType,
    for<'de> T: serde::Deserialize<'de>,
{
}

impl<T> HTTPResponseType for T
where
    T: SerdeJSONBodyHTTPResponseType,
    for<'de> T: serde::Deserialize<'de>,
{
    type ParsedResponseType = T;

    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError> {
        let resp = Self::unwrap_return_code(response).await?;
        Self::parse_json_body(resp).await
    }
}

pub(crate) trait ByteStreamResponseType: HTTPResponseType {}

pub(crate) trait HTTPResponseType {
    type ParsedResponseType;

    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError>;

    async fn unwrap_return_code(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ResponseError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else if status == reqwest::StatusCode::NOT_FOUND {
            let ret = ErrorReturn::from_body(response).await;
            Err(ResponseError::NotFound(ret.into_detail()))
        } else if status.is_client_error() {
            Err(ResponseError::BadRequest(ErrorReturn::from_body(response).await))
        } else if status.is_server_error() {
            let body = response.text().await.unwrap_or_default();
            Err(ResponseError::InternalServer { status, body })
        } else {
            Err(ResponseError::Unknown)
        }
    }
}

/// Error body shape of the backend, `{"detail": "..."}`. Responses that carry
/// a non-JSON body are kept verbatim in `detail`.
#[derive(Debug, serde::Deserialize)]
pub struct ErrorReturn {
    detail: String,
}

impl ErrorReturn {
    async fn from_body(response: reqwest::Response) -> Self {
        let raw = response.text().await.unwrap_or_default();
        serde_json::from_str(&raw).unwrap_or(Self { detail: raw })
    }

    pub fn detail(&self) -> &str { &self.detail }
    pub fn into_detail(self) -> String { self.detail }
}

#[derive(Debug, Display)]
pub enum ResponseError {
    #[strum(to_string = "internal server error ({status})")]
    InternalServer { status: reqwest::StatusCode, body: String },
    #[strum(to_string = "bad request")]
    BadRequest(ErrorReturn),
    #[strum(to_string = "not found: {0}")]
    NotFound(String),
    #[strum(to_string = "no connection to backend")]
    NoConnection,
    #[strum(to_string = "unknown response error")]
    Unknown,
}

impl std::error::Error for ResponseError {}

impl From<reqwest::Error> for ResponseError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_connect() {
            ResponseError::NoConnection
        } else if value.is_timeout() || value.is_redirect() {
            ResponseError::InternalServer {
                status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                body: value.to_string(),
            }
        } else {
            ResponseError::Unknown
        }
    }
}
