use crate::http_handler::http_response::response_common::{
    ByteStreamResponseType, HTTPResponseType, ResponseError,
};

/// Streamed body of an attachment download.
pub struct AttachmentResponse {}

impl ByteStreamResponseType for AttachmentResponse {}

impl HTTPResponseType for AttachmentResponse {
    type ParsedResponseType =
        std::pin::Pin<Box<dyn futures_core::Stream<Item = reqwest::Result<bytes::Bytes>> + Send>>;

    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError> {
        let resp = Self::unwrap_return_code(response).await?;
        Ok(Box::pin(resp.bytes_stream()))
    }
}
