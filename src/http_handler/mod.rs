pub use chrono;
pub use reqwest;
pub use serde;

pub mod http_client;
pub mod http_request;
pub mod http_response;
mod http_handler_common;

#[cfg(test)]
mod tests;

pub use http_handler_common::{CaseAttachment, CaseSummary, HTTPError};
