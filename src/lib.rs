#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]

pub mod base_url;
pub mod case_api;
pub mod http_handler;
mod logger;

pub use base_url::{BaseUrlConfig, BaseUrlError, resolve_base_url};
pub use case_api::CaseApi;
pub use http_handler::http_client::HTTPClient;
pub use http_handler::{CaseAttachment, CaseSummary, HTTPError};
