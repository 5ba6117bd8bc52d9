pub mod attachment_get;
pub mod case_detail_get;
pub mod case_list_get;
pub mod request_common;
