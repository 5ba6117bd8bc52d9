pub mod response_common;

pub mod attachment;
pub mod case_detail;
pub mod case_list;
