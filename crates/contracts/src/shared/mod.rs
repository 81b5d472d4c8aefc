pub mod api_error;
pub mod form;
pub mod notification;
pub mod paging;
pub mod request_tracking;
pub mod search;
