pub mod service;
pub mod storage;

pub use service::{use_auth, AuthService};
