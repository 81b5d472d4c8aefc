//! OpenID Connect authorization code flow with PKCE.

pub mod oidc;
pub mod pkce;

pub use oidc::*;
pub use pkce::PkcePair;
