//! Browser side of the OIDC code flow.

use contracts::system::auth::{
    CallbackParams, OidcError, OidcSettings, OidcUser, PendingSignIn, PkcePair, TokenResponse,
};
use gloo_net::http::Request;
use leptos::prelude::*;
use uuid::Uuid;

use super::storage;

/// Signed-in user and the provider settings, shared through context.
#[derive(Clone, Copy)]
pub struct AuthService {
    settings: StoredValue<OidcSettings>,
    user: RwSignal<Option<OidcUser>>,
}

fn now_secs() -> i64 {
    chrono::Utc::now().timestamp()
}

fn navigate_external(url: &str) -> Result<(), OidcError> {
    let window = web_sys::window().ok_or_else(|| OidcError::Navigation("no window".into()))?;
    window
        .location()
        .set_href(url)
        .map_err(|_| OidcError::Navigation(url.to_string()))
}

impl AuthService {
    /// Restores a previously stored user
    pub fn new(settings: OidcSettings) -> Self {
        Self {
            settings: StoredValue::new(settings),
            user: RwSignal::new(storage::load_user()),
        }
    }

    /// Current user, unless the access token has expired
    pub fn get_user(&self) -> Option<OidcUser> {
        self.user
            .get_untracked()
            .filter(|user| !user.is_expired(now_secs()))
    }

    /// Reactive signed-in flag for the header
    pub fn is_signed_in(&self) -> bool {
        self.user.with(|user| user.is_some())
    }

    /// Stores a pending sign-in and leaves for the provider's authorize page
    pub fn signin_redirect(&self) -> Result<(), OidcError> {
        let mut entropy = Vec::with_capacity(32);
        entropy.extend_from_slice(Uuid::new_v4().as_bytes());
        entropy.extend_from_slice(Uuid::new_v4().as_bytes());
        let pkce = PkcePair::from_entropy(&entropy);
        let state = Uuid::new_v4().simple().to_string();

        storage::save_pending(&PendingSignIn {
            state: state.clone(),
            code_verifier: pkce.verifier.clone(),
        })?;

        let url = self.settings.with_value(|s| s.authorize_url(&state, &pkce));
        log::info!("Redirecting to identity provider");
        navigate_external(&url)
    }

    /// Completes the code flow from the `/callback` query string
    pub async fn signin_callback(&self, search: &str) -> Result<OidcUser, OidcError> {
        let params: CallbackParams = serde_qs::from_str(search.trim_start_matches('?'))
            .map_err(|e| OidcError::InvalidCallback(e.to_string()))?;
        let pending = storage::take_pending();
        let code = params.authorization_code(pending.as_ref())?;
        let verifier = pending
            .map(|p| p.code_verifier)
            .ok_or(OidcError::NoPendingSignIn)?;

        let (endpoint, body) = self
            .settings
            .with_value(|s| (s.token_endpoint.clone(), s.token_request_body(&code, &verifier)));

        let response = Request::post(&endpoint)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .map_err(|e| OidcError::TokenExchange(e.to_string()))?
            .send()
            .await
            .map_err(|e| OidcError::TokenExchange(e.to_string()))?;

        if !response.ok() {
            return Err(OidcError::TokenExchange(format!(
                "{} {}",
                response.status(),
                response.status_text()
            )));
        }

        let token = response
            .json::<TokenResponse>()
            .await
            .map_err(|e| OidcError::TokenExchange(e.to_string()))?;
        let user = token.into_user(now_secs());
        storage::save_user(&user)?;
        self.user.set(Some(user.clone()));
        Ok(user)
    }

    /// Forgets the user and leaves for the provider's end-session page
    pub fn signout_redirect(&self) -> Result<(), OidcError> {
        let hint = self
            .user
            .get_untracked()
            .and_then(|user| user.id_token);
        storage::clear_user();
        self.user.set(None);

        let url = self
            .settings
            .with_value(|s| s.end_session_url(hint.as_deref()));
        navigate_external(&url)
    }
}

/// Hook to access the auth service
pub fn use_auth() -> AuthService {
    use_context::<AuthService>().expect("AuthService not found in component tree")
}
