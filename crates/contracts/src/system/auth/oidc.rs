use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::pkce::PkcePair;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OidcError {
    #[error("identity provider returned `{error}`: {description}")]
    Provider { error: String, description: String },
    #[error("malformed callback: {0}")]
    InvalidCallback(String),
    #[error("callback carries no authorization code")]
    MissingCode,
    #[error("callback state does not match the pending sign-in")]
    StateMismatch,
    #[error("no sign-in is pending")]
    NoPendingSignIn,
    #[error("token exchange failed: {0}")]
    TokenExchange(String),
    #[error("storage error: {0}")]
    Storage(String),
    #[error("navigation failed: {0}")]
    Navigation(String),
}

fn default_response_type() -> String {
    "code".to_string()
}

fn default_scope() -> String {
    "openid profile email".to_string()
}

/// Identity provider client settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OidcSettings {
    pub authority: String,
    pub client_id: String,
    pub redirect_uri: String,
    pub post_logout_redirect_uri: String,
    #[serde(default = "default_response_type")]
    pub response_type: String,
    #[serde(default = "default_scope")]
    pub scope: String,
    pub authorization_endpoint: String,
    pub token_endpoint: String,
    pub end_session_endpoint: String,
}

impl OidcSettings {
    pub fn authorize_url(&self, state: &str, pkce: &PkcePair) -> String {
        let params = [
            ("response_type", self.response_type.as_str()),
            ("client_id", self.client_id.as_str()),
            ("redirect_uri", self.redirect_uri.as_str()),
            ("scope", self.scope.as_str()),
            ("state", state),
            ("code_challenge", pkce.challenge.as_str()),
            ("code_challenge_method", PkcePair::METHOD),
        ];
        with_query(&self.authorization_endpoint, &params)
    }

    /// Form-encoded body of the authorization code grant
    pub fn token_request_body(&self, code: &str, code_verifier: &str) -> String {
        encode_pairs(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", self.redirect_uri.as_str()),
            ("client_id", self.client_id.as_str()),
            ("code_verifier", code_verifier),
        ])
    }

    pub fn end_session_url(&self, id_token_hint: Option<&str>) -> String {
        let mut params = vec![
            ("client_id", self.client_id.as_str()),
            ("post_logout_redirect_uri", self.post_logout_redirect_uri.as_str()),
        ];
        if let Some(hint) = id_token_hint {
            params.push(("id_token_hint", hint));
        }
        with_query(&self.end_session_endpoint, &params)
    }
}

fn encode_pairs(params: &[(&str, &str)]) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

fn with_query(endpoint: &str, params: &[(&str, &str)]) -> String {
    let sep = if endpoint.contains('?') { '&' } else { '?' };
    format!("{}{}{}", endpoint, sep, encode_pairs(params))
}

/// Sign-in started by this browser, kept until the callback arrives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingSignIn {
    pub state: String,
    pub code_verifier: String,
}

/// Query parameters of the redirect back to `/callback`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

impl CallbackParams {
    /// Checks the callback against the pending sign-in and yields the code
    pub fn authorization_code(&self, pending: Option<&PendingSignIn>) -> Result<String, OidcError> {
        if let Some(error) = &self.error {
            return Err(OidcError::Provider {
                error: error.clone(),
                description: self.error_description.clone().unwrap_or_default(),
            });
        }
        let code = self.code.clone().ok_or(OidcError::MissingCode)?;
        let pending = pending.ok_or(OidcError::NoPendingSignIn)?;
        if self.state.as_deref() != Some(pending.state.as_str()) {
            return Err(OidcError::StateMismatch);
        }
        Ok(code)
    }
}

/// Successful token endpoint response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub id_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub scope: Option<String>,
}

impl TokenResponse {
    pub fn into_user(self, now_secs: i64) -> OidcUser {
        OidcUser {
            access_token: self.access_token,
            id_token: self.id_token,
            refresh_token: self.refresh_token,
            expires_at: self.expires_in.map(|secs| now_secs + secs),
        }
    }
}

/// Signed-in user as persisted in local storage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OidcUser {
    pub access_token: String,
    pub id_token: Option<String>,
    pub refresh_token: Option<String>,
    /// Unix seconds
    pub expires_at: Option<i64>,
}

impl OidcUser {
    pub fn is_expired(&self, now_secs: i64) -> bool {
        matches!(self.expires_at, Some(at) if at <= now_secs)
    }

    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> OidcSettings {
        OidcSettings {
            authority: "https://idp.example.com/realms/beas".into(),
            client_id: "rule-console".into(),
            redirect_uri: "http://localhost:3000/callback".into(),
            post_logout_redirect_uri: "http://localhost:3000/".into(),
            response_type: default_response_type(),
            scope: default_scope(),
            authorization_endpoint: "https://idp.example.com/auth".into(),
            token_endpoint: "https://idp.example.com/token".into(),
            end_session_endpoint: "https://idp.example.com/logout".into(),
        }
    }

    fn pending() -> PendingSignIn {
        PendingSignIn {
            state: "st-1".into(),
            code_verifier: "verifier".into(),
        }
    }

    #[test]
    fn test_authorize_url() {
        let pkce = PkcePair::from_verifier("dBjftJeZ4CVP-mB92K27uhbUJU1p1r_wW1gFWFOEjXk".into());
        let url = settings().authorize_url("st-1", &pkce);
        assert_eq!(
            url,
            "https://idp.example.com/auth?response_type=code&client_id=rule-console\
             &redirect_uri=http%3A%2F%2Flocalhost%3A3000%2Fcallback&scope=openid%20profile%20email\
             &state=st-1&code_challenge=E9Melhoa2OwvFrEMTJguCHaoeK1t8URWbuGJSstw-cM\
             &code_challenge_method=S256"
        );
    }

    #[test]
    fn test_token_request_body() {
        let body = settings().token_request_body("abc", "ver");
        assert_eq!(
            body,
            "grant_type=authorization_code&code=abc\
             &redirect_uri=http%3A%2F%2Flocalhost%3A3000%2Fcallback&client_id=rule-console&code_verifier=ver"
        );
    }

    #[test]
    fn test_end_session_url_with_hint() {
        let url = settings().end_session_url(Some("idt"));
        assert!(url.starts_with("https://idp.example.com/logout?client_id=rule-console"));
        assert!(url.ends_with("&id_token_hint=idt"));
        assert!(!settings().end_session_url(None).contains("id_token_hint"));
    }

    fn callback(code: Option<&str>, state: Option<&str>) -> CallbackParams {
        CallbackParams {
            code: code.map(str::to_string),
            state: state.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_callback_happy_path() {
        let params = callback(Some("xyz/1"), Some("st-1"));
        assert_eq!(params.authorization_code(Some(&pending())), Ok("xyz/1".to_string()));
    }

    #[test]
    fn test_callback_failures() {
        let params = CallbackParams {
            error: Some("access_denied".into()),
            error_description: Some("User cancelled".into()),
            ..Default::default()
        };
        assert_eq!(
            params.authorization_code(Some(&pending())),
            Err(OidcError::Provider {
                error: "access_denied".into(),
                description: "User cancelled".into()
            })
        );
        assert_eq!(
            callback(None, Some("st-1")).authorization_code(Some(&pending())),
            Err(OidcError::MissingCode)
        );
        assert_eq!(
            callback(Some("a"), Some("st-1")).authorization_code(None),
            Err(OidcError::NoPendingSignIn)
        );
        assert_eq!(
            callback(Some("a"), Some("other")).authorization_code(Some(&pending())),
            Err(OidcError::StateMismatch)
        );
    }

    #[test]
    fn test_token_response_expiry() {
        let token: TokenResponse = serde_json::from_str(
            r#"{"access_token":"at","id_token":"it","expires_in":300,"token_type":"Bearer"}"#,
        )
        .unwrap();
        let user = token.into_user(1_000);
        assert_eq!(user.expires_at, Some(1_300));
        assert!(!user.is_expired(1_299));
        assert!(user.is_expired(1_300));
        assert_eq!(user.bearer(), "Bearer at");
    }
}
