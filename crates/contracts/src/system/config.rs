//! Runtime configuration handed to the console by its host (`/config.json`).

use serde::{Deserialize, Serialize};

use super::auth::OidcSettings;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Base URL of the rule engine service, without a trailing slash
    pub api_base_path: String,
    /// External API documentation page embedded on the settings page
    #[serde(default)]
    pub api_docs_url: Option<String>,
    pub oidc: OidcSettings,
}

impl ConsoleConfig {
    /// Absolute URL of a service path such as `/rule-library/read`
    pub fn api_url(&self, path: &str) -> String {
        let base = self.api_base_path.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{}{}", base, path)
        } else {
            format!("{}/{}", base, path)
        }
    }

    /// Docs URL, ignoring a blank entry
    pub fn api_docs(&self) -> Option<&str> {
        self.api_docs_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base: &str) -> ConsoleConfig {
        ConsoleConfig {
            api_base_path: base.to_string(),
            api_docs_url: Some("  ".to_string()),
            oidc: OidcSettings::default(),
        }
    }

    #[test]
    fn test_api_url_joins_single_slash() {
        assert_eq!(
            config("http://localhost:8080/").api_url("/rule-helper/read"),
            "http://localhost:8080/rule-helper/read"
        );
        assert_eq!(
            config("http://localhost:8080").api_url("rule-engine/sync"),
            "http://localhost:8080/rule-engine/sync"
        );
    }

    #[test]
    fn test_blank_docs_url_is_none() {
        assert_eq!(config("x").api_docs(), None);
    }

    #[test]
    fn test_json_shape() {
        let json = r#"{
            "api_base_path": "http://engine:8080",
            "oidc": {
                "authority": "http://idp/realms/beas",
                "client_id": "console",
                "redirect_uri": "http://localhost:3000/callback",
                "post_logout_redirect_uri": "http://localhost:3000/",
                "authorization_endpoint": "http://idp/auth",
                "token_endpoint": "http://idp/token",
                "end_session_endpoint": "http://idp/logout"
            }
        }"#;
        let cfg: ConsoleConfig = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.api_docs_url, None);
        assert_eq!(cfg.oidc.response_type, "code");
        assert_eq!(cfg.oidc.scope, "openid profile email");
    }
}
