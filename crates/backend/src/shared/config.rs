use contracts::system::config::ConsoleConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub console: ConsoleConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory with the built console bundle (index.html, wasm, css)
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

fn default_port() -> u16 {
    3000
}

fn default_static_dir() -> String {
    "dist".to_string()
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000
static_dir = "dist"

[console]
api_base_path = "http://localhost:8080/api"

[console.oidc]
authority = "http://localhost:8180/realms/rules"
client_id = "rule-console"
redirect_uri = "http://localhost:3000/callback"
post_logout_redirect_uri = "http://localhost:3000/login"
authorization_endpoint = "http://localhost:8180/realms/rules/protocol/openid-connect/auth"
token_endpoint = "http://localhost:8180/realms/rules/protocol/openid-connect/token"
end_session_endpoint = "http://localhost:8180/realms/rules/protocol/openid-connect/logout"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    if config.console.api_base_path.trim().is_empty() {
        anyhow::bail!("console.api_base_path must not be empty");
    }
    Ok(config)
}

/// Resolves the bundle directory; relative paths are taken from the executable directory
pub fn get_static_dir(config: &Config) -> PathBuf {
    let dir = Path::new(&config.server.static_dir);

    if dir.is_absolute() {
        return dir.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let resolved = exe_dir.join(dir);
            if resolved.exists() {
                return resolved;
            }
        }
    }

    PathBuf::from(&config.server.static_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.static_dir, "dist");
        assert_eq!(config.console.api_base_path, "http://localhost:8080/api");
        assert_eq!(config.console.oidc.client_id, "rule-console");
        assert_eq!(config.console.oidc.response_type, "code");
        assert_eq!(config.console.api_docs(), None);
    }

    #[test]
    fn test_server_section_is_optional() {
        let config = parse_config(
            r#"
[console]
api_base_path = "https://rules.example.com"
api_docs_url = "https://rules.example.com/docs"

[console.oidc]
authority = "a"
client_id = "c"
redirect_uri = "r"
post_logout_redirect_uri = "p"
authorization_endpoint = "ae"
token_endpoint = "te"
end_session_endpoint = "ee"
"#,
        )
        .unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(
            config.console.api_docs(),
            Some("https://rules.example.com/docs")
        );
    }

    #[test]
    fn test_blank_api_base_path_is_rejected() {
        let broken = DEFAULT_CONFIG.replace("http://localhost:8080/api", " ");
        assert!(parse_config(&broken).is_err());
    }

    #[test]
    fn test_absolute_static_dir_is_kept() {
        let mut config = parse_config(DEFAULT_CONFIG).unwrap();
        let absolute = std::env::temp_dir().join("console-dist");
        config.server.static_dir = absolute.display().to_string();
        assert_eq!(get_static_dir(&config), absolute);
    }
}
