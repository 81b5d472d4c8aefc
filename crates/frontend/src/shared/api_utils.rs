//! Authenticated access to the rule engine service.
//!
//! Every call goes through [`ApiClient`], which attaches the bearer token,
//! keeps the global loading counter balanced and reports failures. A 401
//! sends the user to the identity provider; every other failure is pushed to
//! the [`ErrorChannel`] exactly once and returned to the caller.

use contracts::shared::api_error::{ApiFailure, ErrorResponse};
use contracts::shared::notification::Notification;
use contracts::shared::request_tracking::LoadingCounter;
use contracts::system::config::ConsoleConfig;
use gloo_net::http::{Request, RequestBuilder, Response};
use leptos::prelude::*;
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;

use crate::system::auth::AuthService;

/// Reference-counted busy flag behind the loading overlay.
#[derive(Clone, Copy)]
pub struct LoadingTracker {
    counter: RwSignal<LoadingCounter>,
}

impl LoadingTracker {
    pub fn new() -> Self {
        Self {
            counter: RwSignal::new(LoadingCounter::default()),
        }
    }

    /// Marks one request as started; dropping the guard marks it finished
    pub fn begin(&self) -> LoadingGuard {
        self.counter.update(|c| c.begin());
        LoadingGuard {
            counter: self.counter,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.counter.with(|c| c.is_loading())
    }
}

impl Default for LoadingTracker {
    fn default() -> Self {
        Self::new()
    }
}

pub struct LoadingGuard {
    counter: RwSignal<LoadingCounter>,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        // the owner may already be disposed when a late response lands
        self.counter.try_update(|c| c.end());
    }
}

/// Single subscriber for API failure notifications; the last registration wins.
#[derive(Clone, Copy)]
pub struct ErrorChannel {
    handler: StoredValue<Option<Callback<Notification>>>,
}

impl ErrorChannel {
    pub fn new() -> Self {
        Self {
            handler: StoredValue::new(None),
        }
    }

    pub fn register(&self, handler: Callback<Notification>) {
        self.handler.set_value(Some(handler));
    }

    pub fn emit(&self, notification: Notification) {
        match self.handler.get_value() {
            Some(handler) => handler.run(notification),
            None => log::warn!("No error handler registered: {}", notification.content),
        }
    }
}

impl Default for ErrorChannel {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy, Debug)]
enum Verb {
    Get,
    Post,
    Patch,
    Delete,
}

impl Verb {
    fn builder(self, url: &str) -> RequestBuilder {
        match self {
            Verb::Get => Request::get(url),
            Verb::Post => Request::post(url),
            Verb::Patch => Request::patch(url),
            Verb::Delete => Request::delete(url),
        }
    }
}

/// REST client bound to the console configuration and application context.
#[derive(Clone, Copy)]
pub struct ApiClient {
    config: StoredValue<ConsoleConfig>,
    auth: AuthService,
    loading: LoadingTracker,
    errors: ErrorChannel,
}

impl ApiClient {
    pub fn new(
        config: ConsoleConfig,
        auth: AuthService,
        loading: LoadingTracker,
        errors: ErrorChannel,
    ) -> Self {
        Self {
            config: StoredValue::new(config),
            auth,
            loading,
            errors,
        }
    }

    pub fn config(&self) -> ConsoleConfig {
        self.config.get_value()
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiFailure> {
        self.execute(Verb::Get, path, None).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiFailure> {
        let body = encode(body)?;
        self.execute(Verb::Post, path, Some(body)).await
    }

    pub async fn patch<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiFailure> {
        let body = encode(body)?;
        self.execute(Verb::Patch, path, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiFailure> {
        self.execute::<IgnoredAny>(Verb::Delete, path, None)
            .await
            .map(|_| ())
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        verb: Verb,
        path: &str,
        body: Option<String>,
    ) -> Result<T, ApiFailure> {
        let _guard = self.loading.begin();
        let url = self.config.with_value(|c| c.api_url(path));
        log::debug!("{:?} {}", verb, url);

        let result = self.send(verb, &url, body).await;
        if let Err(failure) = &result {
            self.report(failure);
        }
        result
    }

    async fn send<T: DeserializeOwned>(
        &self,
        verb: Verb,
        url: &str,
        body: Option<String>,
    ) -> Result<T, ApiFailure> {
        let mut builder = verb
            .builder(url)
            .header("Content-Type", "application/json");
        if let Some(user) = self.auth.get_user() {
            builder = builder.header("Authorization", &user.bearer());
        }

        let request = match body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| ApiFailure::RequestSetup(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| ApiFailure::Network(e.to_string()))?;

        read_json(response).await
    }

    fn report(&self, failure: &ApiFailure) {
        if failure.is_unauthorized() {
            log::warn!("Session rejected by the service, signing in again");
            if let Err(e) = self.auth.signin_redirect() {
                log::error!("Sign-in redirect failed: {}", e);
            }
            return;
        }
        log::error!("API request failed: {}", failure);
        if let Some(notification) = failure.to_notification() {
            self.errors.emit(notification);
        }
    }
}

fn encode<B: Serialize>(body: &B) -> Result<String, ApiFailure> {
    serde_json::to_string(body).map_err(|e| ApiFailure::RequestSetup(e.to_string()))
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiFailure> {
    let body = response.text().await.map_err(|e| e.to_string());
    decode_body(response.ok(), response.status(), response.status_text(), body)
}

/// An error status wins over a failed body read; on success the read
/// failure is a network failure and an empty body decodes as `null`.
fn decode_body<T: DeserializeOwned>(
    ok: bool,
    status: u16,
    status_text: String,
    body: Result<String, String>,
) -> Result<T, ApiFailure> {
    if !ok {
        let text = body.unwrap_or_default();
        let error = ErrorResponse::from_parts(status, status_text, &text);
        return Err(ApiFailure::from_response(error));
    }
    let text = body.map_err(ApiFailure::Network)?;
    let json = if text.trim().is_empty() { "null" } else { text.as_str() };
    serde_json::from_str(json).map_err(|e| ApiFailure::Decode(e.to_string()))
}

/// Hook to access the API client
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().expect("ApiClient not found in component tree")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_failed_read_on_success_is_network_failure() {
        let result = decode_body::<Value>(true, 200, "OK".into(), Err("stream aborted".into()));
        assert_eq!(result, Err(ApiFailure::Network("stream aborted".into())));
    }

    #[test]
    fn test_failed_read_on_error_status_keeps_status() {
        let result = decode_body::<Value>(
            false,
            500,
            "Internal Server Error".into(),
            Err("stream aborted".into()),
        );
        assert!(matches!(result, Err(ApiFailure::Server(ref e)) if e.status == 500));
    }

    #[test]
    fn test_empty_success_body_decodes_as_null() {
        let result = decode_body::<IgnoredAny>(true, 204, "No Content".into(), Ok(String::new()));
        assert!(result.is_ok());
        let value = decode_body::<Value>(true, 200, "OK".into(), Ok("{\"a\":1}".into()));
        assert_eq!(value, Ok(serde_json::json!({"a": 1})));
    }
}
