use contracts::system::config::ConsoleConfig;
use gloo_net::http::Request;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::Spinner;

use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::api_utils::{ApiClient, ErrorChannel, LoadingTracker};
use crate::shared::notification::Notifier;
use crate::shared::theme::ThemeProvider;
use crate::system::auth::AuthService;

const CONFIG_PATH: &str = "/config.json";

async fn load_config() -> Result<ConsoleConfig, String> {
    let response = Request::get(CONFIG_PATH)
        .send()
        .await
        .map_err(|e| format!("Failed to fetch {}: {}", CONFIG_PATH, e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch {}: {}", CONFIG_PATH, response.status()));
    }

    response
        .json::<ConsoleConfig>()
        .await
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_PATH, e))
}

/// Builds the application context once the configuration is known.
#[component]
fn Console(config: ConsoleConfig) -> impl IntoView {
    let auth = AuthService::new(config.oidc.clone());
    let loading = LoadingTracker::new();
    let errors = ErrorChannel::new();
    let notifier = Notifier::new();

    errors.register(Callback::new(move |notification| notifier.notify(notification)));

    provide_context(auth);
    provide_context(notifier);
    provide_context(AppGlobalContext::new(loading));
    provide_context(ApiClient::new(config, auth, loading, errors));

    view! { <AppRoutes /> }
}

#[component]
pub fn App() -> impl IntoView {
    let config = RwSignal::new(None::<Result<ConsoleConfig, String>>);

    spawn_local(async move {
        let result = load_config().await;
        if let Err(e) = &result {
            log::error!("{}", e);
        }
        config.set(Some(result));
    });

    view! {
        <ThemeProvider>
            {move || match config.get() {
                None => view! {
                    <div class="app-loading"><Spinner /></div>
                }.into_any(),
                Some(Err(e)) => view! {
                    <div class="app-loading error-message">{e}</div>
                }.into_any(),
                Some(Ok(config)) => view! { <Console config=config /> }.into_any(),
            }}
        </ThemeProvider>
    }
}
