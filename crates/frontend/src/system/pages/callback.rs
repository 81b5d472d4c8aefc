use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::shared::page_frame::{PageFrame, PAGE_CAT_SYSTEM};
use crate::system::auth::use_auth;

/// Landing page of the identity provider redirect.
///
/// Exchanges the authorization code, then continues to the rules screen.
/// Any failure ends the session via `/logout`.
#[component]
pub fn CallbackPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    Effect::new(move |_| {
        let search = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let navigate = navigate.clone();
        spawn_local(async move {
            match auth.signin_callback(&search).await {
                Ok(_) => {
                    log::info!("Signed in");
                    navigate("/rules", Default::default());
                }
                Err(e) => {
                    log::error!("Sign-in callback failed: {}", e);
                    navigate("/logout", Default::default());
                }
            }
        });
    });

    view! {
        <PageFrame page_id="callback--system" category=PAGE_CAT_SYSTEM class="auth-page">
            <div class="auth-page__box">
                <h2>"Signing in..."</h2>
            </div>
        </PageFrame>
    }
}
