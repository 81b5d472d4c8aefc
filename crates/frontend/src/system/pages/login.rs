use leptos::prelude::*;

use crate::shared::page_frame::{PageFrame, PAGE_CAT_SYSTEM};
use crate::system::auth::use_auth;

/// Starts the sign-in redirect as soon as it mounts
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let error = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        if let Err(e) = auth.signin_redirect() {
            log::error!("Sign-in redirect failed: {}", e);
            error.set(Some(e.to_string()));
        }
    });

    view! {
        <PageFrame page_id="login--system" category=PAGE_CAT_SYSTEM class="auth-page">
            <div class="auth-page__box">
                <h2>"Logging in..."</h2>
                {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}
            </div>
        </PageFrame>
    }
}
