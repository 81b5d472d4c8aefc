use leptos::prelude::*;

use crate::shared::page_frame::{PageFrame, PAGE_CAT_SYSTEM};
use crate::system::auth::use_auth;

#[component]
pub fn LogoutPage() -> impl IntoView {
    let auth = use_auth();

    Effect::new(move |_| {
        if let Err(e) = auth.signout_redirect() {
            log::error!("Sign-out redirect failed: {}", e);
        }
    });

    view! {
        <PageFrame page_id="logout--system" category=PAGE_CAT_SYSTEM class="auth-page">
            <div class="auth-page__box">
                <h2>"Logging out..."</h2>
            </div>
        </PageFrame>
    }
}
