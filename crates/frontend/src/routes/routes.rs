use crate::domain::a001_rule_library::ui::list::RuleLibraryList;
use crate::domain::a002_function_library::ui::list::FunctionLibraryList;
use crate::domain::a003_rule_helper::ui::list::RuleHelperList;
use crate::layout::Shell;
use crate::system::pages::callback::CallbackPage;
use crate::system::pages::login::LoginPage;
use crate::system::pages::logout::LogoutPage;
use crate::system::pages::settings::SettingsPage;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

/// Unknown paths land on the rules screen
pub const FALLBACK_PATH: &str = "/rules";

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <Redirect path=FALLBACK_PATH /> }>
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/logout") view=LogoutPage />
                <Route path=path!("/callback") view=CallbackPage />
                <Route path=path!("/rules") view=|| view! { <Shell><RuleLibraryList /></Shell> } />
                <Route path=path!("/functions") view=|| view! { <Shell><FunctionLibraryList /></Shell> } />
                <Route path=path!("/helpers") view=|| view! { <Shell><RuleHelperList /></Shell> } />
                <Route path=path!("/settings") view=|| view! { <Shell><SettingsPage /></Shell> } />
            </Routes>
        </Router>
    }
}
