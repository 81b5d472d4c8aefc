//! Transient toasts in the top right corner.

use contracts::shared::notification::Notification;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const DISMISS_AFTER_MS: u32 = 3000;

#[derive(Clone, Debug, PartialEq)]
struct Toast {
    id: u64,
    notification: Notification,
}

/// Handle for showing toasts, provided through context.
#[derive(Clone, Copy)]
pub struct Notifier {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn notify(&self, notification: Notification) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.toasts.update(|t| t.push(Toast { id, notification }));

        let notifier = *self;
        spawn_local(async move {
            TimeoutFuture::new(DISMISS_AFTER_MS).await;
            notifier.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.try_update(|t| t.retain(|toast| toast.id != id));
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access the notifier
pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().expect("Notifier not found in component tree")
}

#[component]
pub fn NotificationHost() -> impl IntoView {
    let notifier = use_notifier();

    view! {
        <div class="toast-host">
            <For
                each=move || notifier.toasts.get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    let n = toast.notification;
                    let class = format!("toast toast--{}", n.severity.color());
                    view! {
                        <div class=class role="status">
                            <span class="toast__icon">{n.severity.icon()}</span>
                            <div class="toast__body">
                                <div class="toast__title">{n.title}</div>
                                <div class="toast__content">{n.content}</div>
                                {n.reason.map(|reason| view! { <div class="toast__reason">{reason}</div> })}
                                {n.info.map(|info| view! { <div class="toast__info">{info}</div> })}
                            </div>
                            <button class="toast__close" on:click=move |_| notifier.dismiss(id)>"×"</button>
                        </div>
                    }
                }
            />
        </div>
    }
}
