//! Modal dialog hosting an entity form.
//!
//! The dialog knows nothing about the entity it edits: a [`DialogBody`]
//! renders the fields for the held entity and consumes the submitted values.
//! Parents drive the dialog through a [`DialogHandle`].

use contracts::shared::form::FormFields;
use leptos::ev::{self, SubmitEvent};
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{FormData, HtmlFormElement};

use crate::shared::modal_frame::ModalFrame;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogOptions {
    pub title: String,
    pub content: String,
    pub submit_button_text: String,
    pub cancel_button_text: String,
}

impl Default for DialogOptions {
    fn default() -> Self {
        Self {
            title: "Generic Dialog".to_string(),
            content: "Generic Dialog Content".to_string(),
            submit_button_text: "Submit".to_string(),
            cancel_button_text: "Cancel".to_string(),
        }
    }
}

impl DialogOptions {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn submit_text(mut self, text: impl Into<String>) -> Self {
        self.submit_button_text = text.into();
        self
    }

    pub fn cancel_text(mut self, text: impl Into<String>) -> Self {
        self.cancel_button_text = text.into();
        self
    }
}

/// Open flag, options and held entity of one dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct DialogState<E> {
    pub open: bool,
    pub options: DialogOptions,
    pub entity: Option<E>,
}

impl<E> Default for DialogState<E> {
    fn default() -> Self {
        Self {
            open: false,
            options: DialogOptions::default(),
            entity: None,
        }
    }
}

impl<E> DialogState<E> {
    /// Replaces options and entity wholesale and opens
    pub fn show(&mut self, options: DialogOptions, entity: Option<E>) {
        self.options = options;
        self.entity = entity;
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.entity = None;
    }
}

/// Form rendering and submission for one kind of dialog.
pub trait DialogBody: Send + Sync + 'static {
    type Entity: Clone + Send + Sync + 'static;

    /// Form controls for the held entity (`None` when creating)
    fn render(&self, entity: Option<Self::Entity>) -> AnyView;

    /// Receives every named control of the submitted form
    fn submit(&self, fields: FormFields);
}

/// Controller returned to the screen that owns the dialog.
pub struct DialogHandle<E: 'static> {
    state: RwSignal<DialogState<E>>,
}

impl<E: 'static> Clone for DialogHandle<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: 'static> Copy for DialogHandle<E> {}

impl<E: Clone + Send + Sync + 'static> DialogHandle<E> {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(DialogState::default()),
        }
    }

    pub fn show(&self, options: DialogOptions, entity: Option<E>) {
        self.state.update(|s| s.show(options, entity));
    }

    pub fn close(&self) {
        self.state.update(|s| s.close());
    }

    pub fn is_open(&self) -> bool {
        self.state.with(|s| s.open)
    }

    pub fn options(&self) -> DialogOptions {
        self.state.with(|s| s.options.clone())
    }

    pub fn entity(&self) -> Option<E> {
        self.state.with(|s| s.entity.clone())
    }

    /// Hands the values to the body, then closes whatever the body made of them
    pub fn submit<B>(&self, body: &B, fields: FormFields)
    where
        B: DialogBody<Entity = E>,
    {
        body.submit(fields);
        self.close();
    }
}

impl<E: Clone + Send + Sync + 'static> Default for DialogHandle<E> {
    fn default() -> Self {
        Self::new()
    }
}

fn collect_form_fields(form: &HtmlFormElement) -> FormFields {
    let mut fields = FormFields::new();
    let Ok(data) = FormData::new_with_form(form) else {
        return fields;
    };
    if let Ok(Some(entries)) = js_sys::try_iter(&data) {
        for entry in entries.flatten() {
            let pair = js_sys::Array::from(&entry);
            if let Some(name) = pair.get(0).as_string() {
                fields.insert(name, pair.get(1).as_string().unwrap_or_default());
            }
        }
    }
    fields
}

#[component]
pub fn GenericDialog<B>(handle: DialogHandle<B::Entity>, body: B) -> impl IntoView
where
    B: DialogBody,
{
    let body = StoredValue::new(body);

    let escape = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && handle.state.with_untracked(|s| s.open) {
            handle.close();
        }
    });
    on_cleanup(move || escape.remove());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let fields = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlFormElement>().ok())
            .map(|form| collect_form_fields(&form))
            .unwrap_or_default();
        body.with_value(|b| handle.submit(b, fields));
    };

    view! {
        <Show when=move || handle.is_open()>
            <ModalFrame on_close=Callback::new(move |_| handle.close()) modal_class="generic-dialog">
                <form class="generic-dialog__form" on:submit=on_submit>
                    <div class="modal-header">
                        <h2 class="modal-title">{move || handle.options().title}</h2>
                    </div>
                    <div class="modal-body">
                        <p class="generic-dialog__content">{move || handle.options().content}</p>
                        {move || body.with_value(|b| b.render(handle.entity()))}
                    </div>
                    <div class="modal-footer">
                        <button
                            type="button"
                            class="button button--secondary"
                            on:click=move |_| handle.close()
                        >
                            {move || handle.options().cancel_button_text}
                        </button>
                        <button type="submit" class="button button--primary">
                            {move || handle.options().submit_button_text}
                        </button>
                    </div>
                </form>
            </ModalFrame>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_default_options() {
        let options = DialogOptions::default();
        assert_eq!(options.title, "Generic Dialog");
        assert_eq!(options.content, "Generic Dialog Content");
        assert_eq!(options.submit_button_text, "Submit");
        assert_eq!(options.cancel_button_text, "Cancel");
    }

    #[test]
    fn test_show_replaces_options_and_entity() {
        let mut state: DialogState<u32> = DialogState::default();
        state.show(DialogOptions::new("Edit Rule").submit_text("Save"), Some(7));
        assert!(state.open);
        assert_eq!(state.entity, Some(7));
        assert_eq!(state.options.content, "Generic Dialog Content");

        state.show(DialogOptions::new("Add Rule"), None);
        assert_eq!(state.entity, None);
        assert_eq!(state.options.submit_button_text, "Submit");
    }

    struct RejectingBody {
        received: Arc<Mutex<Vec<FormFields>>>,
    }

    impl DialogBody for RejectingBody {
        type Entity = String;

        fn render(&self, _entity: Option<String>) -> AnyView {
            ().into_any()
        }

        fn submit(&self, fields: FormFields) {
            self.received.lock().unwrap().push(fields);
        }
    }

    #[test]
    fn test_submit_always_closes() {
        let owner = Owner::new();
        owner.with(|| {
            let received = Arc::new(Mutex::new(Vec::new()));
            let body = RejectingBody {
                received: Arc::clone(&received),
            };
            let handle = DialogHandle::<String>::new();
            handle.show(DialogOptions::new("Edit Rule"), Some("discount".to_string()));
            assert!(handle.is_open());

            let fields: FormFields = [("name", "")].into_iter().collect();
            handle.submit(&body, fields.clone());

            assert!(!handle.is_open());
            assert_eq!(handle.entity(), None);
            assert_eq!(*received.lock().unwrap(), vec![fields]);

            handle.show(DialogOptions::new("Add Rule"), None);
            handle.submit(&body, FormFields::new());
            assert!(!handle.is_open());
            assert_eq!(received.lock().unwrap().len(), 2);
        });
    }

    #[test]
    fn test_close_clears_entity() {
        let mut state = DialogState::default();
        state.show(DialogOptions::default(), Some("rule"));
        state.close();
        assert!(!state.open);
        assert_eq!(state.entity, None);
    }
}
