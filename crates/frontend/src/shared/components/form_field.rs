use leptos::prelude::*;

/// Labeled single-line input; `readonly` controls are still submitted
#[component]
pub fn FormInput(
    label: &'static str,
    name: &'static str,
    #[prop(optional, into)]
    value: String,
    #[prop(optional)]
    readonly: bool,
    #[prop(optional)]
    required: bool,
    #[prop(optional)]
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label" for=name>{label}</label>
            <input
                class="form__input"
                id=name
                name=name
                type="text"
                value=value
                readonly=readonly
                required=required
                placeholder=placeholder
            />
        </div>
    }
}

/// Labeled multi-line input used for MVL code
#[component]
pub fn FormTextArea(
    label: &'static str,
    name: &'static str,
    #[prop(optional, into)]
    value: String,
    #[prop(optional)]
    readonly: bool,
    #[prop(default = 8)]
    rows: u32,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label" for=name>{label}</label>
            <textarea
                class="form__textarea form__textarea--code"
                id=name
                name=name
                rows=rows
                readonly=readonly
                spellcheck="false"
                prop:value=value
            ></textarea>
        </div>
    }
}
