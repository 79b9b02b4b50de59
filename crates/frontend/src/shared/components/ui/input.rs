use leptos::prelude::*;

/// Input component with label support
#[component]
pub fn Input(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Keydown event handler (used for Enter-to-submit)
    #[prop(optional)]
    on_keydown: Option<Callback<leptos::ev::KeyboardEvent>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label">{l}</label>
            })}
            <input
                type="text"
                class=move || format!("form__input {}", additional_class())
                prop:value=move || value.get()
                placeholder=input_placeholder
                disabled=move || disabled.get().unwrap_or(false)
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
                on:keydown=move |ev| {
                    if let Some(handler) = on_keydown {
                        handler.run(ev);
                    }
                }
            />
        </div>
    }
}
