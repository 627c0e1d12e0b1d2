use leptos::prelude::*;

/// Labelled text input; `rows` switches it to a textarea
#[component]
pub fn TextField(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Render a textarea with this many rows
    #[prop(optional)]
    rows: Option<u32>,
    /// ID for the field element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Marks the field as required and shows an asterisk
    #[prop(optional)]
    required: bool,
) -> impl IntoView {
    let field_id = move || id.get().unwrap_or_default();
    let field_placeholder = move || placeholder.get().unwrap_or_default();
    let handle_input = move |ev: leptos::ev::Event| {
        if let Some(handler) = on_input {
            handler.run(event_target_value(&ev));
        }
    };

    let field = match rows {
        Some(rows) => view! {
            <textarea
                id=field_id
                class="form__textarea"
                placeholder=field_placeholder
                required=required
                rows=rows
                prop:value=move || value.get()
                on:input=handle_input
            ></textarea>
        }
        .into_any(),
        None => view! {
            <input
                id=field_id
                class="form__input"
                type="text"
                placeholder=field_placeholder
                required=required
                prop:value=move || value.get()
                on:input=handle_input
            />
        }
        .into_any(),
    };

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=field_id>
                    {l}
                    {required.then(|| view! { <span class="form__required">" *"</span> })}
                </label>
            })}
            {field}
        </div>
    }
}
