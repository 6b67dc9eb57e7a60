use contracts::enums::LookupOption;
use leptos::prelude::*;

/// Select control backed by a lookup option list.
///
/// Always renders a placeholder entry first; while `loading` is true the
/// placeholder reads "Loading..." and the control is disabled. With an empty
/// option list (e.g. the lookup fetch failed) the control stays usable but
/// offers nothing besides the placeholder.
#[component]
pub fn LookupSelect(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Currently selected option id
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler (receives the selected option id)
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Lookup options
    #[prop(into)]
    options: Signal<Vec<LookupOption>>,
    /// True while the lookup fetch is pending
    #[prop(into)]
    loading: Signal<bool>,
    /// Required attribute
    #[prop(optional)]
    required: bool,
    /// ID for the select element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();
    let placeholder = move || {
        if loading.get() {
            "Loading...".to_string()
        } else {
            "-- select --".to_string()
        }
    };

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=select_id>
                    {l}
                </label>
            })}
            <select
                id=select_id
                class="form__select"
                disabled=move || loading.get()
                required=required
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                <option value="" selected=move || value.get().is_empty()>
                    {placeholder}
                </option>
                <For
                    each=move || options.get()
                    key=|opt| opt.id.clone()
                    children=move |opt: LookupOption| {
                        let option_id = opt.id.clone();
                        let is_selected = move || value.get() == option_id;
                        view! {
                            <option value=opt.id.clone() selected=is_selected>
                                {opt.name.clone()}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}
