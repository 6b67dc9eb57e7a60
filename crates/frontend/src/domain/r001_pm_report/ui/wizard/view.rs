use super::core::{StepFormCore, WizardCore};
use super::view_model::WizardViewModel;
use crate::shared::components::ui::{Button, Input, LookupSelect, Textarea};
use crate::shared::lookups::load_lookup_or_empty;
use contracts::domain::r001_pm_report::{schema_for, FieldKind, StepKey, StepPayload};
use contracts::enums::{LookupKind, LookupOption};
use leptos::prelude::*;
use std::collections::BTreeMap;

/// Wizard frame: progress dots, the current step's form unit, Back/Next.
///
/// Only one step is mounted at a time; the unit is rebuilt when the current
/// step changes and receives that step's accumulated payload as its seed.
#[component]
pub fn ReportWizard(vm: WizardViewModel) -> impl IntoView {
    let core = vm.core;
    let current = Memo::new(move |_| core.with(|c| c.current()));
    let transitioning = Memo::new(move |_| core.with(|c| c.is_transitioning()));
    let on_first = Memo::new(move |_| core.with(|c| c.is_first()));
    let on_last = Memo::new(move |_| core.with(|c| c.is_last()));

    view! {
        <div class="wizard">
            <ProgressDots core=core current=current />

            <div class=move || {
                if transitioning.get() {
                    "wizard__step wizard__step--transitioning"
                } else {
                    "wizard__step"
                }
            }>
                {move || {
                    let step = current.get();
                    // seed derives from the aggregate, so echoes of the
                    // unit's own emissions flow back down and are ignored by
                    // its seed-once guard
                    let seed = Signal::derive(move || {
                        core.with(|c| c.step_payload(step).cloned())
                    });
                    view! {
                        <StepFormUnit
                            step=step
                            seed=seed
                            on_data_change=Callback::new(move |payload| {
                                vm.set_step_payload(step, payload)
                            })
                            on_status_change=Callback::new(move |(key, is_complete)| {
                                vm.set_step_completion(key, is_complete)
                            })
                        />
                    }
                }}
            </div>

            <div class="wizard__nav">
                <Button
                    variant="secondary".to_string()
                    disabled=Signal::derive(move || transitioning.get())
                    on_click=Callback::new(move |_| vm.back())
                >
                    {move || if on_first.get() { "Exit" } else { "Back" }}
                </Button>
                <Button
                    disabled=Signal::derive(move || transitioning.get())
                    on_click=Callback::new(move |_| vm.next())
                >
                    {move || if on_last.get() { "Complete" } else { "Next" }}
                </Button>
            </div>
        </div>
    }
}

/// Progress strip: one dot per step, colored by advisory completion
#[component]
fn ProgressDots(core: RwSignal<WizardCore>, current: Memo<StepKey>) -> impl IntoView {
    view! {
        <div class="wizard__progress">
            <For
                each=|| StepKey::ALL
                key=|key| key.code()
                children=move |key: StepKey| {
                    let class = move || {
                        let mut cls = String::from("wizard__dot");
                        if current.get() == key {
                            cls.push_str(" wizard__dot--active");
                        }
                        if core.with(|c| c.is_step_complete(key)) {
                            cls.push_str(" wizard__dot--complete");
                        }
                        cls
                    };
                    view! { <span class=class title=key.title()></span> }
                }
            />
        </div>
    }
}

/// Generic step form unit.
///
/// One component serves every step: the schema drives which controls render,
/// the seed is applied at most once (guarded in `StepFormCore`), every edit
/// re-emits the full payload, and completion is re-evaluated on every change.
#[component]
pub fn StepFormUnit(
    step: StepKey,
    #[prop(into)] seed: Signal<Option<StepPayload>>,
    on_data_change: Callback<StepPayload>,
    on_status_change: Callback<(StepKey, bool)>,
) -> impl IntoView {
    let schema = schema_for(step);
    let form = RwSignal::new(StepFormCore::new(step));

    // Seed-once: apply only while the unit is still Empty and the seed has
    // data; everything else (echoes, transient empties) is a no-op that must
    // not touch the signal.
    Effect::new(move |_| {
        if let Some(incoming) = seed.get() {
            let can_apply =
                incoming.has_data() && form.with_untracked(|f| f.accepts_seed());
            if can_apply {
                form.update(|f| {
                    f.apply_seed(&incoming);
                });
            }
        }
    });

    // Re-emit completion whenever it changes. The controller tolerates
    // duplicates; they are filtered here anyway.
    let last_emitted = StoredValue::new(None::<bool>);
    Effect::new(move |_| {
        let is_complete = form.with(|f| f.is_complete());
        if last_emitted.get_value() != Some(is_complete) {
            last_emitted.set_value(Some(is_complete));
            on_status_change.run((step, is_complete));
        }
    });

    // Reference data: one independent fetch per lookup kind on mount, no
    // caching across mounts.
    let options = RwSignal::new(BTreeMap::<LookupKind, Vec<LookupOption>>::new());
    let pending = RwSignal::new(schema.lookup_kinds().len());
    for kind in schema.lookup_kinds() {
        wasm_bindgen_futures::spawn_local(async move {
            let list = load_lookup_or_empty(kind).await;
            options.update(|map| {
                map.insert(kind, list);
            });
            pending.update(|n| *n = n.saturating_sub(1));
        });
    }
    let loading = Signal::derive(move || pending.get() > 0);

    let fields = schema
        .fields
        .iter()
        .map(|field| {
            let field_id = field.id;
            let value = Signal::derive(move || form.with(|f| f.value(field_id)));
            let on_edit = Callback::new(move |new_value: String| {
                let payload = form
                    .try_update(|f| f.edit(field_id, new_value))
                    .unwrap_or_default();
                on_data_change.run(payload);
            });

            match field.kind {
                FieldKind::Lookup(kind) => {
                    let kind_options = Signal::derive(move || {
                        options.with(|map| map.get(&kind).cloned().unwrap_or_default())
                    });
                    view! {
                        <LookupSelect
                            label=field.label.to_string()
                            value=value
                            on_change=on_edit
                            options=kind_options
                            loading=loading
                            required=field.required
                            id=field_id.to_string()
                        />
                    }
                    .into_any()
                }
                FieldKind::Text => view! {
                    <Input
                        label=field.label.to_string()
                        value=value
                        on_input=on_edit
                        required=field.required
                        id=field_id.to_string()
                    />
                }
                .into_any(),
                FieldKind::Number => view! {
                    <Input
                        label=field.label.to_string()
                        value=value
                        on_input=on_edit
                        input_type="number".to_string()
                        required=field.required
                        id=field_id.to_string()
                    />
                }
                .into_any(),
                FieldKind::Remarks => view! {
                    <Textarea
                        label=field.label.to_string()
                        value=value
                        on_input=on_edit
                        rows=3
                        id=field_id.to_string()
                    />
                }
                .into_any(),
            }
        })
        .collect_view();

    view! {
        <div class="step-form">
            <h3 class="step-form__title">{step.title()}</h3>
            {schema.illustration.map(|src| view! {
                <img class="step-form__illustration" src=src alt=step.title() />
            })}
            <div class="step-form__fields">{fields}</div>
        </div>
    }
}
