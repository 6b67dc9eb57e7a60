use super::view_model::PmReportViewModel;
use crate::domain::r001_pm_report::ui::wizard::{ReportWizard, WizardViewModel};
use crate::shared::components::ui::{Button, Input};
use contracts::domain::r001_pm_report::{completion_summary, ReportFormData};
use leptos::prelude::*;

/// Host page for the server PM report wizard.
///
/// Owns the report metadata (site, engineer, date) outside any wizard step,
/// seeds the wizard from an existing draft when a report id is given, and
/// relays the wizard's completion into the submit call.
#[component]
pub fn PmReportPage(report_id: Option<String>) -> impl IntoView {
    let vm = PmReportViewModel::new();
    vm.load_if_needed(report_id);

    view! {
        <div class="pm-report-page">
            <div class="page-header">
                <h2>"Server PM Inspection Report"</h2>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="pm-report-page__meta">
                <Input
                    label="Site".to_string()
                    value=Signal::derive(move || vm.draft.get().site_name)
                    on_input=Callback::new(move |v| vm.set_site_name(v))
                    placeholder="Site or facility name".to_string()
                    id="site_name".to_string()
                />
                <Input
                    label="Engineer".to_string()
                    value=Signal::derive(move || vm.draft.get().engineer)
                    on_input=Callback::new(move |v| vm.set_engineer(v))
                    placeholder="Inspecting engineer".to_string()
                    id="engineer".to_string()
                />
                <Input
                    label="Report date".to_string()
                    value=Signal::derive(move || {
                        vm.draft.get().report_date.format("%Y-%m-%d").to_string()
                    })
                    on_input=Callback::new(move |v| vm.set_report_date(v))
                    input_type="date".to_string()
                    id="report_date".to_string()
                />
            </div>

            <Show
                when=move || !vm.submitted.get()
                fallback=|| view! {
                    <div class="pm-report-page__done">"Report submitted."</div>
                }
            >
                <Show
                    when=move || vm.loaded.get()
                    fallback=|| view! { <div class="loading">"Loading report..."</div> }
                >
                    <ReportWizardSection vm=vm />
                </Show>
            </Show>
        </div>
    }
}

/// Wizard plus its footer; built once the draft is loaded, so switching to
/// another report id restarts every step unit in its unseeded phase
#[component]
fn ReportWizardSection(vm: PmReportViewModel) -> impl IntoView {
    let seed = vm.draft.get_untracked().form_data;

    let wizard = WizardViewModel::new(
        seed,
        Callback::new(move |form_data: ReportFormData| {
            // advisory counters only; submission is never blocked
            let (complete, total) = completion_summary(&form_data);
            vm.submit_command(form_data, complete, total);
        }),
        Callback::new(move |_: ()| {
            // back from the first step leaves the wizard
            if let Some(window) = web_sys::window() {
                if let Ok(history) = window.history() {
                    let _ = history.back();
                }
            }
        }),
    );

    view! {
        <div class="pm-report-page__wizard">
            <ReportWizard vm=wizard />

            <div class="pm-report-page__footer">
                <span class="pm-report-page__summary">
                    {move || {
                        let (complete, total) = wizard.core.with(|c| c.completion_summary());
                        format!("{} of {} steps complete", complete, total)
                    }}
                </span>
                <Button
                    variant="secondary".to_string()
                    disabled=Signal::derive(move || vm.saving.get())
                    on_click=Callback::new(move |_| {
                        let form_data =
                            wizard.core.with_untracked(|c| c.aggregated_payload().clone());
                        vm.save_command(form_data);
                    })
                >
                    "Save draft"
                </Button>
            </div>
        </div>
    }
}
