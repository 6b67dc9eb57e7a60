use crate::domain::r001_pm_report::ui::page::PmReportPage;
use leptos::prelude::*;
use web_sys::UrlSearchParams;

/// Report id carried in the `?report=` query parameter, if any
fn report_id_from_location() -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    let params = UrlSearchParams::new_with_str(search.trim_start_matches('?')).ok()?;
    params.get("report").filter(|id| !id.is_empty())
}

#[component]
pub fn App() -> impl IntoView {
    let report_id = report_id_from_location();

    view! {
        <PmReportPage report_id=report_id />
    }
}
