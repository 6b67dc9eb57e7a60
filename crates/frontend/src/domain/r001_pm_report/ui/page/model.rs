use crate::shared::api_utils::{api_base, FetchDeadline, FETCH_TIMEOUT_MS};
use contracts::domain::r001_pm_report::{PmReportDraft, PmReportSubmission};

pub async fn fetch_draft(id: String) -> Result<PmReportDraft, String> {
    use wasm_bindgen::JsCast;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let deadline = FetchDeadline::new(FETCH_TIMEOUT_MS);

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);
    if let Some(d) = &deadline {
        opts.set_signal(Some(&d.signal()));
    }

    let url = format!("{}/api/reports/pm/{}", api_base(), id);
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;

    if resp.status() == 404 {
        return Err("Report not found".to_string());
    }
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    let text: String = text.as_string().ok_or_else(|| "bad text".to_string())?;
    PmReportDraft::from_json(&text).map_err(|e| format!("{e}"))
}

pub async fn save_draft(draft: &PmReportDraft) -> Result<String, String> {
    use wasm_bindgen::JsCast;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let body = draft.to_json().map_err(|e| format!("{e}"))?;
    let deadline = FetchDeadline::new(FETCH_TIMEOUT_MS);

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&wasm_bindgen::JsValue::from_str(&body));
    if let Some(d) = &deadline {
        opts.set_signal(Some(&d.signal()));
    }

    let url = format!("{}/api/reports/pm", api_base());
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;

    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    let text: String = text.as_string().ok_or_else(|| "bad text".to_string())?;

    if !resp.ok() {
        #[derive(serde::Deserialize)]
        struct ErrorResponse {
            error: Option<String>,
        }
        if let Ok(error_data) = serde_json::from_str::<ErrorResponse>(&text) {
            if let Some(error_msg) = error_data.error {
                return Err(format!("Save failed: {}", error_msg));
            }
        }
        return Err(format!("HTTP {}: {}", resp.status(), text));
    }

    #[derive(serde::Deserialize)]
    struct SaveResponse {
        id: String,
    }
    let data: SaveResponse = serde_json::from_str(&text).map_err(|e| format!("{e}"))?;
    Ok(data.id)
}

pub async fn submit_report(submission: &PmReportSubmission) -> Result<(), String> {
    use wasm_bindgen::JsCast;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let body = submission.to_json().map_err(|e| format!("{e}"))?;
    let deadline = FetchDeadline::new(FETCH_TIMEOUT_MS);

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&wasm_bindgen::JsValue::from_str(&body));
    if let Some(d) = &deadline {
        opts.set_signal(Some(&d.signal()));
    }

    let url = format!("{}/api/reports/pm/{}/submit", api_base(), submission.report_id);
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;

    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    Ok(())
}
