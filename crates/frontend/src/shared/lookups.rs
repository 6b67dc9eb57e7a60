//! Reference-data loader for the step lookup sets.
//!
//! One centralized fetch with a deliberate swallow-and-log policy: a wizard
//! step must stay usable while a lookup service is degraded, so every failure
//! resolves to an empty option list and is reported only to the console log,
//! never to the user as a blocking error.

use crate::shared::api_utils::{api_url, FetchDeadline, FETCH_TIMEOUT_MS};
use contracts::enums::{LookupKind, LookupOption};
use gloo_net::http::Request;

/// Fetch one lookup set, resolving to an empty list on any failure.
///
/// No caching: every step mount re-fetches. A hung request is aborted after
/// `FETCH_TIMEOUT_MS` instead of loading forever.
pub async fn load_lookup_or_empty(kind: LookupKind) -> Vec<LookupOption> {
    options_or_empty(kind, fetch_lookup(kind).await)
}

async fn fetch_lookup(kind: LookupKind) -> Result<Vec<LookupOption>, String> {
    let url = api_url(&format!("/api/lookups/{}", kind.resource()));
    let deadline = FetchDeadline::new(FETCH_TIMEOUT_MS);
    let signal = deadline.as_ref().map(|d| d.signal());

    let response = Request::get(&url)
        .header("Accept", "application/json")
        .abort_signal(signal.as_ref())
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<Vec<LookupOption>>()
        .await
        .map_err(|e| e.to_string())
}

/// Decision half of the swallow-and-log policy, kept pure for testing
fn options_or_empty(
    kind: LookupKind,
    result: Result<Vec<LookupOption>, String>,
) -> Vec<LookupOption> {
    match result {
        Ok(options) => options,
        Err(e) => {
            log::warn!(
                "lookup '{}' failed, falling back to empty list: {}",
                kind.resource(),
                e
            );
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yes_no() -> Vec<LookupOption> {
        vec![
            LookupOption {
                id: "yes".to_string(),
                name: "Yes".to_string(),
            },
            LookupOption {
                id: "no".to_string(),
                name: "No".to_string(),
            },
        ]
    }

    #[test]
    fn test_successful_load_passes_through() {
        let options = options_or_empty(LookupKind::YesNoStatus, Ok(yes_no()));
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].id, "yes");
    }

    #[test]
    fn test_failure_resolves_to_empty_list() {
        // failures are contained here: the wizard never sees an error
        let options =
            options_or_empty(LookupKind::ResultStatus, Err("HTTP 503".to_string()));
        assert!(options.is_empty());
    }
}
