//! API utilities for frontend-backend communication
//!
//! Provides helpers for constructing API URLs and the fetch deadline used by
//! every outgoing request (timeout with cancellation via AbortController).

use gloo_timers::callback::Timeout;
use web_sys::{AbortController, AbortSignal};

/// Default deadline for reference-data and report calls, in milliseconds
pub const FETCH_TIMEOUT_MS: u32 = 10_000;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/reports/pm/123");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Abort controller armed with a timer.
///
/// A request passed the controller's signal is aborted once `timeout_ms`
/// elapses, so a hung backend never leaves a control loading forever.
/// Dropping the deadline cancels the pending abort.
pub struct FetchDeadline {
    controller: AbortController,
    _timer: Timeout,
}

impl FetchDeadline {
    /// `None` only when AbortController is unavailable in the environment
    pub fn new(timeout_ms: u32) -> Option<Self> {
        let controller = AbortController::new().ok()?;
        let armed = controller.clone();
        let timer = Timeout::new(timeout_ms, move || armed.abort());
        Some(Self {
            controller,
            _timer: timer,
        })
    }

    pub fn signal(&self) -> AbortSignal {
        self.controller.signal()
    }
}
