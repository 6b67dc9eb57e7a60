use super::core::{BackOutcome, NextOutcome, WizardCore};
use contracts::domain::r001_pm_report::{ReportFormData, StepKey, StepPayload};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

/// Visual transition window between steps, in milliseconds.
/// Presentation concern only: the core advances when the window closes.
const STEP_TRANSITION_MS: u32 = 250;

/// ViewModel for the report wizard.
///
/// Wraps the pure `WizardCore` in a signal and drives the animated
/// transitions. Duplicate Next/Back clicks inside the transition window are
/// dropped by the core's reentrancy guard before any task is spawned.
#[derive(Clone, Copy)]
pub struct WizardViewModel {
    pub core: RwSignal<WizardCore>,
    on_complete: Callback<ReportFormData>,
    on_exit: Callback<()>,
}

impl WizardViewModel {
    pub fn new(
        seed: ReportFormData,
        on_complete: Callback<ReportFormData>,
        on_exit: Callback<()>,
    ) -> Self {
        Self {
            core: RwSignal::new(WizardCore::with_form_data(seed)),
            on_complete,
            on_exit,
        }
    }

    /// Advance to the next step, or complete the wizard from the last one
    pub fn next(&self) {
        let armed = self
            .core
            .try_update(|c| c.try_begin_transition())
            .unwrap_or(false);
        if !armed {
            return;
        }

        let core = self.core;
        let on_complete = self.on_complete;
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(STEP_TRANSITION_MS).await;
            let outcome = core.try_update(|c| c.finish_next());
            if let Some(NextOutcome::Completed) = outcome {
                let data = core.with_untracked(|c| c.aggregated_payload().clone());
                on_complete.run(data);
            }
        });
    }

    /// Retreat to the previous step, or exit the wizard from the first one
    pub fn back(&self) {
        let armed = self
            .core
            .try_update(|c| c.try_begin_transition())
            .unwrap_or(false);
        if !armed {
            return;
        }

        let core = self.core;
        let on_exit = self.on_exit;
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(STEP_TRANSITION_MS).await;
            let outcome = core.try_update(|c| c.finish_back());
            if let Some(BackOutcome::Exited) = outcome {
                on_exit.run(());
            }
        });
    }

    /// Relay one step's full payload into the aggregate (wholesale replace)
    pub fn set_step_payload(&self, step: StepKey, payload: StepPayload) {
        self.core.update(|c| c.set_step_payload(step, payload));
    }

    /// Idempotent write: re-emitted identical values do not touch the signal
    pub fn set_step_completion(&self, step: StepKey, is_complete: bool) {
        let unchanged = self
            .core
            .with_untracked(|c| c.is_step_complete(step) == is_complete);
        if !unchanged {
            self.core.update(|c| c.set_step_completion(step, is_complete));
        }
    }
}
