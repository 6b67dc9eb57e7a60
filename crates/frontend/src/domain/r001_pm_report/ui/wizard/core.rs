//! Pure state machines behind the report wizard.
//!
//! No Leptos or browser types here: everything in this module runs and is
//! tested on the host. The view-model layer wraps these in signals and adds
//! the animated transition delay.

use contracts::domain::r001_pm_report::{schema_for, ReportFormData, StepKey, StepPayload};
use std::collections::BTreeMap;

/// Outcome of finishing a forward transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextOutcome {
    /// Advanced to this step
    Moved(StepKey),
    /// Next was issued on the last step: the wizard is done
    Completed,
}

/// Outcome of finishing a backward transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackOutcome {
    /// Retreated to this step
    Moved(StepKey),
    /// Back was issued on the first step; the current step is unchanged
    Exited,
}

/// Wizard navigation and aggregation state.
///
/// Step order is the data-driven `StepKey::ALL` sequence, so navigation is
/// index arithmetic. Next/Back are serialized by the `transitioning`
/// reentrancy guard: a duplicate invocation while a transition is pending is
/// dropped, not queued.
#[derive(Debug, Clone)]
pub struct WizardCore {
    index: usize,
    transitioning: bool,
    form_data: ReportFormData,
    completion: BTreeMap<StepKey, bool>,
}

impl WizardCore {
    pub fn new() -> Self {
        Self::with_form_data(ReportFormData::new())
    }

    /// Start from an existing draft's accumulated payloads
    pub fn with_form_data(form_data: ReportFormData) -> Self {
        Self {
            index: 0,
            transitioning: false,
            form_data,
            completion: BTreeMap::new(),
        }
    }

    pub fn current(&self) -> StepKey {
        StepKey::ALL[self.index]
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 == StepKey::ALL.len()
    }

    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    /// Arm the reentrancy guard.
    ///
    /// Returns false (and changes nothing) while a transition is already
    /// pending; the caller must drop the duplicate invocation.
    pub fn try_begin_transition(&mut self) -> bool {
        if self.transitioning {
            return false;
        }
        self.transitioning = true;
        true
    }

    /// Finish a pending forward transition: advance, or report completion
    /// when already on the last step
    pub fn finish_next(&mut self) -> NextOutcome {
        self.transitioning = false;
        if self.is_last() {
            NextOutcome::Completed
        } else {
            self.index += 1;
            NextOutcome::Moved(self.current())
        }
    }

    /// Finish a pending backward transition: retreat, or report exit when
    /// already on the first step
    pub fn finish_back(&mut self) -> BackOutcome {
        self.transitioning = false;
        if self.is_first() {
            BackOutcome::Exited
        } else {
            self.index -= 1;
            BackOutcome::Moved(self.current())
        }
    }

    /// Wholesale replacement of one step's payload.
    ///
    /// Steps emit their entire current payload on every edit, never a diff,
    /// so the previous entry is simply discarded.
    pub fn set_step_payload(&mut self, step: StepKey, payload: StepPayload) {
        self.form_data.insert(step, payload);
    }

    /// Advisory completion flag; never gates navigation
    pub fn set_step_completion(&mut self, step: StepKey, is_complete: bool) {
        self.completion.insert(step, is_complete);
    }

    pub fn step_payload(&self, step: StepKey) -> Option<&StepPayload> {
        self.form_data.get(&step)
    }

    /// Absent entries read as incomplete
    pub fn is_step_complete(&self, step: StepKey) -> bool {
        self.completion.get(&step).copied().unwrap_or(false)
    }

    /// The aggregated report payload, exactly as last reported by the steps.
    /// No validation happens here.
    pub fn aggregated_payload(&self) -> &ReportFormData {
        &self.form_data
    }

    /// (complete, total) over the fixed step order
    pub fn completion_summary(&self) -> (usize, usize) {
        let complete = StepKey::ALL
            .iter()
            .filter(|k| self.is_step_complete(**k))
            .count();
        (complete, StepKey::ALL.len())
    }
}

impl Default for WizardCore {
    fn default() -> Self {
        Self::new()
    }
}

/// Seed lifecycle of one step form unit.
///
/// `Empty` until the first non-empty seed arrives, then `Seeded`; the first
/// field edit moves to `Editing`. A seed that later turns empty never resets
/// the unit; only an explicit `reset()` (the page switched to a different
/// report) returns it to `Empty`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedPhase {
    Empty,
    Seeded,
    Editing,
}

/// Editable state behind one generic step form unit
#[derive(Debug, Clone)]
pub struct StepFormCore {
    step: StepKey,
    values: StepPayload,
    phase: SeedPhase,
}

impl StepFormCore {
    pub fn new(step: StepKey) -> Self {
        Self {
            step,
            values: StepPayload::new(),
            phase: SeedPhase::Empty,
        }
    }

    pub fn step(&self) -> StepKey {
        self.step
    }

    pub fn phase(&self) -> SeedPhase {
        self.phase
    }

    pub fn values(&self) -> &StepPayload {
        &self.values
    }

    /// Value for prop binding: cloned, empty string when absent
    pub fn value(&self, field_id: &str) -> String {
        self.values.value(field_id)
    }

    /// True while no non-empty seed has been applied; an arriving seed will
    /// be accepted in this phase only
    pub fn accepts_seed(&self) -> bool {
        self.phase == SeedPhase::Empty
    }

    /// Apply an external seed, at most once per unit lifetime.
    ///
    /// Only fields the step's schema recognizes are copied. Empty seeds are
    /// ignored in every phase, so a transient empty prop (or an echo of our
    /// own emission) can never clobber local edits. Returns true when the
    /// seed was applied.
    pub fn apply_seed(&mut self, seed: &StepPayload) -> bool {
        if self.phase != SeedPhase::Empty || !seed.has_data() {
            return false;
        }
        let schema = schema_for(self.step);
        for field in schema.fields {
            if let Some(value) = seed.get(field.id) {
                self.values.set(field.id, value);
            }
        }
        self.phase = SeedPhase::Seeded;
        true
    }

    /// Record one field edit and return the full payload to re-emit.
    ///
    /// Downstream aggregation relies on full-replacement semantics, so the
    /// entire payload is returned, not a delta. Field ids outside the step's
    /// schema are dropped to keep the payload schema-shaped.
    pub fn edit(&mut self, field_id: &str, value: impl Into<String>) -> StepPayload {
        if schema_for(self.step).has_field(field_id) {
            self.values.set(field_id, value);
        }
        self.phase = SeedPhase::Editing;
        self.values.clone()
    }

    /// Completion predicate: every required schema field non-blank.
    /// Recomputed on every call; callers re-emit on every edit.
    pub fn is_complete(&self) -> bool {
        schema_for(self.step).is_complete(&self.values)
    }

    /// Explicit external reset (new report id); the only way back to `Empty`
    pub fn reset(&mut self) {
        self.values = StepPayload::new();
        self.phase = SeedPhase::Empty;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed(pairs: &[(&str, &str)]) -> StepPayload {
        let mut payload = StepPayload::new();
        for (k, v) in pairs {
            payload.set(k, *v);
        }
        payload
    }

    // -- wizard navigation ---------------------------------------------------

    #[test]
    fn test_next_and_back_follow_step_order() {
        let mut core = WizardCore::new();
        for expected in StepKey::ALL.iter().skip(1) {
            assert!(core.try_begin_transition());
            assert_eq!(core.finish_next(), NextOutcome::Moved(*expected));
        }
        assert!(core.is_last());

        for expected in StepKey::ALL.iter().rev().skip(1) {
            assert!(core.try_begin_transition());
            assert_eq!(core.finish_back(), BackOutcome::Moved(*expected));
        }
        assert!(core.is_first());
    }

    #[test]
    fn test_reentrancy_guard_drops_duplicate_invocation() {
        let mut core = WizardCore::new();
        assert!(core.try_begin_transition());
        // second click lands while the transition animation is pending
        assert!(!core.try_begin_transition());
        assert_eq!(core.finish_next(), NextOutcome::Moved(StepKey::HardDriveHealth));

        // exactly one advance happened and the guard is released again
        assert_eq!(core.current(), StepKey::HardDriveHealth);
        assert!(!core.is_transitioning());
        assert!(core.try_begin_transition());
    }

    #[test]
    fn test_next_from_last_step_reports_completed() {
        let mut core = WizardCore::new();
        for _ in 0..StepKey::ALL.len() - 1 {
            core.try_begin_transition();
            core.finish_next();
        }
        assert_eq!(core.current(), StepKey::DatabaseBackup);

        core.try_begin_transition();
        assert_eq!(core.finish_next(), NextOutcome::Completed);
        // still on the last step; the host decides what completion means
        assert_eq!(core.current(), StepKey::DatabaseBackup);
    }

    #[test]
    fn test_back_from_first_step_reports_exit_without_moving() {
        let mut core = WizardCore::new();
        assert!(core.try_begin_transition());
        assert_eq!(core.finish_back(), BackOutcome::Exited);
        assert_eq!(core.current(), StepKey::ServerHealth);
        assert!(!core.is_transitioning());
    }

    #[test]
    fn test_step_payload_is_replaced_wholesale() {
        let mut core = WizardCore::new();
        core.set_step_payload(
            StepKey::ServerHealth,
            seed(&[("result", "healthy"), ("remarks", "ok")]),
        );
        // a later emission without "remarks" discards the old entry entirely
        core.set_step_payload(StepKey::ServerHealth, seed(&[("result", "degraded")]));

        let payload = core.step_payload(StepKey::ServerHealth).unwrap();
        assert_eq!(payload.value("result"), "degraded");
        assert_eq!(payload.get("remarks"), None);
    }

    #[test]
    fn test_completion_map_is_advisory_and_idempotent() {
        let mut core = WizardCore::new();
        assert!(!core.is_step_complete(StepKey::DiskUsage));

        core.set_step_completion(StepKey::DiskUsage, true);
        core.set_step_completion(StepKey::DiskUsage, true);
        assert!(core.is_step_complete(StepKey::DiskUsage));
        assert_eq!(core.completion_summary(), (1, 15));

        // an incomplete step never blocks navigation
        assert!(core.try_begin_transition());
        assert_eq!(core.finish_next(), NextOutcome::Moved(StepKey::HardDriveHealth));
    }

    #[test]
    fn test_end_to_end_walkthrough_aggregates_visited_steps() {
        let mut core = WizardCore::new();

        for (i, step) in StepKey::ALL.iter().enumerate() {
            assert_eq!(core.current(), *step);
            core.set_step_payload(*step, seed(&[("result", "ok")]));
            core.set_step_completion(*step, true);

            assert!(core.try_begin_transition());
            // double click on every step; each duplicate is dropped
            assert!(!core.try_begin_transition());

            if i + 1 < StepKey::ALL.len() {
                assert_eq!(core.finish_next(), NextOutcome::Moved(StepKey::ALL[i + 1]));
            } else {
                assert_eq!(core.finish_next(), NextOutcome::Completed);
            }
        }

        let aggregated = core.aggregated_payload();
        assert_eq!(aggregated.len(), StepKey::ALL.len());
        for step in StepKey::ALL {
            assert_eq!(aggregated[&step].value("result"), "ok");
        }
        assert_eq!(core.completion_summary(), (15, 15));
    }

    #[test]
    fn test_draft_seed_prepopulates_form_data() {
        let mut form_data = ReportFormData::new();
        form_data.insert(StepKey::CctvStatus, seed(&[("allRecording", "yes")]));
        let core = WizardCore::with_form_data(form_data);

        assert_eq!(core.current(), StepKey::ServerHealth);
        assert_eq!(
            core.step_payload(StepKey::CctvStatus).unwrap().value("allRecording"),
            "yes"
        );
    }

    // -- step form seeding ---------------------------------------------------

    #[test]
    fn test_seed_applied_at_most_once() {
        let mut form = StepFormCore::new(StepKey::ServerHealth);
        assert_eq!(form.phase(), SeedPhase::Empty);

        assert!(form.apply_seed(&seed(&[("result", "yes"), ("remarks", "ok")])));
        assert_eq!(form.phase(), SeedPhase::Seeded);
        assert_eq!(form.value("result"), "yes");

        // user edits a field, then the same seed is echoed back down
        form.edit("remarks", "changed by user");
        assert!(!form.apply_seed(&seed(&[("result", "yes"), ("remarks", "ok")])));
        assert_eq!(form.value("remarks"), "changed by user");
        assert_eq!(form.phase(), SeedPhase::Editing);
    }

    #[test]
    fn test_empty_seed_is_ignored_while_empty() {
        let mut form = StepFormCore::new(StepKey::ServerHealth);
        // transient empty props must not mark the unit as seeded
        assert!(!form.apply_seed(&StepPayload::new()));
        assert!(!form.apply_seed(&seed(&[("result", "  ")])));
        assert_eq!(form.phase(), SeedPhase::Empty);
        assert!(form.accepts_seed());

        assert!(form.apply_seed(&seed(&[("result", "no")])));
        assert_eq!(form.phase(), SeedPhase::Seeded);
    }

    #[test]
    fn test_seed_turning_empty_does_not_reset() {
        let mut form = StepFormCore::new(StepKey::RtuStatus);
        form.apply_seed(&seed(&[("allOnline", "no"), ("offlineUnits", "RTU-4")]));
        form.edit("remarks", "dispatch scheduled");

        assert!(!form.apply_seed(&StepPayload::new()));
        assert_eq!(form.value("remarks"), "dispatch scheduled");

        // only the explicit reset returns to Empty
        form.reset();
        assert_eq!(form.phase(), SeedPhase::Empty);
        assert!(!form.values().has_data());
    }

    #[test]
    fn test_seed_copies_only_recognized_fields() {
        let mut form = StepFormCore::new(StepKey::DiskUsage);
        form.apply_seed(&seed(&[("usedPercent", "71"), ("bogusField", "x")]));
        assert_eq!(form.value("usedPercent"), "71");
        assert_eq!(form.values().get("bogusField"), None);
    }

    #[test]
    fn test_edit_reemits_entire_payload() {
        let mut form = StepFormCore::new(StepKey::DiskUsage);
        form.apply_seed(&seed(&[("withinThreshold", "yes"), ("usedPercent", "63")]));

        let emitted = form.edit("remarks", "trending up");
        // full payload, not a delta
        assert_eq!(emitted.value("withinThreshold"), "yes");
        assert_eq!(emitted.value("usedPercent"), "63");
        assert_eq!(emitted.value("remarks"), "trending up");
        assert_eq!(emitted.len(), 3);
    }

    #[test]
    fn test_edit_before_any_seed_moves_to_editing() {
        let mut form = StepFormCore::new(StepKey::TimeSync);
        let emitted = form.edit("inSync", "yes");
        assert_eq!(form.phase(), SeedPhase::Editing);
        assert_eq!(emitted.value("inSync"), "yes");
        // a late-arriving seed must not clobber the user's input
        assert!(!form.apply_seed(&seed(&[("inSync", "no")])));
        assert_eq!(form.value("inSync"), "yes");
    }

    #[test]
    fn test_completion_tracks_required_fields_on_every_edit() {
        let mut form = StepFormCore::new(StepKey::DiskUsage);
        assert!(!form.is_complete());

        form.edit("withinThreshold", "yes");
        assert!(!form.is_complete());

        form.edit("usedPercent", "63");
        assert!(form.is_complete());

        form.edit("usedPercent", "");
        assert!(!form.is_complete());

        form.edit("usedPercent", "64");
        assert!(form.is_complete());
    }

    #[test]
    fn test_unknown_field_edit_is_dropped_from_payload() {
        let mut form = StepFormCore::new(StepKey::ServerHealth);
        let emitted = form.edit("notInSchema", "x");
        assert!(emitted.is_empty());
        assert_eq!(form.phase(), SeedPhase::Editing);
    }
}
