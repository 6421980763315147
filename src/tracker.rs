// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gymtrack-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gymtrack and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The owned container tying state, storage and the calendar together.
//!
//! A [`Tracker`] loads (and migrates) the saved blob when opened, applies operation batches, and
//! writes the whole tree back after every batch that changed something.

use chrono::{Local, NaiveDate};
use tracing::{debug, info};

use crate::format::{
    export, import_document, ExportError, ExportFile, ExportFormat, ExportScope, ImportError,
};
use crate::model::AppState;
use crate::ops::{apply_ops, ApplyError, ApplyResult, Op, OpEnv};
use crate::store::{load_state, save_state, DocumentKind, StateStorage};

/// Source of "today" for date parsing, new forms and export file names.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// The local calendar date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always the same day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[derive(Debug)]
pub struct Tracker<S, C = SystemClock> {
    state: AppState,
    storage: S,
    clock: C,
}

impl<S: StateStorage, C: Clock> Tracker<S, C> {
    /// Loads the saved state, falling back to defaults when there is none or it is unreadable.
    pub fn open(storage: S, clock: C) -> Self {
        let state = load_state(&storage, clock.today());
        Self { state, storage, clock }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Applies a batch atomically and persists it when anything changed.
    pub fn apply(&mut self, ops: &[Op]) -> Result<ApplyResult, ApplyError> {
        let env = OpEnv { today: self.today() };
        let result = apply_ops(&mut self.state, ops, &env)?;
        if result.delta.is_empty() {
            debug!(ops = ops.len(), "batch changed nothing; not persisting");
        } else {
            self.save();
        }
        Ok(result)
    }

    /// Merges an imported document into the state and persists the result.
    pub fn import(&mut self, raw: &str) -> Result<DocumentKind, ImportError> {
        let imported = import_document(&self.state, raw, self.today())?;
        if imported.state != self.state {
            self.state = imported.state;
            self.save();
        } else {
            info!("import left the state unchanged");
        }
        Ok(imported.kind)
    }

    pub fn export(&self, scope: &ExportScope, format: ExportFormat) -> Result<ExportFile, ExportError> {
        export(&self.state, scope, format, self.today())
    }

    /// Writes the current state. Failures are logged, never returned.
    pub fn save(&self) -> bool {
        save_state(&self.storage, &self.state)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use tracing_test::traced_test;

    use super::{FixedClock, Tracker};
    use crate::model::{AppState, DayCategory};
    use crate::ops::{ExerciseDraft, Op, SedeOp};
    use crate::store::{decode_state, MemoryStorage};

    fn clock() -> FixedClock {
        FixedClock(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap())
    }

    fn add_press() -> Op {
        Op::add_log(ExerciseDraft::new("press", "2024-03-05", DayCategory::Day1).sets("3", "10", "40"))
    }

    #[test]
    fn silent_no_op_is_not_persisted() {
        let mut tracker = Tracker::open(MemoryStorage::new(), clock());
        let result = tracker.apply(&[add_press()]).unwrap();

        assert!(result.delta.is_empty());
        assert!(tracker.storage().contents().is_none());
    }

    #[test]
    fn applied_batches_survive_a_reopen() {
        let mut tracker = Tracker::open(MemoryStorage::new(), clock());
        tracker
            .apply(&[Op::Sede(SedeOp::SetActive { name: Some("ventas".to_owned()) }), add_press()])
            .unwrap();

        let blob = tracker.storage().contents().unwrap();
        let reloaded = decode_state(&blob, clock().0).unwrap();
        assert_eq!(&reloaded, tracker.state());
        assert_eq!(reloaded.daily_logs().len(), 1);

        let reopened = Tracker::open(MemoryStorage::with_contents(blob), clock());
        assert_eq!(reopened.state(), tracker.state());
    }

    #[test]
    #[traced_test]
    fn failed_writes_do_not_fail_the_operation() {
        let storage = MemoryStorage::new();
        storage.set_fail_writes(true);
        let mut tracker = Tracker::open(storage, clock());

        let result = tracker.apply(&[Op::Sede(SedeOp::SetActive { name: Some("centro".to_owned()) })]);
        assert!(result.is_ok());
        assert_eq!(tracker.state().active_sede(), Some("CENTRO"));
        assert!(logs_contain("could not save state"));
    }

    #[test]
    fn unchanged_import_is_not_persisted() {
        let mut tracker = Tracker::open(MemoryStorage::new(), clock());
        tracker.import(r#"{"summaryLogs": []}"#).unwrap();

        assert_eq!(tracker.state(), &AppState::new(clock().0));
        assert!(tracker.storage().contents().is_none());
    }
}
