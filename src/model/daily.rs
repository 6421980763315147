// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gymtrack-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gymtrack and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use super::snapshot::Promotable;

/// A working-view record together with its promotion bookkeeping.
///
/// Invariant: `is_promoted()` holds exactly when a snapshot is present and equals the entry's
/// current snapshot. Every mutation path goes through [`Daily::update`] or ends with
/// [`Daily::revalidate_promotion_state`], so a promoted record whose promotable fields change is
/// reported as unsaved again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct Daily<T: Promotable> {
    #[serde(flatten)]
    entry: T,
    #[serde(rename = "isSavedToSummary", default)]
    promoted: bool,
    #[serde(rename = "savedState", default, skip_serializing_if = "Option::is_none")]
    snapshot: Option<T::Snapshot>,
}

impl<T: Promotable> Daily<T> {
    pub fn new(entry: T) -> Self {
        Self { entry, promoted: false, snapshot: None }
    }

    /// Rebuilds a record from persisted parts and restores the invariant.
    pub fn from_parts(entry: T, promoted: bool, snapshot: Option<T::Snapshot>) -> Self {
        let mut daily = Self { entry, promoted, snapshot };
        daily.revalidate_promotion_state();
        daily
    }

    pub fn id(&self) -> &str {
        self.entry.record_id()
    }

    pub fn entry(&self) -> &T {
        &self.entry
    }

    pub fn into_entry(self) -> T {
        self.entry
    }

    pub fn is_promoted(&self) -> bool {
        self.promoted
    }

    pub fn snapshot(&self) -> Option<&T::Snapshot> {
        self.snapshot.as_ref()
    }

    /// Applies `edit` to the entry and revalidates. Returns `true` when the entry changed.
    pub fn update(&mut self, edit: impl FnOnce(&mut T)) -> bool
    where
        T: PartialEq,
    {
        let before = self.entry.clone();
        edit(&mut self.entry);
        self.revalidate_promotion_state();
        before != self.entry
    }

    /// Records the current fields as saved and returns the copy destined for the summary.
    pub fn mark_promoted(&mut self) -> T {
        self.snapshot = Some(self.entry.snapshot());
        self.promoted = true;
        self.entry.clone()
    }

    /// Drops promotion bookkeeping. Returns `true` when the record was promoted before.
    pub fn clear_promotion(&mut self) -> bool {
        let was_promoted = self.promoted;
        self.promoted = false;
        self.snapshot = None;
        was_promoted
    }

    /// Clears the promotion flag and snapshot when they no longer describe the entry.
    ///
    /// Returns `true` when the record went from promoted to unsaved.
    pub fn revalidate_promotion_state(&mut self) -> bool {
        let matches = self
            .snapshot
            .as_ref()
            .is_some_and(|snapshot| self.entry.matches_snapshot(snapshot));

        if self.promoted && matches {
            return false;
        }
        let was_promoted = self.promoted;
        self.promoted = false;
        self.snapshot = None;
        was_promoted
    }

    pub(crate) fn entry_mut_unchecked(&mut self) -> &mut T {
        &mut self.entry
    }
}

impl<T: Promotable> From<T> for Daily<T> {
    fn from(entry: T) -> Self {
        Self::new(entry)
    }
}
