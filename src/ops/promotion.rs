// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gymtrack-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gymtrack and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Daily → summary promotion shared by exercise logs and cardio sessions.

use crate::model::{Daily, Promotable};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum SummaryUpsert {
    Inserted,
    Replaced,
    Unchanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Promotion {
    pub daily_changed: bool,
    pub summary: SummaryUpsert,
}

/// Snapshots the daily record and upserts its copy into the summary: replaced in place when the
/// id is already there, prepended otherwise. `None` when no daily record has `id`.
pub(super) fn promote<T>(daily: &mut [Daily<T>], summary: &mut Vec<T>, id: &str) -> Option<Promotion>
where
    T: Promotable + PartialEq,
{
    let record = daily.iter_mut().find(|record| record.id() == id)?;
    let was_clean = record.is_promoted();
    let copy = record.mark_promoted();

    let upsert = match summary.iter_mut().find(|existing| existing.record_id() == id) {
        Some(existing) if *existing == copy => SummaryUpsert::Unchanged,
        Some(existing) => {
            *existing = copy;
            SummaryUpsert::Replaced
        }
        None => {
            summary.insert(0, copy);
            SummaryUpsert::Inserted
        }
    };

    Some(Promotion { daily_changed: !was_clean, summary: upsert })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(super) struct Demotion {
    pub summary_removed: bool,
    pub daily_cleared: bool,
}

/// Removes the summary copy with `id` and clears the promotion of its daily origin.
pub(super) fn demote<T: Promotable>(daily: &mut [Daily<T>], summary: &mut Vec<T>, id: &str) -> Demotion {
    let before = summary.len();
    summary.retain(|existing| existing.record_id() != id);
    let daily_cleared = daily
        .iter_mut()
        .filter(|record| record.id() == id)
        .fold(false, |cleared, record| record.clear_promotion() || cleared);

    Demotion { summary_removed: summary.len() != before, daily_cleared }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(super) struct BulkRemoval {
    pub removed: Vec<String>,
    pub cleared: Vec<String>,
}

/// Removes every summary entry matching `matches`, first clearing the promotion of daily records
/// that share an id with a removed entry.
pub(super) fn remove_summary_where<T: Promotable>(
    daily: &mut [Daily<T>],
    summary: &mut Vec<T>,
    mut matches: impl FnMut(&T) -> bool,
) -> BulkRemoval {
    let removed = summary
        .iter()
        .filter(|entry| matches(entry))
        .map(|entry| entry.record_id().to_owned())
        .collect::<Vec<_>>();
    if removed.is_empty() {
        return BulkRemoval::default();
    }

    let cleared = daily
        .iter_mut()
        .filter(|record| removed.iter().any(|id| id == record.id()))
        .filter_map(|record| record.clear_promotion().then(|| record.id().to_owned()))
        .collect();

    summary.retain(|entry| !removed.iter().any(|id| id == entry.record_id()));

    BulkRemoval { removed, cleared }
}
