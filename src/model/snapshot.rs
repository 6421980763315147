// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gymtrack-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gymtrack and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::day::DayCategory;

/// Fields shared by every dated, per-sede record.
pub trait Record: Clone {
    fn record_id(&self) -> &str;
    fn date(&self) -> &str;
    fn day(&self) -> DayCategory;
    fn sede(&self) -> &str;
    fn set_sede(&mut self, sede: String);
}

/// A record that can be promoted from the daily view into the summary.
///
/// The snapshot captures exactly the fields whose change makes a promoted record dirty again.
pub trait Promotable: Record {
    type Snapshot: Clone + PartialEq + Eq + fmt::Debug + Serialize + DeserializeOwned;

    fn snapshot(&self) -> Self::Snapshot;

    fn matches_snapshot(&self, snapshot: &Self::Snapshot) -> bool {
        self.snapshot() == *snapshot
    }
}
