// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gymtrack-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gymtrack and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use super::day::DayCategory;
use super::ids::LogId;
use super::media::ExerciseMedia;
use super::snapshot::{Promotable, Record};

/// One resistance-training entry.
///
/// The same shape is stored in the daily collection (wrapped in [`super::Daily`]) and, once
/// promoted, as a standalone copy in the summary collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseLog {
    pub id: LogId,
    #[serde(default)]
    pub exercise_name: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub reps: String,
    #[serde(default)]
    pub kilos: String,
    #[serde(default)]
    pub series: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incline: Option<String>,
    pub day: DayCategory,
    #[serde(default)]
    pub media: Vec<ExerciseMedia>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub sede: String,
}

/// The promotable fields of an [`ExerciseLog`] at the moment it was saved to the summary.
///
/// Older saves stored partial snapshots, so every field tolerates being absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseSnapshot {
    #[serde(default)]
    pub exercise_name: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub reps: String,
    #[serde(default)]
    pub kilos: String,
    #[serde(default)]
    pub series: String,
    #[serde(default)]
    pub media: Vec<ExerciseMedia>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Record for ExerciseLog {
    fn record_id(&self) -> &str {
        self.id.as_str()
    }

    fn date(&self) -> &str {
        &self.date
    }

    fn day(&self) -> DayCategory {
        self.day
    }

    fn sede(&self) -> &str {
        &self.sede
    }

    fn set_sede(&mut self, sede: String) {
        self.sede = sede;
    }
}

impl Promotable for ExerciseLog {
    type Snapshot = ExerciseSnapshot;

    fn snapshot(&self) -> ExerciseSnapshot {
        ExerciseSnapshot {
            exercise_name: self.exercise_name.clone(),
            date: self.date.clone(),
            reps: self.reps.clone(),
            kilos: self.kilos.clone(),
            series: self.series.clone(),
            media: self.media.clone(),
            notes: self.notes.clone(),
        }
    }
}
