// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gymtrack-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gymtrack and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::day::DayCategory;
use super::ids::CardioId;
use super::snapshot::{Promotable, Record};

/// Distance unit of a cardio session.
///
/// `"M"` is the retired spelling of meters; it is still accepted on read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistanceUnit {
    #[default]
    #[serde(rename = "KM")]
    Km,
    #[serde(rename = "MTS", alias = "M")]
    Mts,
}

impl DistanceUnit {
    pub fn label(self) -> &'static str {
        match self {
            Self::Km => "KM",
            Self::Mts => "MTS",
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Free-text cardio metrics; units are implied by the field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardioMetrics {
    #[serde(default)]
    pub speed: String,
    #[serde(default)]
    pub distance: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_unit: Option<DistanceUnit>,
    #[serde(default)]
    pub incline: String,
    #[serde(default)]
    pub calories: String,
    #[serde(default)]
    pub time: String,
}

fn cardio_day() -> DayCategory {
    DayCategory::Cardio
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardioSession {
    pub id: CardioId,
    #[serde(default = "cardio_day")]
    pub day: DayCategory,
    #[serde(default)]
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub metrics: CardioMetrics,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub sede: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardioSnapshot {
    #[serde(default)]
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub metrics: CardioMetrics,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Record for CardioSession {
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

impl Promotable for CardioSession {
    type Snapshot = CardioSnapshot;

    fn snapshot(&self) -> CardioSnapshot {
        CardioSnapshot {
            date: self.date.clone(),
            title: self.title.clone(),
            metrics: self.metrics.clone(),
            notes: self.notes.clone(),
        }
    }
}
