// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gymtrack-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gymtrack and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Weekday category a log or session belongs to.
///
/// The persisted form is the Spanish label (`"Día 1"` … `"Día 4"`, `"Cardio"`); the display title
/// shown to the user is a separate lookup (see [`DayCategory::title`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DayCategory {
    Day1,
    Day2,
    Day3,
    Day4,
    Cardio,
}

impl DayCategory {
    /// Fixed grouping order used by summaries and text exports.
    pub const ALL: [DayCategory; 5] = [Self::Day1, Self::Day2, Self::Day3, Self::Day4, Self::Cardio];

    pub const WORKOUT_DAYS: [DayCategory; 4] = [Self::Day1, Self::Day2, Self::Day3, Self::Day4];

    pub fn label(self) -> &'static str {
        match self {
            Self::Day1 => "Día 1",
            Self::Day2 => "Día 2",
            Self::Day3 => "Día 3",
            Self::Day4 => "Día 4",
            Self::Cardio => "Cardio",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Day1 => "Pecho y Bíceps",
            Self::Day2 => "Pierna y Glúteo",
            Self::Day3 => "Hombro y Espalda",
            Self::Day4 => "Tríceps y Antebrazo",
            Self::Cardio => "Cardio",
        }
    }

    /// Muscle groups that get an (initially empty) video-link list on a fresh sede.
    pub fn default_muscle_groups(self) -> &'static [&'static str] {
        match self {
            Self::Day1 => &["Pecho", "Bíceps"],
            Self::Day2 => &["Pierna", "Glúteo"],
            Self::Day3 => &["Hombro", "Espalda"],
            Self::Day4 => &["Tríceps", "Antebrazo"],
            Self::Cardio => &[],
        }
    }

    pub fn is_workout_day(self) -> bool {
        self != Self::Cardio
    }
}

impl fmt::Display for DayCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown day category {0:?}")]
pub struct ParseDayCategoryError(pub String);

impl FromStr for DayCategory {
    type Err = ParseDayCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Día 1" | "Dia 1" => Ok(Self::Day1),
            "Día 2" | "Dia 2" => Ok(Self::Day2),
            "Día 3" | "Dia 3" => Ok(Self::Day3),
            "Día 4" | "Dia 4" => Ok(Self::Day4),
            "Cardio" => Ok(Self::Cardio),
            other => Err(ParseDayCategoryError(other.to_owned())),
        }
    }
}

impl TryFrom<String> for DayCategory {
    type Error = ParseDayCategoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DayCategory> for String {
    fn from(day: DayCategory) -> Self {
        day.label().to_owned()
    }
}
