// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gymtrack-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gymtrack and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::cardio::{CardioMetrics, DistanceUnit};
use super::date::format_iso_date;
use super::day::DayCategory;
use super::ids::{FavoriteId, LinkId, LogId};
use super::media::ExerciseMedia;

/// Canonical sede name: trimmed and uppercased.
pub fn normalize_sede_name(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Case-insensitive sede name comparison.
pub fn sede_names_equal(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// The in-progress cardio entry of one day category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardioForm {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub metrics: CardioMetrics,
    #[serde(default)]
    pub notes: String,
}

impl CardioForm {
    pub fn blank(today: NaiveDate) -> Self {
        Self {
            date: format_iso_date(today),
            title: String::new(),
            metrics: CardioMetrics {
                distance_unit: Some(DistanceUnit::Km),
                ..CardioMetrics::default()
            },
            notes: String::new(),
        }
    }
}

fn visible() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutDayState {
    pub cardio: CardioForm,
    #[serde(default = "visible")]
    pub is_cardio_form_visible: bool,
    #[serde(default)]
    pub expanded_logs: Vec<LogId>,
}

impl WorkoutDayState {
    pub fn new(today: NaiveDate) -> Self {
        Self { cardio: CardioForm::blank(today), is_cardio_form_visible: true, expanded_logs: Vec::new() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkItem {
    pub id: LinkId,
    pub url: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteExercise {
    pub id: FavoriteId,
    pub name: String,
    #[serde(default)]
    pub day_title: String,
    #[serde(default)]
    pub media: Vec<ExerciseMedia>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Per-location configuration: favorites, day forms and reference video links.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SedeData {
    #[serde(default)]
    pub favorite_exercises: Vec<FavoriteExercise>,
    #[serde(default)]
    pub workout_days: BTreeMap<DayCategory, WorkoutDayState>,
    #[serde(default)]
    pub muscle_group_links: BTreeMap<DayCategory, BTreeMap<String, Vec<LinkItem>>>,
    #[serde(default)]
    pub stretching_links: Vec<LinkItem>,
    #[serde(default)]
    pub posture_links: Vec<LinkItem>,
}

impl SedeData {
    /// A fresh sede: each workout day has a blank form and lists its default muscle groups with
    /// no links. The Cardio day state is created on first use.
    pub fn initial(today: NaiveDate) -> Self {
        let workout_days = DayCategory::WORKOUT_DAYS
            .iter()
            .map(|day| (*day, WorkoutDayState::new(today)))
            .collect();

        let muscle_group_links = DayCategory::WORKOUT_DAYS
            .iter()
            .map(|day| {
                let groups = day
                    .default_muscle_groups()
                    .iter()
                    .map(|group| ((*group).to_owned(), Vec::new()))
                    .collect();
                (*day, groups)
            })
            .collect();

        Self {
            favorite_exercises: Vec::new(),
            workout_days,
            muscle_group_links,
            stretching_links: Vec::new(),
            posture_links: Vec::new(),
        }
    }

    /// Day state for `day`, created blank on first access.
    pub(crate) fn workout_day_mut(&mut self, day: DayCategory, today: NaiveDate) -> &mut WorkoutDayState {
        self.workout_days.entry(day).or_insert_with(|| WorkoutDayState::new(today))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{normalize_sede_name, sede_names_equal, SedeData};
    use crate::model::{DayCategory, DistanceUnit};

    #[test]
    fn initial_sede_seeds_workout_days_and_default_groups() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let sede = SedeData::initial(today);

        assert_eq!(
            sede.workout_days.keys().copied().collect::<Vec<_>>(),
            DayCategory::WORKOUT_DAYS
        );
        let day1 = &sede.workout_days[&DayCategory::Day1];
        assert!(day1.is_cardio_form_visible);
        assert_eq!(day1.cardio.date, "2024-03-01");
        assert_eq!(day1.cardio.metrics.distance_unit, Some(DistanceUnit::Km));

        let groups = &sede.muscle_group_links[&DayCategory::Day2];
        assert_eq!(groups.keys().collect::<Vec<_>>(), vec!["Glúteo", "Pierna"]);
        assert!(!sede.muscle_group_links.contains_key(&DayCategory::Cardio));
    }

    #[test]
    fn names_normalize_and_compare_without_case() {
        assert_eq!(normalize_sede_name("  centro "), "CENTRO");
        assert!(sede_names_equal("Leganés", "LEGANÉS"));
        assert!(!sede_names_equal("VENTAS", "VENTA"));
    }
}
