// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gymtrack-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gymtrack and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Human-readable text reports.
//!
//! A report lists weeks newest first. Inside a week, records are grouped by day category in the
//! fixed [`DayCategory::ALL`] order and sorted by date within each group.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::model::date::{month_abbreviation, weekday_abbreviation};
use crate::model::{parse_date, AppState, CardioSession, DayCategory, DistanceUnit, ExerciseLog};
use crate::query::{monday_of, WeekRange};

use super::{
    day_file_name, day_selection, summary_file_name, week_file_name, week_selection,
    DayExportKind, ExportError, ExportFile, ExportFormat, NO_DATA_MESSAGE,
};

const REPORT_HEADER: &str = "PROGRESIÓN DE CARGA - RESUMEN\n===============================\n\n";
const WEEK_RULE: &str = "-------------------------------";

#[derive(Debug, Clone, Copy)]
enum Entry<'a> {
    Cardio(&'a CardioSession),
    Exercise(&'a ExerciseLog),
}

impl Entry<'_> {
    fn date(&self) -> &str {
        match self {
            Self::Cardio(session) => &session.date,
            Self::Exercise(log) => &log.date,
        }
    }

    fn day(&self) -> DayCategory {
        match self {
            Self::Cardio(session) => session.day,
            Self::Exercise(log) => log.day,
        }
    }

    fn render(&self, today: NaiveDate) -> String {
        match self {
            Self::Cardio(session) => cardio_block(session, today),
            Self::Exercise(log) => exercise_block(log, today),
        }
    }
}

/// `"Vie 1 mar"` for a parseable date; the raw string otherwise.
pub fn display_date(raw: &str, today: NaiveDate) -> String {
    match parse_date(raw, today) {
        Some(date) => format!(
            "{} {} {}",
            capitalize(weekday_abbreviation(date)),
            date.day(),
            month_abbreviation(date)
        ),
        None => raw.to_owned(),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

fn notes_line(notes: Option<&str>) -> Option<String> {
    notes.filter(|notes| !notes.is_empty()).map(|notes| format!("  - Notas: {notes}"))
}

pub fn cardio_block(session: &CardioSession, today: NaiveDate) -> String {
    let metrics = &session.metrics;
    let mut lines = vec![
        format!("CARDIO - {} [Sede: {}]", display_date(&session.date, today), session.sede),
        format!("  - Velocidad: {} KM/H", or_dash(&metrics.speed)),
        format!(
            "  - Distancia: {} {}",
            or_dash(&metrics.distance),
            metrics.distance_unit.map_or("KM", DistanceUnit::label)
        ),
        format!("  - Inclinación: {} %", or_dash(&metrics.incline)),
        format!("  - Tiempo: {} min", or_dash(&metrics.time)),
        format!("  - Calorías: {} Kcal", or_dash(&metrics.calories)),
    ];
    lines.extend(notes_line(session.notes.as_deref()));
    lines.join("\n")
}

pub fn exercise_block(log: &ExerciseLog, today: NaiveDate) -> String {
    let mut lines = vec![
        format!(
            "{} - {} [Sede: {}]",
            log.exercise_name.to_uppercase(),
            display_date(&log.date, today),
            log.sede
        ),
        format!(
            "  - {} series x {} reps @ {} kgs",
            or_dash(&log.series),
            or_dash(&log.reps),
            or_dash(&log.kilos)
        ),
    ];
    lines.extend(notes_line(log.notes.as_deref()));
    lines.join("\n")
}

/// Full report over the given records. Records with unparseable dates are left out.
pub fn summary_text<'a>(
    cardio: impl IntoIterator<Item = &'a CardioSession>,
    logs: impl IntoIterator<Item = &'a ExerciseLog>,
    today: NaiveDate,
) -> String {
    let mut weeks: BTreeMap<NaiveDate, BTreeMap<DayCategory, Vec<(NaiveDate, Entry<'a>)>>> =
        BTreeMap::new();
    let entries =
        cardio.into_iter().map(Entry::Cardio).chain(logs.into_iter().map(Entry::Exercise));
    for entry in entries {
        let Some(date) = parse_date(entry.date(), today) else {
            continue;
        };
        weeks
            .entry(monday_of(date))
            .or_default()
            .entry(entry.day())
            .or_default()
            .push((date, entry));
    }

    if weeks.is_empty() {
        return NO_DATA_MESSAGE.to_owned();
    }

    let mut text = String::from(REPORT_HEADER);
    for (monday, mut days) in weeks.into_iter().rev() {
        text.push_str(&WeekRange::starting(monday).label().to_uppercase());
        text.push('\n');
        text.push_str(WEEK_RULE);
        text.push_str("\n\n");

        for day in DayCategory::ALL {
            let Some(mut items) = days.remove(&day) else {
                continue;
            };
            text.push_str(&format!("*** {} ***\n\n", day.title()));
            items.sort_by_key(|(date, _)| *date);
            for (_, entry) in items {
                text.push_str(&entry.render(today));
                text.push_str("\n\n");
            }
        }
        text.push('\n');
    }
    text
}

pub fn export_summary(state: &AppState, today: NaiveDate) -> ExportFile {
    ExportFile {
        file_name: summary_file_name(today, ExportFormat::Text),
        contents: summary_text(state.summary_cardio_sessions(), state.summary_logs(), today),
    }
}

pub fn export_week(state: &AppState, week: WeekRange, today: NaiveDate) -> ExportFile {
    let (cardio, logs) = week_selection(state, week, today);
    ExportFile {
        file_name: week_file_name(week, ExportFormat::Text),
        contents: summary_text(cardio, logs, today),
    }
}

/// Flat listing for one category in one week, in collection order.
pub fn export_day(
    state: &AppState,
    week: WeekRange,
    day: DayCategory,
    kind: DayExportKind,
    today: NaiveDate,
) -> Result<ExportFile, ExportError> {
    let (cardio, logs) = day_selection(state, week, day, kind, today);
    let blocks: Vec<String> = match kind {
        DayExportKind::Cardio => {
            cardio.into_iter().map(|session| cardio_block(session, today)).collect()
        }
        DayExportKind::Exercises => logs.into_iter().map(|log| exercise_block(log, today)).collect(),
    };
    if blocks.is_empty() {
        return Err(ExportError::NoData);
    }

    let contents =
        format!("Resumen para {} - {}\n\n{}", day.title(), week.label(), blocks.join("\n\n"));
    Ok(ExportFile { file_name: day_file_name(week, day, kind, ExportFormat::Text)?, contents })
}
