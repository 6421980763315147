// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gymtrack-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gymtrack and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Calendar-date normalization for record dates.
//!
//! Records carry their date as free text. Current records use `YYYY-MM-DD`; records written by
//! early versions use a Spanish display string such as `"Lun, 26 ago"` with no year.

use chrono::{Datelike, NaiveDate};

/// Legacy month abbreviations, indexed by zero-based month.
const LEGACY_MONTH_KEYS: [&str; 12] =
    ["ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sep", "oct", "nov", "dic"];

const MONTH_NAMES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

const MONTH_ABBREVIATIONS: [&str; 12] =
    ["ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic"];

const WEEKDAY_ABBREVIATIONS: [&str; 7] = ["lun", "mar", "mié", "jue", "vie", "sáb", "dom"];

/// Legacy dates further than this many days ahead of "today" belong to the previous year.
const LEGACY_FUTURE_WINDOW_DAYS: i64 = 30;

/// Parses a record date.
///
/// Returns `None` for blank, malformed or impossible dates; callers exclude such records from
/// date-range operations instead of failing.
pub fn parse_date(raw: &str, today: NaiveDate) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if raw.contains('-') {
        return parse_iso_date(raw);
    }

    parse_legacy_date(raw, today)
}

/// Strict `YYYY-MM-DD`.
pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    let mut parts = raw.split('-');
    let (Some(year), Some(month), Some(day), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return None;
    };

    let all_digits = |s: &str, len: usize| s.len() == len && s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(year, 4) || !all_digits(month, 2) || !all_digits(day, 2) {
        return None;
    }

    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}

fn parse_legacy_date(raw: &str, today: NaiveDate) -> Option<NaiveDate> {
    let cleaned = raw.to_lowercase().replace([',', '.'], "");
    let parts = cleaned.split(' ').collect::<Vec<_>>();
    if parts.len() < 3 {
        return None;
    }

    let day = leading_number(parts[1])?;
    let month0 = LEGACY_MONTH_KEYS.iter().position(|key| *key == parts[2])?;
    let month = u32::try_from(month0).ok()? + 1;

    // 29 feb outside a leap year falls through to the previous year
    match NaiveDate::from_ymd_opt(today.year(), month, day) {
        Some(candidate) if (candidate - today).num_days() <= LEGACY_FUTURE_WINDOW_DAYS => {
            Some(candidate)
        }
        _ => NaiveDate::from_ymd_opt(today.year() - 1, month, day),
    }
}

fn leading_number(s: &str) -> Option<u32> {
    let digits = s.chars().take_while(char::is_ascii_digit).collect::<String>();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

pub fn format_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Full lowercase Spanish month name, e.g. `"marzo"`.
pub fn month_name(date: NaiveDate) -> &'static str {
    MONTH_NAMES[date.month0() as usize]
}

pub(crate) fn month_abbreviation(date: NaiveDate) -> &'static str {
    MONTH_ABBREVIATIONS[date.month0() as usize]
}

pub(crate) fn weekday_abbreviation(date: NaiveDate) -> &'static str {
    WEEKDAY_ABBREVIATIONS[date.weekday().num_days_from_monday() as usize]
}
