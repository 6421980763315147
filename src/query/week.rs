// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gymtrack-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gymtrack and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use chrono::{Datelike, Duration, NaiveDate};

use crate::model::{month_name, parse_date, Record};

/// Half-open seven-day window `[start, start + 7)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekRange {
    start: NaiveDate,
}

impl WeekRange {
    pub fn starting(start: NaiveDate) -> Self {
        Self { start }
    }

    /// Parses a week-start string with the same rules as record dates.
    pub fn parse(week_start: &str, today: NaiveDate) -> Option<Self> {
        parse_date(week_start, today).map(Self::starting)
    }

    /// The Monday-based week containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self::starting(monday_of(date))
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Exclusive end.
    pub fn end(&self) -> NaiveDate {
        self.start + Duration::days(7)
    }

    /// Last day inside the window.
    pub fn last_day(&self) -> NaiveDate {
        self.start + Duration::days(6)
    }

    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end()
    }

    /// Unparseable record dates are never inside a week.
    pub fn contains(&self, raw_date: &str, today: NaiveDate) -> bool {
        parse_date(raw_date, today).is_some_and(|date| self.contains_date(date))
    }

    pub fn contains_record<T: Record>(&self, record: &T, today: NaiveDate) -> bool {
        self.contains(record.date(), today)
    }

    /// Ordinal of the week inside its month, counted from the first day in blocks of seven.
    pub fn week_of_month(&self) -> u32 {
        (self.start.day() + 6) / 7
    }

    /// `"Semana del 26 de febrero al 3 de marzo, 2024"`, or the shorter form when both ends share
    /// a month.
    pub fn label(&self) -> String {
        let end = self.last_day();
        let year = self.start.year();
        let (start_day, start_month) = (self.start.day(), month_name(self.start));
        let (end_day, end_month) = (end.day(), month_name(end));
        if start_month == end_month {
            format!("Semana del {start_day} al {end_day} de {start_month}, {year}")
        } else {
            format!("Semana del {start_day} de {start_month} al {end_day} de {end_month}, {year}")
        }
    }
}

pub fn monday_of(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}
