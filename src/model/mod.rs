// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gymtrack-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gymtrack and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! An [`AppState`] holds the sede configuration map plus four flat record collections: daily and
//! summary exercise logs, daily and summary cardio sessions.

pub mod cardio;
pub mod daily;
pub mod date;
pub mod day;
pub mod exercise;
pub mod ids;
pub mod media;
pub mod sede;
pub mod snapshot;
pub mod state;

pub use cardio::{CardioMetrics, CardioSession, CardioSnapshot, DistanceUnit};
pub use daily::Daily;
pub use date::{format_iso_date, month_name, parse_date, parse_iso_date};
pub use day::{DayCategory, ParseDayCategoryError};
pub use exercise::{ExerciseLog, ExerciseSnapshot};
pub use ids::{identifiers_equal, CardioId, FavoriteId, Id, IdError, LinkId, LogId};
pub use media::{ExerciseMedia, MediaKind};
pub use sede::{
    normalize_sede_name, sede_names_equal, CardioForm, FavoriteExercise, LinkItem, SedeData,
    WorkoutDayState,
};
pub use snapshot::{Promotable, Record};
pub use state::{AppState, DEFAULT_SEDES};
