// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gymtrack-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gymtrack and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use chrono::{Duration, NaiveDate};
use gymtrack::model::{DayCategory, LogId};
use gymtrack::ops::{ExerciseDraft, LogOp, Op, SedeOp};
use serde_json::{json, Value};

pub const EXERCISES: [&str; 6] = ["PRESS BANCA", "SENTADILLA", "REMO", "CURL", "PESO MUERTO", "DIPS"];
pub const LEGACY_DATES: [&str; 4] = ["Vie, 1 mar.", "Lun, 4 mar.", "mar 5", "Mié, 6 mar."];

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 5).expect("fixture date")
}

fn day_for(idx: usize) -> DayCategory {
    DayCategory::ALL[idx % 4]
}

fn iso_date(idx: usize) -> String {
    (today() - Duration::days((idx % 90) as i64)).format("%Y-%m-%d").to_string()
}

/// A pre-migration blob: one combined exercise list, half of it saved, plus per-sede cardio.
pub fn legacy_blob(log_count: usize, cardio_count: usize) -> String {
    let logs: Vec<Value> = (0..log_count)
        .map(|idx| {
            let date = if idx % 5 == 0 {
                LEGACY_DATES[idx % LEGACY_DATES.len()].to_owned()
            } else {
                iso_date(idx)
            };
            let kilos = format!("{}", 20 + idx % 60);
            let mut log = json!({
                "id": format!("log_{idx:06}"),
                "exerciseName": EXERCISES[idx % EXERCISES.len()],
                "date": date,
                "series": "4",
                "reps": "8",
                "kilos": kilos,
                "day": day_for(idx).label(),
                "media": [],
                "sede": if idx % 3 == 0 { "LEGANÉS" } else { "VENTAS" },
            });
            if idx % 2 == 0 {
                log["isSavedToSummary"] = Value::from(true);
                log["savedState"] = json!({
                    "exerciseName": EXERCISES[idx % EXERCISES.len()],
                    "date": date,
                    "series": "4",
                    "reps": "8",
                    "kilos": kilos,
                    "media": [],
                });
            }
            log
        })
        .collect();

    let cardio: Vec<Value> = (0..cardio_count)
        .map(|idx| {
            json!({
                "id": format!("cardio_{idx:06}"),
                "date": iso_date(idx),
                "metrics": { "speed": "10", "distance": "800", "distanceUnit": "M", "time": "30" },
                "isSavedToSummary": idx % 2 == 0,
            })
        })
        .collect();

    json!({
        "activeSede": "VENTAS",
        "exerciseLogs": logs,
        "sedes": { "VENTAS": { "cardioSessions": cardio } },
    })
    .to_string()
}

/// Adds `count` logs at the active sede and promotes every other one.
pub fn add_and_promote_ops(count: usize) -> Vec<Op> {
    let mut ops = Vec::with_capacity(count * 2 + 1);
    ops.push(Op::Sede(SedeOp::SetActive { name: Some("ventas".to_owned()) }));
    for idx in 0..count {
        let log_id = LogId::new(format!("bench_log_{idx:06}")).expect("log id");
        let draft = ExerciseDraft::new(EXERCISES[idx % EXERCISES.len()], iso_date(idx), day_for(idx))
            .sets("4", "8", &format!("{}", 20 + idx % 60));
        ops.push(Op::Log(LogOp::Add { log_id: log_id.clone(), draft }));
        if idx % 2 == 0 {
            ops.push(Op::Log(LogOp::Promote { log_id }));
        }
    }
    ops
}
