// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gymtrack-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gymtrack and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Gymtrack: state and reconciliation engine for a personal training log.
//!
//! Exercise logs and cardio sessions are recorded per sede (training location) into a daily
//! collection and can be promoted into a persistent summary history. All state lives in one
//! [`model::AppState`] that is mutated only through [`ops::apply_ops`] and persisted as a single
//! versioned JSON blob by [`store`].

pub mod format;
pub mod model;
pub mod ops;
pub mod query;
pub mod store;
pub mod tracker;

pub use tracker::{Clock, FixedClock, SystemClock, Tracker};
