// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gymtrack-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gymtrack and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Read-only queries over the state.
//!
//! Queries derive the week ranges used by exports, bulk deletion and the
//! command line summary.

pub mod week;

pub use week::{monday_of, WeekRange};
