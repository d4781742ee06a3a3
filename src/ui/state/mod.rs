// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! This module contains all the UI state logic separated from the main App struct,
//! following the principle of separation of concerns.

pub mod scroll;
