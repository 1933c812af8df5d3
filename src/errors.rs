// ABOUTME: Error types for the generation service
// ABOUTME: Re-exports the unified AppError system from pitchside-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pitchside Contributors

//! # Unified Error Handling System
//!
//! The service layer shares the core crate's [`AppError`]. `sqlx` errors
//! convert through the core crate's `database-errors` feature; pool and I/O
//! failures are tagged as dependency errors.

pub use pitchside_core::errors::*;
