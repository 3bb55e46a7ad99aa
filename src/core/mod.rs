//! # Core Application Logic
//!
//! This module contains Tally's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • input (validation)   │
//!                    │  • operations (math)    │
//!                    │  • state (session)      │
//!                    │  • action (reducer)     │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                  ┌─────────────┴─────────────┐
//!                  ▼                           ▼
//!           ┌────────────┐              ┌────────────┐
//!           │    TUI     │              │  One-shot  │
//!           │  Adapter   │              │    CLI     │
//!           │ (ratatui)  │              │            │
//!           └────────────┘              └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`input`]: Raw text → `f64`, with `MissingInput` / `InvalidNumber` errors
//! - [`operations`]: The three calculator operations and their primitives
//! - [`state`]: The `Calculator` struct, all session state in one place
//! - [`action`]: The `Action` enum and `update()`
//! - [`config`]: `~/.tally/config.toml` loading and override resolution

pub mod action;
pub mod config;
pub mod input;
pub mod operations;
pub mod state;
