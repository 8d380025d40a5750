//! # Core Application Logic
//!
//! This module contains Folio's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • PageStore (cache)    │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                      ┌─────────┴─────────┐
//!                      ▼                   ▼
//!               ┌────────────┐      ┌────────────┐
//!               │    TUI     │      │    API     │
//!               │  Adapter   │      │  (reqwest) │
//!               │ (ratatui)  │      │            │
//!               └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct — page cursor, selection, page store
//! - [`action`]: The `Action` enum and `update()` reducer
//! - [`pages`]: The keyed page cache with TTL and in-flight de-duplication
//! - [`config`]: Settings with a defaults → file → env → CLI hierarchy

pub mod action;
pub mod config;
pub mod pages;
pub mod state;
