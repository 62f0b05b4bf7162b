//! # Core Application Logic
//!
//! This module contains pancake's checklist logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (checklist)    │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • Config (settings)    │
//!                    │                         │
//!                    │  No terminal. No UI.    │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: `ChecklistState`, the items, completion, cursor and mode
//! - [`action`]: the `Action` enum and the `update()` reducer
//! - [`config`]: `~/.pancake/config.toml` loading and resolution

pub mod action;
pub mod config;
pub mod state;
