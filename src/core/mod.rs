//! Core engine types: configuration, RNG, session state, and events.
//!
//! This module contains the building blocks that are variant-agnostic.
//! Game variants configure these via `GameConfig` rather than modifying
//! the core.

pub mod config;
pub mod event;
pub mod rng;
pub mod session;

pub use config::{GameConfig, Ticks};
pub use event::{EventRecord, GameEvent};
pub use rng::GameRng;
pub use session::{format_clock, EndReason, GameStatus, SessionState};
