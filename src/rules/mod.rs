//! Rules trait for game variants.
//!
//! Variants implement `GameRules` to define deck shape and scoring
//! policy. The core engine calls into `GameRules` but never interprets
//! variant-specific concepts directly.

pub mod policy;

pub use policy::{FlipBack, GameRules};
