//! Paella kitchen simulation core.
//!
//! One cooking session: the player adds ingredients to a pan against a
//! compressed simulated clock, manages the fire, and is scored 0–100 at
//! the end. No UI here; a presentation layer drives `KitchenEngine`
//! through commands and a 1 Hz tick.

pub mod actions;
pub mod autochef;
pub mod catalog;
pub mod clock;
pub mod command;
pub mod config;
pub mod cook;
pub mod engine;
pub mod error;
pub mod event;
pub mod narrator;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;
pub mod ticker;
pub mod types;
