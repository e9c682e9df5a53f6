//! Terraforming climate model: a small deterministic state-update engine
//! plus the host loop that drives it from wall-clock time.

pub mod atmosphere;
pub mod clock;
pub mod command;
pub mod config;
pub mod engine;
pub mod error;
pub mod habitability;
pub mod history;
pub mod intervention;
pub mod presentation;
pub mod session;
pub mod snapshot;
pub mod types;
