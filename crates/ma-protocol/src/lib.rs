//! ma-protocol: Shared types for the mock agents.
//!
//! This crate defines the lifecycle labels and action vocabulary used by
//! `ma-core`. It carries no behavior of its own.

pub mod action;
pub mod state;

pub use action::Action;
pub use state::{AgentState, StudyState, UnknownState};
