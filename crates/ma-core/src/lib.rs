//! ma-core: In-memory mock agents.
//!
//! Two independent state holders live here: [`BasicAgent`], which switches
//! between working and resting, and [`StudyAgent`], which accumulates a
//! capped knowledge score from study sessions. Both keep an append-only
//! [`EventLog`].

pub mod basic;
pub mod config;
pub mod error;
pub mod memory;
pub mod study;

pub use basic::{ActionOutcome, BasicAgent};
pub use config::{AgentConfig, Config, StudyConfig};
pub use error::ConfigError;
pub use memory::EventLog;
pub use study::{StudyAgent, StudyOutcome, MAX_KNOWLEDGE};

pub use ma_protocol::{Action, AgentState, StudyState, UnknownState};
