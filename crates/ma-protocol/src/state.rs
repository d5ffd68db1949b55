//! Lifecycle labels for both agents.
//!
//! The labels are part of the observable contract: they show up verbatim in
//! configuration files and in the strings agents hand back to callers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A state label that does not belong to the target state set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} state: {label:?}")]
pub struct UnknownState {
    pub kind: &'static str,
    pub label: String,
}

// ---------------------------------------------------------------------------
// AgentState
// ---------------------------------------------------------------------------

/// State of a basic agent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentState {
    /// Not yet active.
    #[default]
    Idle,
    /// Constructed and waiting for an action.
    Ready,
    Working,
    Resting,
}

impl AgentState {
    pub fn as_str(self) -> &'static str {
        match self {
            AgentState::Idle => "idle",
            AgentState::Ready => "ready",
            AgentState::Working => "working",
            AgentState::Resting => "resting",
        }
    }
}

impl fmt::Display for AgentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgentState {
    type Err = UnknownState;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "idle" => Ok(AgentState::Idle),
            "ready" => Ok(AgentState::Ready),
            "working" => Ok(AgentState::Working),
            "resting" => Ok(AgentState::Resting),
            other => Err(UnknownState {
                kind: "agent",
                label: other.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// StudyState
// ---------------------------------------------------------------------------

/// State of a study agent.
///
/// The usual cycle is `Idle -> ReadyToStudy -> Studying -> ReadyForTest ->
/// Testing -> Idle`. Studying with nothing loaded drops back to `Idle`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StudyState {
    #[default]
    #[serde(rename = "idle")]
    Idle,
    #[serde(rename = "ready to study")]
    ReadyToStudy,
    #[serde(rename = "studying")]
    Studying,
    #[serde(rename = "ready for test")]
    ReadyForTest,
    #[serde(rename = "testing")]
    Testing,
}

impl StudyState {
    pub fn as_str(self) -> &'static str {
        match self {
            StudyState::Idle => "idle",
            StudyState::ReadyToStudy => "ready to study",
            StudyState::Studying => "studying",
            StudyState::ReadyForTest => "ready for test",
            StudyState::Testing => "testing",
        }
    }
}

impl fmt::Display for StudyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StudyState {
    type Err = UnknownState;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "idle" => Ok(StudyState::Idle),
            "ready to study" => Ok(StudyState::ReadyToStudy),
            "studying" => Ok(StudyState::Studying),
            "ready for test" => Ok(StudyState::ReadyForTest),
            "testing" => Ok(StudyState::Testing),
            other => Err(UnknownState {
                kind: "study",
                label: other.to_string(),
            }),
        }
    }
}
