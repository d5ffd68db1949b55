//! A basic agent that switches between working and resting.

use ma_protocol::{Action, AgentState};
use tracing::debug;

use crate::config::AgentConfig;
use crate::memory::EventLog;

/// Result of dispatching an [`Action`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The agent is now working.
    StartedWork,
    /// The agent is now resting.
    Resting,
    /// The action was not recognized; state was left alone.
    Unrecognized,
}

impl ActionOutcome {
    /// Render the caller-facing message for an agent called `name`.
    pub fn message(self, name: &str) -> String {
        match self {
            ActionOutcome::StartedWork => format!("{name} started working."),
            ActionOutcome::Resting => format!("{name} is now resting."),
            ActionOutcome::Unrecognized => format!("{name} performed an unknown action."),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicAgent {
    name: String,
    state: AgentState,
    memory: EventLog,
}

impl Default for BasicAgent {
    fn default() -> Self {
        Self::from_config(&AgentConfig::default())
    }
}

impl BasicAgent {
    pub fn new(name: impl Into<String>, initial_state: AgentState) -> Self {
        Self {
            name: name.into(),
            state: initial_state,
            memory: EventLog::new(),
        }
    }

    pub fn from_config(cfg: &AgentConfig) -> Self {
        Self::new(cfg.name.clone(), cfg.initial_state)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> AgentState {
        self.state
    }

    pub fn memory(&self) -> &EventLog {
        &self.memory
    }

    /// Perform the action named by `action_type` and describe what happened.
    ///
    /// Unrecognized labels are not an error: the state stays put and the
    /// message says "unknown action". The event log is never touched.
    pub fn perform_action(&mut self, action_type: &str) -> String {
        self.dispatch(Action::parse(action_type))
            .message(&self.name)
    }

    /// Typed form of [`perform_action`](Self::perform_action).
    pub fn dispatch(&mut self, action: Action) -> ActionOutcome {
        match action {
            Action::Work => {
                self.transition(AgentState::Working);
                ActionOutcome::StartedWork
            }
            Action::Rest => {
                self.transition(AgentState::Resting);
                ActionOutcome::Resting
            }
            Action::Unknown(label) => {
                debug!(agent = %self.name, action = %label, "ignoring unknown action");
                ActionOutcome::Unrecognized
            }
        }
    }

    /// Append `event` to memory. Always succeeds.
    pub fn log_event(&mut self, event: impl Into<String>) -> bool {
        self.memory.append(event);
        true
    }

    fn transition(&mut self, to: AgentState) {
        debug!(agent = %self.name, from = %self.state, to = %to, "state transition");
        self.state = to;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_agent() {
        let agent = BasicAgent::default();
        assert_eq!(agent.name(), "Default Agent");
        assert_eq!(agent.state(), AgentState::Idle);
        assert!(agent.memory().is_empty());
    }

    #[test]
    fn outcome_messages() {
        assert_eq!(
            ActionOutcome::StartedWork.message("Bot"),
            "Bot started working."
        );
        assert_eq!(ActionOutcome::Resting.message("Bot"), "Bot is now resting.");
        assert_eq!(
            ActionOutcome::Unrecognized.message("Bot"),
            "Bot performed an unknown action."
        );
    }

    #[test]
    fn dispatch_work_then_rest() {
        let mut agent = BasicAgent::new("Bot", AgentState::Ready);
        assert_eq!(agent.dispatch(Action::Work), ActionOutcome::StartedWork);
        assert_eq!(agent.state(), AgentState::Working);
        assert_eq!(agent.dispatch(Action::Rest), ActionOutcome::Resting);
        assert_eq!(agent.state(), AgentState::Resting);
    }

    #[test]
    fn unknown_action_keeps_current_state() {
        let mut agent = BasicAgent::new("Bot", AgentState::Ready);
        agent.perform_action("work");
        let msg = agent.perform_action("");
        assert_eq!(agent.state(), AgentState::Working);
        assert!(msg.contains("unknown action"));
    }

    #[test]
    fn perform_action_does_not_log() {
        let mut agent = BasicAgent::default();
        agent.perform_action("work");
        agent.perform_action("rest");
        agent.perform_action("dance");
        assert!(agent.memory().is_empty());
    }

    #[test]
    fn messages_embed_agent_name() {
        let mut agent = BasicAgent::new("Ada", AgentState::Idle);
        assert_eq!(agent.perform_action("work"), "Ada started working.");
        assert_eq!(agent.perform_action("rest"), "Ada is now resting.");
    }

    #[test]
    fn from_config_uses_configured_values() {
        let cfg = AgentConfig {
            name: "Configured".to_string(),
            initial_state: AgentState::Resting,
        };
        let agent = BasicAgent::from_config(&cfg);
        assert_eq!(agent.name(), "Configured");
        assert_eq!(agent.state(), AgentState::Resting);
    }
}
