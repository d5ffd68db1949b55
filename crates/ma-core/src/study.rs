//! A study agent that builds up a capped knowledge score.
//!
//! Knowledge grows by one point per `minutes_per_point` minutes studied
//! (five by default) and never leaves `0..=MAX_KNOWLEDGE`. Studying needs
//! material to be loaded first; without it the agent falls back to idle and
//! nothing else changes.

use ma_protocol::StudyState;
use tracing::{debug, warn};

use crate::config::StudyConfig;
use crate::memory::EventLog;

/// Upper bound of the knowledge score.
pub const MAX_KNOWLEDGE: u8 = 100;

const DEFAULT_MINUTES_PER_POINT: u32 = 5;
const DEFAULT_PASS_THRESHOLD: u32 = 50;

/// Result of a single study session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudyOutcome {
    Studied {
        /// Minutes as requested, including negative values.
        minutes: i64,
        /// Points actually added after clamping.
        gain: u8,
        /// Knowledge level after the session.
        level: u8,
    },
    /// Nothing was loaded, so nothing was studied.
    NoMaterial,
}

impl StudyOutcome {
    pub fn message(self, name: &str) -> String {
        match self {
            StudyOutcome::Studied { level, .. } => {
                format!("{name} studied and reached {level}% knowledge.")
            }
            StudyOutcome::NoMaterial => format!("{name} has no material loaded to study."),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudyAgent {
    name: String,
    state: StudyState,
    knowledge_level: u8,
    loaded_material: Option<String>,
    memory: EventLog,
    minutes_per_point: u32,
    pass_threshold: u32,
}

impl Default for StudyAgent {
    fn default() -> Self {
        Self::from_config(&StudyConfig::default())
    }
}

impl StudyAgent {
    /// Create an idle agent with nothing loaded. `knowledge_level` is clamped
    /// to [`MAX_KNOWLEDGE`].
    pub fn new(name: impl Into<String>, knowledge_level: u8) -> Self {
        Self {
            name: name.into(),
            state: StudyState::Idle,
            knowledge_level: knowledge_level.min(MAX_KNOWLEDGE),
            loaded_material: None,
            memory: EventLog::new(),
            minutes_per_point: DEFAULT_MINUTES_PER_POINT,
            pass_threshold: DEFAULT_PASS_THRESHOLD,
        }
    }

    /// Build from config. A zero `minutes_per_point` (which validation
    /// rejects) is treated as the default.
    pub fn from_config(cfg: &StudyConfig) -> Self {
        let mut agent = Self::new(cfg.name.clone(), cfg.knowledge_level)
            .with_state(cfg.initial_state);
        if cfg.minutes_per_point > 0 {
            agent.minutes_per_point = cfg.minutes_per_point;
        }
        agent.pass_threshold = cfg.pass_threshold;
        agent
    }

    /// Start in `state` instead of `Idle`.
    pub fn with_state(mut self, state: StudyState) -> Self {
        self.state = state;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> StudyState {
        self.state
    }

    pub fn knowledge_level(&self) -> u8 {
        self.knowledge_level
    }

    pub fn loaded_material(&self) -> Option<&str> {
        self.loaded_material.as_deref()
    }

    pub fn memory(&self) -> &EventLog {
        &self.memory
    }

    pub fn pass_threshold(&self) -> u32 {
        self.pass_threshold
    }

    /// Load a topic and get ready to study it. Any topic is accepted,
    /// including the empty string, and replaces whatever was loaded before.
    pub fn load_material(&mut self, topic: impl Into<String>) -> String {
        let topic = topic.into();
        self.transition(StudyState::ReadyToStudy);
        self.memory.append(format!("Loaded material: {topic}"));
        let message = format!("{} is ready to study {topic}.", self.name);
        self.loaded_material = Some(topic);
        message
    }

    /// Study for `duration_minutes` and describe the result.
    pub fn study(&mut self, duration_minutes: i64) -> String {
        self.study_session(duration_minutes).message(&self.name)
    }

    /// Typed form of [`study`](Self::study).
    ///
    /// Negative durations count as zero minutes: the session still happens
    /// and is logged, but no knowledge is gained.
    pub fn study_session(&mut self, duration_minutes: i64) -> StudyOutcome {
        if self.loaded_material.is_none() {
            warn!(agent = %self.name, "study requested with no material loaded");
            self.transition(StudyState::Idle);
            return StudyOutcome::NoMaterial;
        }

        self.transition(StudyState::Studying);
        if duration_minutes < 0 {
            warn!(
                agent = %self.name,
                minutes = duration_minutes,
                "negative study duration, no knowledge gained"
            );
        }
        let gain = self.gain_for(duration_minutes);
        let before = self.knowledge_level;
        self.knowledge_level = before.saturating_add(gain).min(MAX_KNOWLEDGE);
        let gain = self.knowledge_level - before;
        self.transition(StudyState::ReadyForTest);

        self.memory.append(format!(
            "Studied for {duration_minutes} minutes, knowledge now {}%",
            self.knowledge_level
        ));
        StudyOutcome::Studied {
            minutes: duration_minutes,
            gain,
            level: self.knowledge_level,
        }
    }

    /// Points a session of `minutes` would add, before the cap is applied to
    /// the running total. Never more than [`MAX_KNOWLEDGE`].
    fn gain_for(&self, minutes: i64) -> u8 {
        let minutes = u64::try_from(minutes).unwrap_or(0);
        let points = minutes / u64::from(self.minutes_per_point);
        u8::try_from(points.min(u64::from(MAX_KNOWLEDGE))).unwrap_or(MAX_KNOWLEDGE)
    }

    /// Check knowledge against the configured pass threshold (50 by default).
    pub fn check_knowledge(&mut self) -> bool {
        self.check_knowledge_at(self.pass_threshold)
    }

    /// Check knowledge against `required_level`. The agent passes through
    /// `Testing` and always ends up `Idle`.
    pub fn check_knowledge_at(&mut self, required_level: u32) -> bool {
        self.transition(StudyState::Testing);
        let passed = u32::from(self.knowledge_level) >= required_level;
        debug!(
            agent = %self.name,
            level = self.knowledge_level,
            required = required_level,
            passed,
            "knowledge check"
        );
        self.transition(StudyState::Idle);
        passed
    }

    /// Append `event` to memory. Always succeeds.
    pub fn log_event(&mut self, event: impl Into<String>) -> bool {
        self.memory.append(event);
        true
    }

    fn transition(&mut self, to: StudyState) {
        debug!(agent = %self.name, from = %self.state, to = %to, "state transition");
        self.state = to;
    }
}
