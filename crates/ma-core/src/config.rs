//! TOML configuration for agent construction defaults.
//!
//! Every section and field is optional; anything left out falls back to the
//! built-in defaults.

use ma_protocol::{AgentState, StudyState};
use serde::Deserialize;

use crate::error::ConfigError;
use crate::study::MAX_KNOWLEDGE;

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub agent: AgentConfig,
    pub study: StudyConfig,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct AgentConfig {
    pub name: String,
    pub initial_state: AgentState,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: "Default Agent".to_string(),
            initial_state: AgentState::Idle,
        }
    }
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct StudyConfig {
    pub name: String,
    pub initial_state: StudyState,
    /// Starting knowledge score, 0..=100.
    pub knowledge_level: u8,
    /// Minutes of study per knowledge point gained. Must be non-zero.
    pub minutes_per_point: u32,
    /// Threshold used by `check_knowledge` when none is given.
    pub pass_threshold: u32,
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            name: "Study Agent".to_string(),
            initial_state: StudyState::Idle,
            knowledge_level: 0,
            minutes_per_point: 5,
            pass_threshold: 50,
        }
    }
}

impl StudyConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.knowledge_level > MAX_KNOWLEDGE {
            return Err(ConfigError::Invalid(format!(
                "study.knowledge_level must be at most {MAX_KNOWLEDGE}, got {}",
                self.knowledge_level
            )));
        }
        if self.minutes_per_point == 0 {
            return Err(ConfigError::Invalid(
                "study.minutes_per_point must be greater than zero".to_string(),
            ));
        }
        if self.pass_threshold > u32::from(MAX_KNOWLEDGE) {
            return Err(ConfigError::Invalid(format!(
                "study.pass_threshold must be at most {MAX_KNOWLEDGE}, got {}",
                self.pass_threshold
            )));
        }
        Ok(())
    }
}

impl Config {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let cfg: Config = toml::from_str(contents)?;
        cfg.study.validate()?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = Config::default();
        assert_eq!(cfg.agent.name, "Default Agent");
        assert_eq!(cfg.agent.initial_state, AgentState::Idle);
        assert_eq!(cfg.study.knowledge_level, 0);
        assert_eq!(cfg.study.minutes_per_point, 5);
        assert_eq!(cfg.study.pass_threshold, 50);
    }

    #[test]
    fn parse_empty_toml() {
        let cfg = Config::from_toml_str("").unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn parse_agent_section() {
        let toml_str = r#"
[agent]
name = "TestAgent"
initial_state = "ready"
"#;
        let cfg = Config::from_toml_str(toml_str).unwrap();
        assert_eq!(cfg.agent.name, "TestAgent");
        assert_eq!(cfg.agent.initial_state, AgentState::Ready);
        assert_eq!(cfg.study, StudyConfig::default());
    }

    #[test]
    fn parse_study_section() {
        let toml_str = r#"
[study]
name = "Scholar"
initial_state = "ready to study"
knowledge_level = 40
pass_threshold = 75
"#;
        let cfg = Config::from_toml_str(toml_str).unwrap();
        assert_eq!(cfg.study.name, "Scholar");
        assert_eq!(cfg.study.initial_state, StudyState::ReadyToStudy);
        assert_eq!(cfg.study.knowledge_level, 40);
        assert_eq!(cfg.study.minutes_per_point, 5);
        assert_eq!(cfg.study.pass_threshold, 75);
    }

    #[test]
    fn unknown_state_label_is_a_parse_error() {
        let toml_str = r#"
[agent]
initial_state = "sleeping"
"#;
        let err = Config::from_toml_str(toml_str).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn zero_minutes_per_point_is_invalid() {
        let toml_str = r#"
[study]
minutes_per_point = 0
"#;
        let err = Config::from_toml_str(toml_str).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains("minutes_per_point"));
    }

    #[test]
    fn knowledge_above_cap_is_invalid() {
        let toml_str = r#"
[study]
knowledge_level = 101
"#;
        let err = Config::from_toml_str(toml_str).unwrap_err();
        assert!(err.to_string().contains("knowledge_level"));
    }

    #[test]
    fn pass_threshold_above_cap_is_invalid() {
        let cfg = StudyConfig {
            pass_threshold: 150,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }
}
