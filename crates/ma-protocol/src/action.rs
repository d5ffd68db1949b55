//! Action vocabulary understood by the basic agent.

/// An action request, parsed from its text label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Start working.
    Work,
    /// Start resting.
    Rest,
    /// Anything else. Carries the label as given.
    Unknown(String),
}

impl Action {
    /// Parse an action label. Matching is exact and case-sensitive; every
    /// other input (including the empty string) becomes `Unknown`.
    pub fn parse(label: &str) -> Self {
        match label {
            "work" => Action::Work,
            "rest" => Action::Rest,
            other => Action::Unknown(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Action::Work => "work",
            Action::Rest => "rest",
            Action::Unknown(label) => label,
        }
    }
}

impl From<&str> for Action {
    fn from(label: &str) -> Self {
        Action::parse(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_actions() {
        assert_eq!(Action::parse("work"), Action::Work);
        assert_eq!(Action::parse("rest"), Action::Rest);
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert_eq!(Action::parse("Work"), Action::Unknown("Work".to_string()));
        assert_eq!(Action::parse(" rest"), Action::Unknown(" rest".to_string()));
    }

    #[test]
    fn parse_empty_is_unknown() {
        assert_eq!(Action::parse(""), Action::Unknown(String::new()));
    }

    #[test]
    fn as_str_keeps_original_label() {
        assert_eq!(Action::Work.as_str(), "work");
        assert_eq!(Action::from("think_deeply").as_str(), "think_deeply");
    }
}
