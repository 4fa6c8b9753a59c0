//! Reasoning configuration
//!
//! [`ReasoningConfig`] bounds a single inference run. Both limits are hard
//! ceilings: hitting either one fails the run, it never returns a partial
//! closure.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ReasoningError, Result};

/// Default maximum number of passes
pub const DEFAULT_MAX_DEPTH: usize = 10;

/// Default maximum number of derived triples
pub const DEFAULT_MAX_INFERENCES: usize = 10_000;

/// Which rule family a run uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ReasoningProfile {
    #[default]
    #[serde(rename = "RDFS")]
    Rdfs,
    #[serde(rename = "OWL_RL")]
    OwlRl,
    #[serde(rename = "CUSTOM")]
    Custom,
}

impl ReasoningProfile {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReasoningProfile::Rdfs => "RDFS",
            ReasoningProfile::OwlRl => "OWL_RL",
            ReasoningProfile::Custom => "CUSTOM",
        }
    }
}

impl fmt::Display for ReasoningProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReasoningProfile {
    type Err = ReasoningError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "rdfs" => Ok(ReasoningProfile::Rdfs),
            "owl_rl" | "owl-rl" | "owlrl" | "owl2rl" => Ok(ReasoningProfile::OwlRl),
            "custom" => Ok(ReasoningProfile::Custom),
            other => Err(ReasoningError::InvalidConfig(format!(
                "unknown reasoning profile '{}'",
                other
            ))),
        }
    }
}

/// Limits and profile for one inference run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReasoningConfig {
    /// Max passes before failing with `MaxDepthExceeded`
    pub max_depth: usize,
    /// Max derived triples before failing with `MaxInferencesExceeded`
    pub max_inferences: usize,
    /// Rule family to apply
    pub profile: ReasoningProfile,
}

impl Default for ReasoningConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_inferences: DEFAULT_MAX_INFERENCES,
            profile: ReasoningProfile::Rdfs,
        }
    }
}

impl ReasoningConfig {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_max_inferences(mut self, max_inferences: usize) -> Self {
        self.max_inferences = max_inferences;
        self
    }

    pub fn with_profile(mut self, profile: ReasoningProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Reject limits that could never allow a run to complete
    pub fn validate(&self) -> Result<()> {
        if self.max_depth == 0 {
            return Err(ReasoningError::InvalidConfig(
                "maxDepth must be at least 1".to_string(),
            ));
        }
        if self.max_inferences == 0 {
            return Err(ReasoningError::InvalidConfig(
                "maxInferences must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ReasoningConfig::default();
        assert_eq!(config.max_depth, 10);
        assert_eq!(config.max_inferences, 10_000);
        assert_eq!(config.profile, ReasoningProfile::Rdfs);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_limits_rejected() {
        let err = ReasoningConfig::default().with_max_depth(0).validate().unwrap_err();
        assert!(matches!(err, ReasoningError::InvalidConfig(_)));

        let err = ReasoningConfig::default()
            .with_max_inferences(0)
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("maxInferences"));
    }

    #[test]
    fn test_deserialize_partial_json_fills_defaults() {
        let config: ReasoningConfig =
            serde_json::from_str(r#"{"maxDepth": 3, "profile": "OWL_RL"}"#).unwrap();
        assert_eq!(config.max_depth, 3);
        assert_eq!(config.max_inferences, DEFAULT_MAX_INFERENCES);
        assert_eq!(config.profile, ReasoningProfile::OwlRl);
    }

    #[test]
    fn test_profile_from_str() {
        assert_eq!("rdfs".parse::<ReasoningProfile>().unwrap(), ReasoningProfile::Rdfs);
        assert_eq!("owl-rl".parse::<ReasoningProfile>().unwrap(), ReasoningProfile::OwlRl);
        assert_eq!("OWL_RL".parse::<ReasoningProfile>().unwrap(), ReasoningProfile::OwlRl);
        assert_eq!("Custom".parse::<ReasoningProfile>().unwrap(), ReasoningProfile::Custom);
        assert!("owl-full".parse::<ReasoningProfile>().is_err());
    }
}
