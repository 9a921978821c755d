//! Feature set selection

use serde::Deserialize;
use std::fmt;

/// Deployment mode chosen at startup.
///
/// `Simple` gates the app behind one shared password and keeps no roster.
/// `Full` validates identity-provider tokens and enables the team dashboard.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FeatureSet {
    #[default]
    Simple,
    Full,
}

impl FeatureSet {
    pub fn is_full(&self) -> bool {
        *self == FeatureSet::Full
    }
}

impl fmt::Display for FeatureSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureSet::Simple => write!(f, "simple"),
            FeatureSet::Full => write!(f, "full"),
        }
    }
}

/// Feature configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct FeaturesConfig {
    #[serde(default)]
    pub feature_set: FeatureSet,

    /// Show team directory failure details in the dashboard's 500 responses.
    /// No other route returns a 500. Disable in production.
    #[serde(default)]
    pub verbose_directory_errors: bool,
}
