//! Troubleshooting guide data model.

use serde::{Deserialize, Serialize};

/// One checklist item in a troubleshooting category.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TroubleshootingStep {
    /// Unique across the whole guide.
    pub id: String,
    pub title: String,
    pub description: String,
    /// Shell commands to run for this step.
    #[serde(default)]
    pub commands: Vec<String>,
    /// What a healthy system shows.
    #[serde(default)]
    pub expected_result: Option<String>,
    /// Hint when the check fails.
    #[serde(default)]
    pub trouble_tip: Option<String>,
}

/// A named group of ordered steps, e.g. "DNS Resolution".
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TroubleshootingCategory {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Icon key for the presentation layer (Network, Gauge, Globe, Shield, Wifi).
    pub icon: String,
    pub steps: Vec<TroubleshootingStep>,
}

impl TroubleshootingCategory {
    /// Look up a step of this category by id.
    pub fn step(&self, id: &str) -> Option<&TroubleshootingStep> {
        self.steps.iter().find(|s| s.id == id)
    }
}
