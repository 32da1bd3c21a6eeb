//! Priority levels shared by devices and alerts.

use serde::{Deserialize, Serialize};

/// Importance of a device load or an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Critical => "Critical",
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    /// Loads at this priority may be shed without user impact.
    pub fn is_sheddable(&self) -> bool {
        matches!(self, Priority::Medium | Priority::Low)
    }
}
