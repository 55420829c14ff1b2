use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Activity name -> activity record. Ordered by name so listings are stable.
pub type ActivityCatalog = BTreeMap<String, Activity>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// Signup order; emails are unique within one activity.
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(description: &str, schedule: &str, max_participants: u32) -> Self {
        Self {
            description: description.to_string(),
            schedule: schedule.to_string(),
            max_participants,
            participants: Vec::new(),
        }
    }

    pub fn with_participants(mut self, emails: &[&str]) -> Self {
        self.participants = emails.iter().map(|e| e.to_string()).collect();
        self
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    // Capacity is informational only; signup does not check it.
    pub fn is_over_capacity(&self) -> bool {
        self.participants.len() > self.max_participants as usize
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupConfirmation {
    pub message: String,
}

impl SignupConfirmation {
    pub fn new(activity_name: &str, email: &str) -> Self {
        Self {
            message: format!("Signed up {} for {}", email, activity_name),
        }
    }
}
