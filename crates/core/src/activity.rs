//! Activity records and the catalog they live in.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// All activities keyed by name, in seed order.
pub type Catalog = IndexMap<String, Activity>;

/// A single extracurricular activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    /// Human-readable meeting time.
    pub schedule: String,
    pub max_participants: u32,
    /// Participant emails in signup order.
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

    /// Builder-style helper used by the seed catalog.
    pub fn with_participants(mut self, emails: &[&str]) -> Self {
        self.participants = emails.iter().map(|e| e.to_string()).collect();
        self
    }

    pub fn is_signed_up(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants as usize
    }

    pub fn spots_left(&self) -> u32 {
        spots_left(self.max_participants, self.participants.len())
    }
}

fn spots_left(max_participants: u32, taken: usize) -> u32 {
    let taken = u32::try_from(taken).unwrap_or(u32::MAX);
    max_participants.saturating_sub(taken)
}

/// Whether `max_participants` is checked at signup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CapacityPolicy {
    /// Capacity is shown to clients but never rejects a signup.
    #[default]
    Informational,
    /// Signups are rejected once an activity is full.
    Enforced,
}

impl CapacityPolicy {
    pub fn from_flag(enforce: bool) -> Self {
        if enforce {
            CapacityPolicy::Enforced
        } else {
            CapacityPolicy::Informational
        }
    }
}
