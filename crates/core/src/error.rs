#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} not found: {name}")]
    NotFound { entity: &'static str, name: String },

    #[error("{email} is already signed up for {activity}")]
    Conflict { activity: String, email: String },

    #[error("{activity} is full ({max_participants} participants)")]
    CapacityReached {
        activity: String,
        max_participants: u32,
    },
}

impl CoreError {
    /// Activity name absent from the directory.
    pub fn activity_not_found(name: &str) -> Self {
        CoreError::NotFound {
            entity: "Activity",
            name: name.to_string(),
        }
    }

    /// Email absent from an activity's participant list.
    pub fn participant_not_found(email: &str) -> Self {
        CoreError::NotFound {
            entity: "Participant",
            name: email.to_string(),
        }
    }
}
