//! Activity directory storage.
//!
//! [`ActivityStore`] is the seam between the HTTP layer and wherever the
//! catalog lives. [`InMemoryActivityStore`] keeps it in process memory and
//! is the only implementation; it is lost on restart.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::activity::{CapacityPolicy, Catalog};
use crate::error::CoreError;

/// Read and mutate the activity directory.
#[async_trait]
pub trait ActivityStore: Send + Sync {
    /// Snapshot of every activity, in catalog order.
    async fn list_all(&self) -> Catalog;

    /// Append `email` to the participants of `activity`.
    ///
    /// Fails with [`CoreError::NotFound`] for an unknown activity and
    /// [`CoreError::Conflict`] if the email is already signed up.
    async fn add_participant(&self, activity: &str, email: &str) -> Result<(), CoreError>;

    /// Remove `email` from the participants of `activity`.
    ///
    /// Fails with [`CoreError::NotFound`] for an unknown activity or an
    /// email that is not signed up.
    async fn remove_participant(&self, activity: &str, email: &str) -> Result<(), CoreError>;
}

/// Process-memory directory guarded by a single lock.
///
/// Mutations hold the write lock across the whole check-then-modify
/// sequence, so concurrent signups for the same email cannot both succeed.
pub struct InMemoryActivityStore {
    catalog: RwLock<Catalog>,
    capacity: CapacityPolicy,
}

impl InMemoryActivityStore {
    pub fn new(catalog: Catalog, capacity: CapacityPolicy) -> Self {
        Self {
            catalog: RwLock::new(catalog),
            capacity,
        }
    }
}

#[async_trait]
impl ActivityStore for InMemoryActivityStore {
    async fn list_all(&self) -> Catalog {
        self.catalog.read().await.clone()
    }

    async fn add_participant(&self, activity: &str, email: &str) -> Result<(), CoreError> {
        let mut catalog = self.catalog.write().await;
        let entry = catalog
            .get_mut(activity)
            .ok_or_else(|| CoreError::activity_not_found(activity))?;

        if entry.is_signed_up(email) {
            return Err(CoreError::Conflict {
                activity: activity.to_string(),
                email: email.to_string(),
            });
        }

        if self.capacity == CapacityPolicy::Enforced && entry.is_full() {
            return Err(CoreError::CapacityReached {
                activity: activity.to_string(),
                max_participants: entry.max_participants,
            });
        }

        entry.participants.push(email.to_string());

        tracing::debug!(
            activity,
            participants = entry.participants.len(),
            spots_left = entry.spots_left(),
            "Participant added",
        );
        Ok(())
    }

    async fn remove_participant(&self, activity: &str, email: &str) -> Result<(), CoreError> {
        let mut catalog = self.catalog.write().await;
        let entry = catalog
            .get_mut(activity)
            .ok_or_else(|| CoreError::activity_not_found(activity))?;

        let position = entry
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or_else(|| CoreError::participant_not_found(email))?;

        // `remove` rather than `swap_remove`: signup order must survive.
        entry.participants.remove(position);

        tracing::debug!(
            activity,
            participants = entry.participants.len(),
            "Participant removed",
        );
        Ok(())
    }
}
