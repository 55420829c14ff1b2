use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::models::{Activity, ActivityCatalog};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("activity not found: {0}")]
    ActivityNotFound(String),
    #[error("{email} is already signed up for {activity}")]
    AlreadySignedUp { activity: String, email: String },
}

/// In-memory activity catalog shared between request handlers.
///
/// Clones share the same underlying map. Signup holds the write lock across
/// lookup, duplicate check and append.
#[derive(Clone)]
pub struct ActivityRegistry {
    catalog: Arc<RwLock<ActivityCatalog>>,
}

impl ActivityRegistry {
    pub fn new(catalog: ActivityCatalog) -> Self {
        Self {
            catalog: Arc::new(RwLock::new(catalog)),
        }
    }

    pub async fn snapshot(&self) -> ActivityCatalog {
        self.catalog.read().await.clone()
    }

    pub async fn get(&self, name: &str) -> Option<Activity> {
        self.catalog.read().await.get(name).cloned()
    }

    pub async fn add_participant(
        &self,
        activity_name: &str,
        email: &str,
    ) -> Result<Activity, RegistryError> {
        let mut catalog = self.catalog.write().await;
        let activity = catalog
            .get_mut(activity_name)
            .ok_or_else(|| RegistryError::ActivityNotFound(activity_name.to_string()))?;

        if activity.has_participant(email) {
            return Err(RegistryError::AlreadySignedUp {
                activity: activity_name.to_string(),
                email: email.to_string(),
            });
        }

        activity.participants.push(email.to_string());
        Ok(activity.clone())
    }
}
