use tracing::{info, warn};

use crate::database::{ActivityRegistry, RegistryError};
use crate::models::{ActivityCatalog, SignupConfirmation};

pub async fn list_activities(registry: &ActivityRegistry) -> ActivityCatalog {
    registry.snapshot().await
}

pub async fn signup_for_activity(
    registry: &ActivityRegistry,
    activity_name: &str,
    email: &str,
) -> Result<SignupConfirmation, RegistryError> {
    match registry.add_participant(activity_name, email).await {
        Ok(activity) => {
            info!(
                activity = %activity_name,
                email = %email,
                participants = activity.participants.len(),
                max_participants = activity.max_participants,
                "signup accepted"
            );
            if activity.is_over_capacity() {
                warn!(activity = %activity_name, "activity is over capacity");
            }
            Ok(SignupConfirmation::new(activity_name, email))
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %email, "signup rejected: {}", e);
            Err(e)
        }
    }
}
