//! User record operations.
//!
//! Profile edits and role changes never touch the overtime balance; the
//! balance field travels along unchanged on the updated record.

use tracing::info;

use crate::error::{ScheduleError, ScheduleResult};
use crate::models::{Role, User};

use super::Scheduler;

impl Scheduler {
    /// Updates a user's display name and email.
    pub async fn update_user(
        &self,
        user_id: i64,
        name: String,
        email: String,
    ) -> ScheduleResult<User> {
        if name.trim().is_empty() {
            return Err(ScheduleError::validation("name", "must not be empty"));
        }
        if email.trim().is_empty() {
            return Err(ScheduleError::validation("email", "must not be empty"));
        }

        let mut user = self
            .store()
            .get_user(user_id)
            .await?
            .ok_or(ScheduleError::UserNotFound { id: user_id })?;
        user.name = name;
        user.email = email;

        let user = self.store().update_user(user).await?;
        info!(user_id, "user profile updated");
        Ok(user)
    }

    /// Changes a user's role.
    pub async fn update_user_role(&self, user_id: i64, role: Role) -> ScheduleResult<User> {
        let mut user = self
            .store()
            .get_user(user_id)
            .await?
            .ok_or(ScheduleError::UserNotFound { id: user_id })?;
        user.role = role;

        let user = self.store().update_user(user).await?;
        info!(user_id, ?role, "user role updated");
        Ok(user)
    }
}
